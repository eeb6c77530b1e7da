use clap::{Parser, Subcommand};
use locm_agent::agent::{self, Agent};
use locm_agent::rng::GameRng;
use locm_agent::simulation::compare_strategies;
use locm_agent::{AgentConfig, StrategyKind};
use std::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "locm-agent")]
#[command(about = "Legends of Code and Magic decision agent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Decision strategy
    #[arg(short, long, value_enum, default_value_t = StrategyKind::Scored, global = true)]
    strategy: StrategyKind,

    /// JSON file overriding agent settings
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log decisions to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the referee on stdin/stdout (default)
    Play,

    /// Run the agent over a recorded referee transcript
    Replay {
        /// Transcript file with one or more turns of referee input
        file: String,
    },

    /// Compare the basic and scored strategies on generated battle snapshots
    Compare {
        /// Number of snapshots to generate
        #[arg(short, long, default_value = "1000")]
        num_snapshots: u64,

        /// Seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => match AgentConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("✗ Failed to load config '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => AgentConfig::default(),
    };

    match cli.command {
        None | Some(Commands::Play) => play(cli.strategy, config),
        Some(Commands::Replay { file }) => replay(cli.strategy, config, &file),
        Some(Commands::Compare {
            num_snapshots,
            seed,
            json,
            progress,
        }) => compare(&config, num_snapshots, seed, json, progress),
    }
}

/// stdout carries the game protocol, so logs always go to stderr
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn play(kind: StrategyKind, config: AgentConfig) {
    let mut player = Agent::new(kind.build(config.clone()), config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = agent::run(&mut player, stdin.lock(), stdout.lock()) {
        eprintln!("✗ Turn {} failed: {}", player.turn() + 1, e);
        std::process::exit(1);
    }
}

fn replay(kind: StrategyKind, config: AgentConfig, path: &str) {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("✗ Failed to open transcript '{}': {}", path, e);
            std::process::exit(1);
        }
    };

    let mut player = Agent::new(kind.build(config.clone()), config);
    match agent::replay(&mut player, BufReader::new(file)) {
        Ok(lines) => {
            for (i, line) in lines.iter().enumerate() {
                println!("turn {:3}: {}", i + 1, line);
            }
            println!("\nDrafted deck: {} cards", player.deck().size());
        }
        Err(e) => {
            eprintln!("✗ Failed to replay '{}' at turn {}: {}", path, player.turn() + 1, e);
            std::process::exit(1);
        }
    }
}

fn compare(config: &AgentConfig, num_snapshots: u64, seed: Option<u64>, json: bool, progress: bool) {
    let seed = seed.unwrap_or_else(|| GameRng::new(None).seed());

    let start = std::time::Instant::now();
    let report = compare_strategies(config, num_snapshots, seed, progress);
    let elapsed = start.elapsed();

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("✗ Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", report.to_text());
        println!(
            "\nCompleted in {:.2?} ({:.0} snapshots/sec)",
            elapsed,
            num_snapshots as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
        );
    }
}
