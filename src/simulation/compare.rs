//! Offline comparison of strategies on generated battle snapshots.

use crate::config::AgentConfig;
use crate::game::{Command, GameSnapshot, Target};
use crate::simulation::generator::SnapshotGenerator;
use crate::strategy::{card_score, Strategy, StrategyKind};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

/// Totals for one strategy across all snapshots
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrategyStats {
    pub summons: u64,
    /// Summed `card_score` of summoned cards, whatever the strategy's own scoring
    pub summoned_value: f64,
    pub mana_spent: i64,
    pub face_attacks: u64,
    pub creature_attacks: u64,
}

impl StrategyStats {
    fn record(&mut self, snapshot: &GameSnapshot, commands: &[Command]) -> f64 {
        let mut value = 0.0;
        for command in commands {
            match command {
                Command::Summon(id) => {
                    if let Some(card) = snapshot.find_card(*id) {
                        self.summons += 1;
                        self.mana_spent += i64::from(card.cost);
                        value += card_score(card);
                    }
                }
                Command::Attack { target: Target::Face, .. } => self.face_attacks += 1,
                Command::Attack { .. } => self.creature_attacks += 1,
                Command::Pick(_) | Command::Use { .. } | Command::Pass => {}
            }
        }
        self.summoned_value += value;
        value
    }

    fn merge(&mut self, other: &StrategyStats) {
        self.summons += other.summons;
        self.summoned_value += other.summoned_value;
        self.mana_spent += other.mana_spent;
        self.face_attacks += other.face_attacks;
        self.creature_attacks += other.creature_attacks;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompareReport {
    pub seed: u64,
    pub snapshots: u64,
    pub basic: StrategyStats,
    pub scored: StrategyStats,
    /// Snapshots where the knapsack plan was worth at least the greedy one
    pub scored_not_worse: u64,
}

impl CompareReport {
    fn new(seed: u64) -> Self {
        CompareReport {
            seed,
            ..CompareReport::default()
        }
    }

    fn merge(mut self, other: CompareReport) -> Self {
        self.snapshots += other.snapshots;
        self.basic.merge(&other.basic);
        self.scored.merge(&other.scored);
        self.scored_not_worse += other.scored_not_worse;
        self
    }

    /// Fraction of snapshots where the scored plan matched or beat greedy
    pub fn not_worse_rate(&self) -> f64 {
        if self.snapshots == 0 {
            return 0.0;
        }
        self.scored_not_worse as f64 / self.snapshots as f64
    }

    /// Human-readable summary
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Strategy comparison (seed {}, {} snapshots) ===\n\n",
            self.seed, self.snapshots
        ));
        out.push_str(&format!("{:20} {:>12} {:>12}\n", "Metric", "basic", "scored"));
        out.push_str(&format!("{:-<46}\n", ""));
        out.push_str(&format!(
            "{:20} {:>12} {:>12}\n",
            "Summons", self.basic.summons, self.scored.summons
        ));
        out.push_str(&format!(
            "{:20} {:>12.1} {:>12.1}\n",
            "Summoned value", self.basic.summoned_value, self.scored.summoned_value
        ));
        out.push_str(&format!(
            "{:20} {:>12} {:>12}\n",
            "Mana spent", self.basic.mana_spent, self.scored.mana_spent
        ));
        out.push_str(&format!(
            "{:20} {:>12} {:>12}\n",
            "Face attacks", self.basic.face_attacks, self.scored.face_attacks
        ));
        out.push_str(&format!(
            "{:20} {:>12} {:>12}\n",
            "Creature attacks", self.basic.creature_attacks, self.scored.creature_attacks
        ));
        out.push_str(&format!(
            "\nKnapsack plan at least as valuable as greedy: {:.1}%\n",
            self.not_worse_rate() * 100.0
        ));
        out
    }
}

fn compare_one(basic: &dyn Strategy, scored: &dyn Strategy, seed: u64) -> CompareReport {
    let snapshot = SnapshotGenerator::new(seed).battle();
    let mut report = CompareReport {
        snapshots: 1,
        ..CompareReport::default()
    };

    let mut basic_commands = basic.choose_attacks(&snapshot);
    basic_commands.extend(basic.choose_summons(&snapshot));
    let basic_value = report.basic.record(&snapshot, &basic_commands);

    let mut scored_commands = scored.choose_attacks(&snapshot);
    scored_commands.extend(scored.choose_summons(&snapshot));
    let scored_value = report.scored.record(&snapshot, &scored_commands);

    if scored_value + 1e-9 >= basic_value {
        report.scored_not_worse = 1;
    }
    report
}

/// Run both strategies over `snapshots` generated battles in parallel
pub fn compare_strategies(config: &AgentConfig, snapshots: u64, seed: u64, progress: bool) -> CompareReport {
    let basic = StrategyKind::Basic.build(config.clone());
    let scored = StrategyKind::Scored.build(config.clone());

    let pb = if progress {
        let pb = ProgressBar::new(snapshots);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} snapshots ({per_sec})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    // Per-thread accumulation, merged at the end
    let report = (0..snapshots)
        .into_par_iter()
        .fold(
            || CompareReport::new(seed),
            |acc, i| {
                let one = compare_one(basic.as_ref(), scored.as_ref(), seed.wrapping_add(i));
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
                acc.merge(one)
            },
        )
        .reduce(|| CompareReport::new(seed), CompareReport::merge);

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    tracing::info!(
        snapshots = report.snapshots,
        not_worse = report.scored_not_worse,
        "comparison finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_every_snapshot() {
        let report = compare_strategies(&AgentConfig::default(), 50, 9, false);
        assert_eq!(report.snapshots, 50);
        assert_eq!(report.seed, 9);
        assert!(report.scored_not_worse <= 50);
    }

    #[test]
    fn test_knapsack_never_loses_to_greedy() {
        // Both strategies summon creatures under the same mana budget and board
        // check, so the optimal plan can never be worth less
        let report = compare_strategies(&AgentConfig::default(), 200, 1234, false);
        assert_eq!(report.scored_not_worse, report.snapshots);
        assert!(report.scored.summoned_value + 1e-6 >= report.basic.summoned_value);
    }

    #[test]
    fn test_same_seed_same_report() {
        let a = compare_strategies(&AgentConfig::default(), 40, 5, false);
        let b = compare_strategies(&AgentConfig::default(), 40, 5, false);
        assert_eq!(a.snapshots, b.snapshots);
        assert_eq!(a.scored_not_worse, b.scored_not_worse);
        assert_eq!(a.basic.summons, b.basic.summons);
        assert_eq!(a.scored.mana_spent, b.scored.mana_spent);
    }

    #[test]
    fn test_text_report_mentions_both_strategies() {
        let report = compare_strategies(&AgentConfig::default(), 5, 1, false);
        let text = report.to_text();
        assert!(text.contains("basic"));
        assert!(text.contains("scored"));
        assert!(text.contains("5 snapshots"));
    }
}
