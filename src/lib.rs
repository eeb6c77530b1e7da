pub mod agent;
pub mod card;
pub mod config;
pub mod game;
pub mod rng;
pub mod simulation;
pub mod strategy;

pub use agent::{Agent, TurnDecision};
pub use config::{AgentConfig, ConfigError};
pub use strategy::{Strategy, StrategyKind};
