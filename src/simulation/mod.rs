pub mod compare;
pub mod generator;

pub use compare::{compare_strategies, CompareReport, StrategyStats};
pub use generator::SnapshotGenerator;
