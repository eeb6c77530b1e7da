pub mod attack;
pub mod basic;
pub mod draft;
pub mod scored;
pub mod scoring;
pub mod summon;

pub use attack::{resolve_attacks, CombatArena, CombatSlot};
pub use basic::BasicStrategy;
pub use draft::{select_draft, DraftPick};
pub use scored::ScoredStrategy;
pub use scoring::{card_score, draft_score};
pub use summon::{optimize_summons, SummonPlan};

use crate::card::Card;
use crate::config::AgentConfig;
use crate::game::{Command, DeckState, GameSnapshot};
use serde::{Deserialize, Serialize};

/// Decision capabilities the turn loop needs from a strategy
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    /// Card to draft this turn, `None` to pass. Must not assume the pick is committed.
    fn choose_draft(&self, snapshot: &GameSnapshot, deck: &DeckState) -> Option<DraftPick>;

    fn choose_summons(&self, snapshot: &GameSnapshot) -> Vec<Command>;

    fn choose_attacks(&self, snapshot: &GameSnapshot) -> Vec<Command>;

    fn card_score(&self, card: &Card) -> f64;
}

/// Strategy selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Basic,
    #[default]
    Scored,
}

impl StrategyKind {
    pub fn build(self, config: AgentConfig) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Basic => Box::new(BasicStrategy::new(config)),
            StrategyKind::Scored => Box::new(ScoredStrategy::new(config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_by_kind() {
        let config = AgentConfig::default();
        assert_eq!(StrategyKind::Basic.build(config.clone()).name(), "basic");
        assert_eq!(StrategyKind::Scored.build(config).name(), "scored");
        assert_eq!(StrategyKind::default(), StrategyKind::Scored);
    }
}
