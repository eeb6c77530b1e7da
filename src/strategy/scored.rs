use crate::card::Card;
use crate::config::AgentConfig;
use crate::game::{Command, DeckState, GameSnapshot};
use crate::strategy::attack::resolve_attacks;
use crate::strategy::draft::{select_draft, DraftPick};
use crate::strategy::scoring;
use crate::strategy::summon::optimize_summons;
use crate::strategy::Strategy;

/// Score-driven play: draft by curve-weighted value, summon by knapsack,
/// attack with simulated combat
#[derive(Debug, Clone, Default)]
pub struct ScoredStrategy {
    config: AgentConfig,
}

impl ScoredStrategy {
    pub fn new(config: AgentConfig) -> Self {
        ScoredStrategy { config }
    }
}

impl Strategy for ScoredStrategy {
    fn name(&self) -> &str {
        "scored"
    }

    fn choose_draft(&self, snapshot: &GameSnapshot, deck: &DeckState) -> Option<DraftPick> {
        select_draft(&snapshot.hand, deck, &self.config)
    }

    fn choose_summons(&self, snapshot: &GameSnapshot) -> Vec<Command> {
        let plan = optimize_summons(
            &snapshot.hand,
            snapshot.player.mana,
            snapshot.board.size(),
            self.config.board_capacity,
        );
        tracing::debug!(
            selected = ?plan.selected,
            value = plan.total_value,
            mana = plan.mana_spent,
            "summon plan"
        );
        plan.commands(&snapshot.hand)
    }

    fn choose_attacks(&self, snapshot: &GameSnapshot) -> Vec<Command> {
        resolve_attacks(&snapshot.board, &snapshot.opponent_board)
    }

    fn card_score(&self, card: &Card) -> f64 {
        scoring::card_score(card)
    }
}
