use crate::card::Card;
use crate::config::AgentConfig;
use crate::game::{Command, DeckState, Hand};
use crate::strategy::scoring::draft_score;

/// A chosen draft card and where it sits in the offer
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPick {
    pub index: usize,
    pub card: Card,
    pub score: f64,
}

impl DraftPick {
    /// Picks are positional, unlike every other command
    pub fn command(&self) -> Command {
        Command::Pick(self.index)
    }
}

/// Choose the creature with the best draft score, first one on ties.
///
/// Creatures over the draft cost cap only come into play when nothing
/// cheaper is on offer. Returns `None` when no creature is offered. The deck
/// is not touched here; the caller commits the pick.
pub fn select_draft(offered: &Hand, deck: &DeckState, config: &AgentConfig) -> Option<DraftPick> {
    let mut best: Option<DraftPick> = None;
    let mut best_affordable = false;

    for (index, card) in offered.cards().iter().enumerate() {
        if !card.is_creature() {
            continue;
        }
        let affordable = card.cost <= config.max_draft_cost;
        let score = draft_score(card, deck, offered, config);

        let better = match &best {
            None => true,
            Some(current) => {
                (affordable && !best_affordable)
                    || (affordable == best_affordable && score > current.score)
            }
        };

        tracing::trace!(index, instance_id = card.instance_id, score, "draft candidate");

        if better {
            best_affordable = affordable;
            best = Some(DraftPick {
                index,
                card: card.clone(),
                score,
            });
        }
    }

    best
}
