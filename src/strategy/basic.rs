use crate::card::Card;
use crate::config::AgentConfig;
use crate::game::{Command, DeckState, GameSnapshot, Target};
use crate::strategy::draft::DraftPick;
use crate::strategy::Strategy;

/// Baseline: pass the draft, summon greedily, hit the guard or face
#[derive(Debug, Clone, Default)]
pub struct BasicStrategy {
    config: AgentConfig,
}

impl BasicStrategy {
    pub fn new(config: AgentConfig) -> Self {
        BasicStrategy { config }
    }
}

impl Strategy for BasicStrategy {
    fn name(&self) -> &str {
        "basic"
    }

    fn choose_draft(&self, _snapshot: &GameSnapshot, _deck: &DeckState) -> Option<DraftPick> {
        None
    }

    /// Summon creatures in hand order for as long as the mana lasts
    fn choose_summons(&self, snapshot: &GameSnapshot) -> Vec<Command> {
        if snapshot.board.size() >= self.config.board_capacity {
            return Vec::new();
        }
        let mut mana = snapshot.player.mana;
        let mut commands = Vec::new();
        for card in snapshot.hand.cards() {
            if card.is_creature() && card.cost <= mana {
                mana -= card.cost;
                commands.push(Command::Summon(card.instance_id));
            }
        }
        commands
    }

    fn choose_attacks(&self, snapshot: &GameSnapshot) -> Vec<Command> {
        let target = match snapshot.opponent_board.last_guard_index() {
            Some(index) => Target::Creature(snapshot.opponent_board.cards()[index].instance_id),
            None => Target::Face,
        };
        snapshot
            .board
            .cards()
            .iter()
            .map(|card| Command::Attack {
                attacker: card.instance_id,
                target,
            })
            .collect()
    }

    fn card_score(&self, card: &Card) -> f64 {
        if card.is_creature() {
            (card.attack + card.defense) as f64
        } else {
            0.0
        }
    }
}
