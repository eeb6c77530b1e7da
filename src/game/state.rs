use crate::card::Card;
use crate::game::zones::{Board, Hand};
use serde::{Deserialize, Serialize};

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Draft,
    Battle,
}

impl Phase {
    /// Phase of a 1-based turn number; the first `draft_turns` turns are draft picks
    pub fn for_turn(turn: u32, draft_turns: u32) -> Phase {
        if turn <= draft_turns {
            Phase::Draft
        } else {
            Phase::Battle
        }
    }
}

/// Public counters for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: i32,
    pub mana: i32,
    pub deck_size: i32,
    pub rune: i32,
    pub draw: i32,
}

/// Everything the referee shows us at the start of a turn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub player: PlayerStats,
    pub opponent: PlayerStats,
    pub opponent_hand_size: i32,
    #[serde(default)]
    pub opponent_actions: Vec<String>,
    #[serde(default)]
    pub hand: Hand,
    #[serde(default)]
    pub board: Board,
    #[serde(default)]
    pub opponent_board: Board,
}

impl GameSnapshot {
    /// Battle snapshot from its three card zones
    pub fn battle(mana: i32, hand: Vec<Card>, board: Vec<Card>, opponent_board: Vec<Card>) -> Self {
        GameSnapshot {
            player: PlayerStats {
                mana,
                ..PlayerStats::default()
            },
            hand: Hand::from(hand),
            board: Board::from(board),
            opponent_board: Board::from(opponent_board),
            ..GameSnapshot::default()
        }
    }

    /// Draft snapshot where `offered` are the cards on the table
    pub fn draft(offered: Vec<Card>) -> Self {
        GameSnapshot {
            hand: Hand::from(offered),
            ..GameSnapshot::default()
        }
    }

    /// Look up a visible card by instance id in any zone
    pub fn find_card(&self, instance_id: i32) -> Option<&Card> {
        self.hand
            .cards()
            .iter()
            .chain(self.board.cards())
            .chain(self.opponent_board.cards())
            .find(|c| c.instance_id == instance_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_threshold() {
        assert_eq!(Phase::for_turn(1, 30), Phase::Draft);
        assert_eq!(Phase::for_turn(30, 30), Phase::Draft);
        assert_eq!(Phase::for_turn(31, 30), Phase::Battle);
    }

    #[test]
    fn test_battle_snapshot_zones() {
        let snapshot = GameSnapshot::battle(
            4,
            vec![Card::creature(1, 2, 2, 2)],
            vec![Card::creature(2, 1, 1, 1)],
            vec![Card::creature(3, 5, 4, 4)],
        );
        assert_eq!(snapshot.player.mana, 4);
        assert_eq!(snapshot.hand.size(), 1);
        assert!(snapshot.find_card(3).is_some());
        assert!(snapshot.find_card(99).is_none());
    }
}
