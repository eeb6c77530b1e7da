use crate::card::{Abilities, Ability, Card, CardType, Location};
use crate::game::{GameSnapshot, PlayerStats};
use crate::rng::GameRng;

/// Chance that a generated card carries a given keyword
const ABILITY_CHANCE: f64 = 0.15;
/// Chance that a generated card is an item rather than a creature
const ITEM_CHANCE: f64 = 0.15;
const MAX_HAND: i32 = 8;
const MAX_BOARD: i32 = 6;
const MAX_MANA: i32 = 12;

/// Produces plausible random snapshots for offline strategy comparison
pub struct SnapshotGenerator {
    rng: GameRng,
    next_id: i32,
}

impl SnapshotGenerator {
    pub fn new(seed: u64) -> Self {
        SnapshotGenerator {
            rng: GameRng::new(Some(seed)),
            next_id: 1,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Random card; costs lean low the way real decks do
    pub fn card(&mut self, location: Location) -> Card {
        let card_type = if self.rng.chance(ITEM_CHANCE) {
            match self.rng.between(1, 3) {
                1 => CardType::GreenItem,
                2 => CardType::RedItem,
                _ => CardType::BlueItem,
            }
        } else {
            CardType::Creature
        };

        let cost = self.rng.between(0, MAX_MANA).min(self.rng.between(0, MAX_MANA));
        let attack = self.rng.between(0, cost + 2);
        let defense = self.rng.between(1, cost + 3);

        let mut abilities = Abilities::new();
        for ability in Ability::ALL {
            if self.rng.chance(ABILITY_CHANCE) {
                abilities.insert(ability);
            }
        }

        let instance_id = self.next_id;
        self.next_id += 1;

        Card {
            card_number: self.rng.between(1, 160),
            instance_id,
            location,
            card_type,
            cost,
            attack,
            defense,
            abilities,
            my_health_change: self.rng.between(-1, 3).max(0),
            opponent_health_change: self.rng.between(-3, 1).min(0),
            card_draw: self.rng.between(-3, 1).max(0),
        }
    }

    fn creature(&mut self, location: Location) -> Card {
        let mut card = self.card(location);
        card.card_type = CardType::Creature;
        card
    }

    /// Battle-phase snapshot with random hand, boards and mana
    pub fn battle(&mut self) -> GameSnapshot {
        let mut snapshot = GameSnapshot {
            player: self.stats(),
            opponent: self.stats(),
            opponent_hand_size: self.rng.between(0, MAX_HAND),
            ..GameSnapshot::default()
        };

        for _ in 0..self.rng.between(0, MAX_HAND) {
            snapshot.hand.add_card(self.card(Location::Hand));
        }
        for _ in 0..self.rng.between(0, MAX_BOARD) {
            snapshot.board.add_card(self.creature(Location::PlayerBoard));
        }
        for _ in 0..self.rng.between(0, MAX_BOARD) {
            snapshot.opponent_board.add_card(self.creature(Location::OpponentBoard));
        }
        snapshot
    }

    /// Draft-phase snapshot offering three cards
    pub fn draft(&mut self) -> GameSnapshot {
        let mut offered: Vec<Card> = (0..3).map(|_| self.card(Location::Unrevealed)).collect();
        self.rng.shuffle(&mut offered);
        GameSnapshot::draft(offered)
    }

    fn stats(&mut self) -> PlayerStats {
        PlayerStats {
            health: self.rng.between(1, 30),
            mana: self.rng.between(1, MAX_MANA),
            deck_size: self.rng.between(0, 25),
            rune: 25,
            draw: 1,
        }
    }
}
