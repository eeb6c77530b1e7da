use crate::card::{Ability, Card};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hand - cards held by one side, in the order the referee sent them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards at each cost
    pub fn cost_distribution(&self) -> HashMap<i32, usize> {
        let mut distribution = HashMap::new();
        for card in &self.cards {
            *distribution.entry(card.cost).or_insert(0) += 1;
        }
        distribution
    }

    /// Mean cost of the hand, 0.0 when empty
    pub fn average_cost(&self) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }
        let total: i32 = self.cards.iter().map(|c| c.cost).sum();
        total as f64 / self.cards.len() as f64
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand { cards }
    }
}

/// Board - creatures in play for one side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Board { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn find(&self, instance_id: i32) -> Option<&Card> {
        self.cards.iter().find(|c| c.instance_id == instance_id)
    }

    /// Index of the last creature with Guard; later guards win over earlier ones
    pub fn last_guard_index(&self) -> Option<usize> {
        self.cards
            .iter()
            .rposition(|c| c.abilities.has(Ability::Guard))
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Board { cards }
    }
}

/// Cards picked during the draft; the only state carried between turns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckState {
    picked: Hand,
}

impl DeckState {
    pub fn new() -> Self {
        DeckState { picked: Hand::new() }
    }

    /// Append a drafted card
    pub fn record(&mut self, card: Card) {
        self.picked.add_card(card);
    }

    pub fn size(&self) -> usize {
        self.picked.size()
    }

    pub fn cards(&self) -> &[Card] {
        self.picked.cards()
    }

    /// How many picked cards share this cost
    pub fn cost_frequency(&self, cost: i32) -> usize {
        self.picked.cards().iter().filter(|c| c.cost == cost).count()
    }

    pub fn cost_distribution(&self) -> HashMap<i32, usize> {
        self.picked.cost_distribution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Abilities;

    fn card(id: i32, cost: i32) -> Card {
        Card::creature(id, cost, 1, 1)
    }

    #[test]
    fn test_cost_distribution() {
        let hand = Hand::from(vec![card(1, 2), card(2, 3), card(3, 2), card(4, 7)]);
        let dist = hand.cost_distribution();
        assert_eq!(dist.get(&2), Some(&2));
        assert_eq!(dist.get(&3), Some(&1));
        assert_eq!(dist.get(&7), Some(&1));
        assert_eq!(dist.get(&5), None);
    }

    #[test]
    fn test_average_cost() {
        assert_eq!(Hand::new().average_cost(), 0.0);
        let hand = Hand::from(vec![card(1, 1), card(2, 2), card(3, 6)]);
        assert!((hand.average_cost() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_last_guard_index() {
        let guard = Abilities::parse("---G--").unwrap();
        let board = Board::from(vec![
            card(1, 1).with_abilities(guard),
            card(2, 1),
            card(3, 1).with_abilities(guard),
            card(4, 1),
        ]);
        assert_eq!(board.last_guard_index(), Some(2));
        assert_eq!(Board::from(vec![card(5, 1)]).last_guard_index(), None);
    }

    #[test]
    fn test_board_find_missing_id() {
        let board = Board::from(vec![card(10, 1)]);
        assert!(board.find(10).is_some());
        assert!(board.find(11).is_none());
    }

    #[test]
    fn test_deck_state_cost_frequency() {
        let mut deck = DeckState::new();
        deck.record(card(1, 3));
        deck.record(card(2, 3));
        deck.record(card(3, 5));
        assert_eq!(deck.size(), 3);
        assert_eq!(deck.cost_frequency(3), 2);
        assert_eq!(deck.cost_frequency(4), 0);
        assert_eq!(deck.cost_distribution().get(&5), Some(&1));
    }
}
