//! Card valuation heuristics.
//!
//! [`card_score`] folds a creature's stats, keywords and on-play effects into
//! one number. [`draft_score`] divides that by cost and damps it by how the
//! card fits the offered curve and how many picks already share its cost.

use crate::card::{Ability, Card};
use crate::config::AgentConfig;
use crate::game::{DeckState, Hand};

/// Weight of one point of defense relative to one point of attack
const DEFENSE_WEIGHT: f64 = 0.25;

/// Per-keyword multipliers, applied in this order
const ABILITY_FACTORS: [(Ability, f64); 6] = [
    // Neutral until excess damage is simulated
    (Ability::Breakthrough, 1.0),
    // Attacks the turn it lands, which the resolver does not use yet
    (Ability::Charge, 0.9),
    (Ability::Drain, 1.6),
    (Ability::Guard, 2.0),
    (Ability::Lethal, 4.0),
    (Ability::Ward, 1.2),
];

/// Bonus per point of health gained or opponent health removed on play
const HEALTH_SWING_FACTOR: f64 = 0.2;

/// Desirability of a card; 0.0 for anything that is not a creature
pub fn card_score(card: &Card) -> f64 {
    if !card.is_creature() {
        return 0.0;
    }

    let mut score = card.attack as f64 + DEFENSE_WEIGHT * card.defense as f64;

    for (ability, factor) in ABILITY_FACTORS {
        if card.abilities.has(ability) {
            score *= factor;
        }
    }

    if card.my_health_change > 0 {
        score *= 1.0 + HEALTH_SWING_FACTOR * card.my_health_change as f64;
    }
    if card.opponent_health_change < 0 {
        score *= 1.0 + HEALTH_SWING_FACTOR * card.opponent_health_change.abs() as f64;
    }

    score * (card.card_draw + 1) as f64
}

/// Draft value of `card` given what is already picked and what is on offer.
///
/// Cards above `max_draft_cost` score 0.0. Once `cost_saturation` picks share
/// the card's cost the score is the negated count, so a more crowded cost
/// ranks lower. A zero-cost card uses its raw score as cost efficiency.
pub fn draft_score(card: &Card, deck: &DeckState, offered: &Hand, config: &AgentConfig) -> f64 {
    if card.cost > config.max_draft_cost {
        return 0.0;
    }

    let cost_freq = deck.cost_frequency(card.cost);
    if cost_freq >= config.cost_saturation {
        return -(cost_freq as f64);
    }

    let average_draft_cost = offered.average_cost();
    let balance_factor =
        1.0 / (1.0 + (average_draft_cost + card.cost as f64 / 2.0 - config.ideal_cost).abs());

    let efficiency = card_score(card) / card.cost.max(1) as f64;
    efficiency * balance_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Abilities, CardType};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_base_score() {
        let card = Card::creature(1, 3, 4, 8);
        assert!(approx(card_score(&card), 6.0));
    }

    #[test]
    fn test_items_score_zero() {
        for card_type in [CardType::GreenItem, CardType::RedItem, CardType::BlueItem] {
            let mut card = Card::creature(1, 2, 5, 5)
                .with_abilities(Abilities::parse("BCDGLW").unwrap());
            card.card_type = card_type;
            card.card_draw = 2;
            assert_eq!(card_score(&card), 0.0);
        }
    }

    #[test]
    fn test_ability_factors_compound() {
        let plain = Card::creature(1, 3, 4, 0);
        let guard_lethal =
            plain.clone().with_abilities(Abilities::from_slice(&[Ability::Guard, Ability::Lethal]));
        assert!(approx(card_score(&guard_lethal), 4.0 * 2.0 * 4.0));

        let charge = plain.clone().with_abilities(Abilities::from_slice(&[Ability::Charge]));
        assert!(approx(card_score(&charge), 4.0 * 0.9));

        let breakthrough =
            plain.clone().with_abilities(Abilities::from_slice(&[Ability::Breakthrough]));
        assert!(approx(card_score(&breakthrough), card_score(&plain)));

        let all = plain.with_abilities(Abilities::parse("BCDGLW").unwrap());
        assert!(approx(card_score(&all), 4.0 * 0.9 * 1.6 * 2.0 * 4.0 * 1.2));
    }

    #[test]
    fn test_health_and_draw_effects() {
        let mut card = Card::creature(1, 2, 2, 4);
        card.my_health_change = 3;
        card.opponent_health_change = -2;
        card.card_draw = 1;
        // (2 + 1) * 1.6 * 1.4 * 2
        assert!(approx(card_score(&card), 3.0 * 1.6 * 1.4 * 2.0));
    }

    #[test]
    fn test_negative_own_health_and_positive_opponent_health_ignored() {
        let mut card = Card::creature(1, 2, 2, 4);
        card.my_health_change = -2;
        card.opponent_health_change = 2;
        assert!(approx(card_score(&card), 3.0));
    }

    #[test]
    fn test_draft_expensive_card_scores_zero() {
        let config = AgentConfig::default();
        let card = Card::creature(1, 7, 9, 9);
        let offered = Hand::from(vec![card.clone()]);
        assert_eq!(draft_score(&card, &DeckState::new(), &offered, &config), 0.0);
    }

    #[test]
    fn test_draft_saturated_cost_is_negative() {
        let config = AgentConfig::default();
        let mut deck = DeckState::new();
        for id in 0..7 {
            deck.record(Card::creature(id, 2, 1, 1));
        }
        let card = Card::creature(100, 2, 5, 5);
        let offered = Hand::from(vec![card.clone()]);
        assert_eq!(draft_score(&card, &deck, &offered, &config), -7.0);
    }

    #[test]
    fn test_draft_balance_factor() {
        let config = AgentConfig::default();
        let a = Card::creature(1, 2, 4, 4);
        let b = Card::creature(2, 4, 4, 4);
        let offered = Hand::from(vec![a.clone(), b.clone()]);
        // average cost 3, cost/2 = 1 -> balance 1/5; score 5/2
        let expected = 5.0 / 2.0 / 5.0;
        assert!(approx(draft_score(&a, &DeckState::new(), &offered, &config), expected));
    }

    #[test]
    fn test_draft_zero_cost_uses_raw_score() {
        let config = AgentConfig::default();
        let card = Card::creature(1, 0, 1, 2);
        let offered = Hand::from(vec![card.clone()]);
        // raw score 1.5, average 0, balance 1
        assert!(approx(draft_score(&card, &DeckState::new(), &offered, &config), 1.5));
    }
}
