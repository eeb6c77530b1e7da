//! Summon selection as a 0/1 knapsack.
//!
//! Weight is mana cost, value is [`card_score`], capacity is the mana we
//! have this turn. The board cap is only checked up front: a full board
//! means no summons at all, otherwise the cap plays no part in selection.

use crate::card::Card;
use crate::game::{Command, Hand};
use crate::strategy::scoring::card_score;

/// Result of one knapsack run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummonPlan {
    /// Selected hand indices in hand order
    pub selected: Vec<usize>,
    /// Selected hand indices in the order backtracking found them
    pub trace: Vec<usize>,
    /// Sum of `card_score` over the selection
    pub total_value: f64,
    pub mana_spent: i32,
}

impl SummonPlan {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// `SUMMON` commands for the selection, in hand order
    pub fn commands(&self, hand: &Hand) -> Vec<Command> {
        self.selected
            .iter()
            .filter_map(|&index| hand.get(index))
            .map(|card| Command::Summon(card.instance_id))
            .collect()
    }
}

/// Pick the hand subset with the highest total score that fits in `mana`.
///
/// Returns an empty plan when `board_size` has already reached
/// `board_capacity`. Negative mana is treated as zero.
pub fn optimize_summons(hand: &Hand, mana: i32, board_size: usize, board_capacity: usize) -> SummonPlan {
    if board_size >= board_capacity {
        return SummonPlan::default();
    }
    let budget = mana.max(0) as usize;
    let cards = hand.cards();
    if cards.is_empty() {
        return SummonPlan::default();
    }

    let values: Vec<f64> = cards.iter().map(card_score).collect();
    let dp = fill_table(cards, &values, budget);

    let mut trace = Vec::new();
    let mut remaining = budget;
    for i in (1..=cards.len()).rev() {
        if dp[i][remaining] != dp[i - 1][remaining] {
            trace.push(i - 1);
            remaining -= cost_of(&cards[i - 1]);
        }
    }

    let mut selected = trace.clone();
    selected.reverse();

    let mana_spent = selected.iter().map(|&i| cards[i].cost).sum();
    let total_value = dp[cards.len()][budget];

    tracing::trace!(
        budget,
        ?trace,
        total_value,
        "knapsack backtrack"
    );

    SummonPlan {
        selected,
        trace,
        total_value,
        mana_spent,
    }
}

fn cost_of(card: &Card) -> usize {
    card.cost.max(0) as usize
}

/// `dp[i][m]`: best value from the first `i` cards with `m` mana
fn fill_table(cards: &[Card], values: &[f64], budget: usize) -> Vec<Vec<f64>> {
    let mut dp = vec![vec![0.0; budget + 1]; cards.len() + 1];
    for i in 1..=cards.len() {
        let cost = cost_of(&cards[i - 1]);
        for m in 0..=budget {
            let without = dp[i - 1][m];
            dp[i][m] = if cost > m {
                without
            } else {
                let with = dp[i - 1][m - cost] + values[i - 1];
                // Ties keep the smaller selection
                if with > without {
                    with
                } else {
                    without
                }
            };
        }
    }
    dp
}
