//! Attack assignment with simulated sequential combat.
//!
//! Our creatures resolve weakest first. Each one hits the last enemy guard if
//! there is any guard, otherwise a lethal attacker goes for the highest
//! scoring enemy creature, and everything else goes face. Damage is applied
//! to a [`CombatArena`] so later attackers see earlier kills; when an
//! attacker's target is already dead it also sends an attack at face first.

use crate::card::{Ability, Card};
use crate::game::{Board, Command, Target};
use crate::strategy::scoring::card_score;
use std::cmp::Ordering;

/// Working copy of one enemy creature during resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatSlot {
    pub instance_id: i32,
    pub defense: i32,
    pub guard: bool,
    pub score: f64,
}

impl CombatSlot {
    pub fn is_dead(&self) -> bool {
        self.defense <= 0
    }
}

/// Index-addressed snapshot of the opponent board, dropped after resolution.
/// The board it was built from is never written to.
#[derive(Debug, Clone, Default)]
pub struct CombatArena {
    slots: Vec<CombatSlot>,
}

impl CombatArena {
    pub fn from_board(board: &Board) -> Self {
        CombatArena {
            slots: board
                .cards()
                .iter()
                .map(|card| CombatSlot {
                    instance_id: card.instance_id,
                    defense: card.defense,
                    guard: card.abilities.has(Ability::Guard),
                    score: card_score(card),
                })
                .collect(),
        }
    }

    pub fn slots(&self) -> &[CombatSlot] {
        &self.slots
    }

    /// Slot index for an instance id, `None` if no such enemy creature
    pub fn find(&self, instance_id: i32) -> Option<usize> {
        self.slots.iter().position(|s| s.instance_id == instance_id)
    }

    pub fn get(&self, instance_id: i32) -> Option<&CombatSlot> {
        self.find(instance_id).map(|index| &self.slots[index])
    }

    /// Last guard in board order
    pub fn forced_target(&self) -> Option<usize> {
        self.slots.iter().rposition(|s| s.guard)
    }

    /// Highest scoring creature, earliest on ties
    pub fn biggest_threat(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, slot) in self.slots.iter().enumerate() {
            let replace = match best {
                None => true,
                Some(b) => slot.score.partial_cmp(&self.slots[b].score) == Some(Ordering::Greater),
            };
            if replace {
                best = Some(index);
            }
        }
        best
    }

    /// Apply one attacker's damage. Lethal zeroes defense before damage.
    pub fn strike(&mut self, index: usize, attack: i32, lethal: bool) {
        if let Some(slot) = self.slots.get_mut(index) {
            if lethal {
                slot.defense = 0;
            }
            slot.defense -= attack;
        }
    }
}

/// Attack commands for every creature on `board`, in resolution order
pub fn resolve_attacks(board: &Board, opponent_board: &Board) -> Vec<Command> {
    let mut arena = CombatArena::from_board(opponent_board);

    let mut attackers: Vec<&Card> = board.cards().iter().collect();
    attackers.sort_by_key(|c| c.attack);

    let mut commands = Vec::with_capacity(attackers.len());
    for attacker in attackers {
        let lethal = attacker.abilities.has(Ability::Lethal);

        let target_index = match arena.forced_target() {
            Some(guard) => Some(guard),
            None if lethal => arena.biggest_threat(),
            None => None,
        };

        let target = match target_index {
            Some(index) => Target::Creature(arena.slots()[index].instance_id),
            None => Target::Face,
        };

        if let Target::Creature(id) = target {
            if arena.get(id).is_some_and(CombatSlot::is_dead) {
                commands.push(Command::Attack {
                    attacker: attacker.instance_id,
                    target: Target::Face,
                });
            }
        }

        commands.push(Command::Attack {
            attacker: attacker.instance_id,
            target,
        });

        if let Some(index) = target_index {
            arena.strike(index, attacker.attack, lethal);
        }

        tracing::trace!(
            attacker = attacker.instance_id,
            target = target.id(),
            lethal,
            "attack resolved"
        );
    }

    commands
}
