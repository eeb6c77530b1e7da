//! Per-turn driver.
//!
//! [`Agent`] owns everything that survives between turns: the turn counter
//! and the drafted deck. Each turn it asks its strategy for commands; the
//! only mutation outside the counter is committing a draft pick.

use crate::config::AgentConfig;
use crate::game::{format_turn, Command, DeckState, GameSnapshot, Phase, ProtocolError, SnapshotReader};
use crate::strategy::{DraftPick, Strategy};
use std::io::{BufRead, Write};

/// What the agent wants to do this turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnDecision {
    pub phase: Phase,
    pub commands: Vec<Command>,
    /// Draft pick to commit, if any
    pub pick: Option<DraftPick>,
}

impl TurnDecision {
    /// Output line for the referee
    pub fn line(&self) -> String {
        format_turn(&self.commands)
    }
}

pub struct Agent {
    strategy: Box<dyn Strategy>,
    config: AgentConfig,
    deck: DeckState,
    turn: u32,
}

impl Agent {
    pub fn new(strategy: Box<dyn Strategy>, config: AgentConfig) -> Self {
        Agent {
            strategy,
            config,
            deck: DeckState::new(),
            turn: 0,
        }
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    /// Number of turns played so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Phase of the turn about to be read
    pub fn next_phase(&self) -> Phase {
        Phase::for_turn(self.turn + 1, self.config.draft_turns)
    }

    /// Compute a decision without changing any agent state
    pub fn decide(&self, phase: Phase, snapshot: &GameSnapshot) -> TurnDecision {
        match phase {
            Phase::Draft => {
                let pick = self.strategy.choose_draft(snapshot, &self.deck);
                let commands = pick.iter().map(DraftPick::command).collect();
                TurnDecision { phase, commands, pick }
            }
            Phase::Battle => {
                // Attacks go first; the summon plan does not depend on them
                let mut commands = self.strategy.choose_attacks(snapshot);
                commands.extend(self.strategy.choose_summons(snapshot));
                TurnDecision {
                    phase,
                    commands,
                    pick: None,
                }
            }
        }
    }

    /// Advance one turn, decide, and commit any draft pick
    pub fn play_turn(&mut self, snapshot: &GameSnapshot) -> TurnDecision {
        let phase = self.next_phase();
        self.turn += 1;

        let decision = self.decide(phase, snapshot);
        if let Some(pick) = &decision.pick {
            self.deck.record(pick.card.clone());
        }

        tracing::debug!(
            turn = self.turn,
            ?phase,
            strategy = self.strategy.name(),
            deck_size = self.deck.size(),
            line = %decision.line(),
            "turn decided"
        );

        decision
    }
}

/// Play turns from `input` until it ends, writing one line per turn to `output`.
/// Returns the number of turns played.
pub fn run<R: BufRead, W: Write>(agent: &mut Agent, input: R, mut output: W) -> Result<u32, ProtocolError> {
    let mut reader = SnapshotReader::new(input);
    let mut played = 0;
    while let Some(snapshot) = reader.read_turn(agent.next_phase())? {
        let decision = agent.play_turn(&snapshot);
        writeln!(output, "{}", decision.line())?;
        output.flush()?;
        played += 1;
    }
    tracing::info!(turns = played, deck_size = agent.deck().size(), "input finished");
    Ok(played)
}

/// Run a recorded transcript and collect the output lines
pub fn replay<R: BufRead>(agent: &mut Agent, input: R) -> Result<Vec<String>, ProtocolError> {
    let mut reader = SnapshotReader::new(input);
    let mut lines = Vec::new();
    while let Some(snapshot) = reader.read_turn(agent.next_phase())? {
        lines.push(agent.play_turn(&snapshot).line());
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::strategy::StrategyKind;

    fn scored_agent(draft_turns: u32) -> Agent {
        let config = AgentConfig {
            draft_turns,
            ..AgentConfig::default()
        };
        Agent::new(StrategyKind::Scored.build(config.clone()), config)
    }

    #[test]
    fn test_phase_switches_after_draft_turns() {
        let mut agent = scored_agent(2);
        assert_eq!(agent.next_phase(), Phase::Draft);
        agent.play_turn(&GameSnapshot::draft(vec![]));
        agent.play_turn(&GameSnapshot::draft(vec![]));
        assert_eq!(agent.next_phase(), Phase::Battle);
        assert_eq!(agent.turn(), 2);
    }

    #[test]
    fn test_draft_pick_committed_once() {
        let mut agent = scored_agent(30);
        let snapshot = GameSnapshot::draft(vec![Card::creature(-1, 2, 3, 3), Card::creature(-1, 5, 1, 1)]);

        let preview = agent.decide(Phase::Draft, &snapshot);
        let again = agent.decide(Phase::Draft, &snapshot);
        assert_eq!(preview, again);
        assert_eq!(agent.deck().size(), 0);

        let decision = agent.play_turn(&snapshot);
        assert_eq!(decision.line(), "PICK 0");
        assert_eq!(agent.deck().size(), 1);
        assert_eq!(agent.deck().cards()[0].cost, 2);
    }

    #[test]
    fn test_draft_without_creatures_passes() {
        let mut agent = scored_agent(30);
        let mut item = Card::creature(-1, 1, 0, 0);
        item.card_type = crate::card::CardType::GreenItem;
        let decision = agent.play_turn(&GameSnapshot::draft(vec![item]));
        assert_eq!(decision.line(), "PASS");
        assert_eq!(agent.deck().size(), 0);
    }

    #[test]
    fn test_battle_orders_attacks_before_summons() {
        let agent = scored_agent(0);
        let snapshot = GameSnapshot::battle(
            2,
            vec![Card::creature(5, 2, 2, 2)],
            vec![Card::creature(3, 1, 1, 1)],
            vec![],
        );
        let decision = agent.decide(Phase::Battle, &snapshot);
        assert_eq!(decision.line(), "ATTACK 3 -1;SUMMON 5");
    }

    #[test]
    fn test_empty_battle_turn_passes() {
        let agent = scored_agent(0);
        let decision = agent.decide(Phase::Battle, &GameSnapshot::battle(0, vec![], vec![], vec![]));
        assert!(decision.commands.is_empty());
        assert_eq!(decision.line(), "PASS");
    }
}
