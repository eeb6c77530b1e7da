//! Text protocol spoken with the referee.
//!
//! Each turn the referee sends both players' counters, the opponent's
//! previous actions, and every visible card. [`SnapshotReader`] turns that
//! into a [`GameSnapshot`]; output goes through [`crate::game::format_turn`].

use crate::card::{Abilities, Card, CardType, Location};
use crate::game::state::{GameSnapshot, Phase, PlayerStats};
use std::collections::VecDeque;
use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("Invalid number at line {line} for {field}: '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("Invalid card location code: {0}")]
    InvalidLocation(i32),
    #[error("Invalid card type code: {0}")]
    InvalidCardType(i32),
    #[error("Invalid ability letter: '{0}'")]
    InvalidAbility(char),
    #[error("Malformed input at line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}

/// Reads turn snapshots from a line-oriented source
pub struct SnapshotReader<R> {
    input: R,
    line: usize,
    pending: VecDeque<String>,
}

impl<R: BufRead> SnapshotReader<R> {
    pub fn new(input: R) -> Self {
        SnapshotReader {
            input,
            line: 0,
            pending: VecDeque::new(),
        }
    }

    /// Line number of the most recently consumed input line
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read one turn. Returns `Ok(None)` on a clean end of input between turns.
    pub fn read_turn(&mut self, phase: Phase) -> Result<Option<GameSnapshot>, ProtocolError> {
        if !self.fill_pending()? {
            return Ok(None);
        }

        let player = self.read_stats()?;
        let opponent = self.read_stats()?;
        let opponent_hand_size = self.next_int("opponent hand size")?;
        let action_count = self.next_count("opponent action count")?;

        // Action lines are free text, so the rest of the counter line is dropped first
        self.pending.clear();
        let mut opponent_actions = Vec::with_capacity(action_count);
        for _ in 0..action_count {
            let line = self
                .next_line()?
                .ok_or(ProtocolError::UnexpectedEof { expected: "opponent action" })?;
            opponent_actions.push(line.trim().to_string());
        }

        let mut snapshot = GameSnapshot {
            player,
            opponent,
            opponent_hand_size,
            opponent_actions,
            ..GameSnapshot::default()
        };

        let card_count = self.next_count("card count")?;
        for _ in 0..card_count {
            let card = self.read_card(phase)?;
            match card.location {
                Location::Hand | Location::Unrevealed => snapshot.hand.add_card(card),
                Location::PlayerBoard => snapshot.board.add_card(card),
                Location::OpponentBoard => snapshot.opponent_board.add_card(card),
            }
        }

        Ok(Some(snapshot))
    }

    fn read_stats(&mut self) -> Result<PlayerStats, ProtocolError> {
        Ok(PlayerStats {
            health: self.next_int("health")?,
            mana: self.next_int("mana")?,
            deck_size: self.next_int("deck size")?,
            rune: self.next_int("rune")?,
            draw: self.next_int("draw")?,
        })
    }

    fn read_card(&mut self, phase: Phase) -> Result<Card, ProtocolError> {
        let card_number = self.next_int("card number")?;
        let instance_id = self.next_int("instance id")?;
        let location_code = self.next_int("location")?;
        let card_type = CardType::from_code(self.next_int("card type")?)?;
        let cost = self.next_int("cost")?;
        let attack = self.next_int("attack")?;
        let defense = self.next_int("defense")?;
        let abilities = Abilities::parse(&self.next_token("abilities")?)?;
        let my_health_change = self.next_int("my health change")?;
        let opponent_health_change = self.next_int("opponent health change")?;
        let card_draw = self.next_int("card draw")?;

        // Draft offers are not in any zone yet, whatever code the referee sends
        let location = match phase {
            Phase::Draft => Location::Unrevealed,
            Phase::Battle => Location::from_code(location_code)?,
        };

        Ok(Card {
            card_number,
            instance_id,
            location,
            card_type,
            cost,
            attack,
            defense,
            abilities,
            my_health_change,
            opponent_health_change,
            card_draw,
        })
    }

    fn next_line(&mut self) -> Result<Option<String>, ProtocolError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(buf))
    }

    /// Make sure at least one token is buffered; false on end of input
    fn fill_pending(&mut self) -> Result<bool, ProtocolError> {
        while self.pending.is_empty() {
            match self.next_line()? {
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    fn next_token(&mut self, expected: &'static str) -> Result<String, ProtocolError> {
        if !self.fill_pending()? {
            return Err(ProtocolError::UnexpectedEof { expected });
        }
        self.pending
            .pop_front()
            .ok_or(ProtocolError::UnexpectedEof { expected })
    }

    fn next_int(&mut self, field: &'static str) -> Result<i32, ProtocolError> {
        let token = self.next_token(field)?;
        token.parse().map_err(|_| ProtocolError::InvalidNumber {
            line: self.line,
            field,
            value: token,
        })
    }

    fn next_count(&mut self, field: &'static str) -> Result<usize, ProtocolError> {
        let value = self.next_int(field)?;
        usize::try_from(value).map_err(|_| ProtocolError::MalformedLine {
            line: self.line,
            reason: format!("{} must not be negative, got {}", field, value),
        })
    }
}

/// Parse a single turn from text
pub fn parse_turn(text: &str, phase: Phase) -> Result<GameSnapshot, ProtocolError> {
    let mut reader = SnapshotReader::new(text.as_bytes());
    reader
        .read_turn(phase)?
        .ok_or(ProtocolError::UnexpectedEof { expected: "turn" })
}
