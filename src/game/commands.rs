use crate::card::FACE_TARGET;
use std::fmt;

/// Something an attacker can hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Face,
    Creature(i32),
}

impl Target {
    pub fn id(&self) -> i32 {
        match self {
            Target::Face => FACE_TARGET,
            Target::Creature(id) => *id,
        }
    }
}

/// One referee command
///
/// `Pick` is positional (index into the offered hand); every other command
/// refers to card instance ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Pick(usize),
    Summon(i32),
    Attack { attacker: i32, target: Target },
    Use { item: i32, target: Target },
    Pass,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pick(index) => write!(f, "PICK {}", index),
            Command::Summon(id) => write!(f, "SUMMON {}", id),
            Command::Attack { attacker, target } => write!(f, "ATTACK {} {}", attacker, target.id()),
            Command::Use { item, target } => write!(f, "USE {} {}", item, target.id()),
            Command::Pass => write!(f, "PASS"),
        }
    }
}

/// Join a turn's commands into the single output line; an empty turn passes
pub fn format_turn(commands: &[Command]) -> String {
    if commands.is_empty() {
        return Command::Pass.to_string();
    }
    commands
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_text() {
        assert_eq!(Command::Pick(2).to_string(), "PICK 2");
        assert_eq!(Command::Summon(14).to_string(), "SUMMON 14");
        assert_eq!(
            Command::Attack { attacker: 3, target: Target::Face }.to_string(),
            "ATTACK 3 -1"
        );
        assert_eq!(
            Command::Attack { attacker: 3, target: Target::Creature(9) }.to_string(),
            "ATTACK 3 9"
        );
        assert_eq!(
            Command::Use { item: 5, target: Target::Creature(8) }.to_string(),
            "USE 5 8"
        );
        assert_eq!(Command::Pass.to_string(), "PASS");
    }

    #[test]
    fn test_empty_turn_passes() {
        assert_eq!(format_turn(&[]), "PASS");
    }

    #[test]
    fn test_no_trailing_delimiter() {
        let line = format_turn(&[
            Command::Attack { attacker: 1, target: Target::Face },
            Command::Summon(4),
        ]);
        assert_eq!(line, "ATTACK 1 -1;SUMMON 4");

        assert_eq!(format_turn(&[Command::Summon(4)]), "SUMMON 4");
    }
}
