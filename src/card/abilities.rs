use crate::game::protocol::ProtocolError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Keyword abilities a creature can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Breakthrough,
    Charge,
    Drain,
    Guard,
    Lethal,
    Ward,
}

impl Ability {
    /// All abilities in referee string order (`BCDGLW`)
    pub const ALL: [Ability; 6] = [
        Ability::Breakthrough,
        Ability::Charge,
        Ability::Drain,
        Ability::Guard,
        Ability::Lethal,
        Ability::Ward,
    ];

    /// Convert to the single character representation
    pub fn to_char(&self) -> char {
        match self {
            Ability::Breakthrough => 'B',
            Ability::Charge => 'C',
            Ability::Drain => 'D',
            Ability::Guard => 'G',
            Ability::Lethal => 'L',
            Ability::Ward => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Ability::ALL.into_iter().find(|a| a.to_char() == c)
    }

    fn bit(&self) -> u8 {
        match self {
            Ability::Breakthrough => 1 << 0,
            Ability::Charge => 1 << 1,
            Ability::Drain => 1 << 2,
            Ability::Guard => 1 << 3,
            Ability::Lethal => 1 << 4,
            Ability::Ward => 1 << 5,
        }
    }
}

/// Ability set as bitflags (no allocations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Abilities(u8);

impl Abilities {
    pub const fn new() -> Self {
        Abilities(0)
    }

    pub fn from_slice(abilities: &[Ability]) -> Self {
        let mut set = Abilities::new();
        for ability in abilities {
            set.insert(*ability);
        }
        set
    }

    /// Parse the referee's ability string, e.g. `B--G-W`; dashes are empty slots
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        let mut set = Abilities::new();
        for c in text.chars() {
            if c == '-' {
                continue;
            }
            let ability = Ability::from_char(c).ok_or(ProtocolError::InvalidAbility(c))?;
            set.insert(ability);
        }
        Ok(set)
    }

    pub fn insert(&mut self, ability: Ability) {
        self.0 |= ability.bit();
    }

    #[inline]
    pub fn has(&self, ability: Ability) -> bool {
        self.0 & ability.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Ability> + '_ {
        Ability::ALL.into_iter().filter(move |a| self.has(*a))
    }
}

impl fmt::Display for Abilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ability in Ability::ALL {
            let c = if self.has(ability) { ability.to_char() } else { '-' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

// Serialized in the referee's own notation so recorded snapshots stay readable
impl Serialize for Abilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Abilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Abilities::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_referee_string() {
        let set = Abilities::parse("B--G-W").expect("valid abilities");
        assert!(set.has(Ability::Breakthrough));
        assert!(set.has(Ability::Guard));
        assert!(set.has(Ability::Ward));
        assert!(!set.has(Ability::Lethal));
        assert_eq!(set.iter().count(), 3);
    }

    #[test]
    fn test_parse_empty_and_dashes() {
        assert!(Abilities::parse("------").unwrap().is_empty());
        assert!(Abilities::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_letter() {
        assert!(matches!(
            Abilities::parse("-X----"),
            Err(ProtocolError::InvalidAbility('X'))
        ));
    }

    #[test]
    fn test_display_uses_fixed_slots() {
        let set = Abilities::from_slice(&[Ability::Lethal, Ability::Charge]);
        assert_eq!(set.to_string(), "-C--L-");
    }

    #[test]
    fn test_json_uses_referee_notation() {
        let set = Abilities::from_slice(&[Ability::Drain]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "\"--D---\"");
        let back: Abilities = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
