use crate::card::abilities::Abilities;
use crate::game::protocol::ProtocolError;
use serde::{Deserialize, Serialize};

/// Instance id used as the attack target for the opponent's face
pub const FACE_TARGET: i32 = -1;

/// Card types in Legends of Code and Magic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Creature,
    GreenItem,
    RedItem,
    BlueItem,
}

impl CardType {
    /// Decode the numeric card type sent by the referee
    pub fn from_code(code: i32) -> Result<Self, ProtocolError> {
        match code {
            0 => Ok(CardType::Creature),
            1 => Ok(CardType::GreenItem),
            2 => Ok(CardType::RedItem),
            3 => Ok(CardType::BlueItem),
            other => Err(ProtocolError::InvalidCardType(other)),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            CardType::Creature => 0,
            CardType::GreenItem => 1,
            CardType::RedItem => 2,
            CardType::BlueItem => 3,
        }
    }

    pub fn is_item(&self) -> bool {
        !matches!(self, CardType::Creature)
    }
}

/// Zone a visible card currently sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Hand,
    PlayerBoard,
    OpponentBoard,
    /// Draft offer, not owned by anyone yet
    Unrevealed,
}

impl Location {
    /// Decode the numeric location sent during the battle phase
    pub fn from_code(code: i32) -> Result<Self, ProtocolError> {
        match code {
            0 => Ok(Location::Hand),
            1 => Ok(Location::PlayerBoard),
            -1 => Ok(Location::OpponentBoard),
            other => Err(ProtocolError::InvalidLocation(other)),
        }
    }
}

/// One visible card instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub card_number: i32,
    pub instance_id: i32,
    pub location: Location,
    pub card_type: CardType,
    pub cost: i32,
    pub attack: i32,
    pub defense: i32,
    #[serde(default)]
    pub abilities: Abilities,
    #[serde(default)]
    pub my_health_change: i32,
    #[serde(default)]
    pub opponent_health_change: i32,
    #[serde(default)]
    pub card_draw: i32,
}

impl Card {
    /// Plain creature with no abilities or side effects
    pub fn creature(instance_id: i32, cost: i32, attack: i32, defense: i32) -> Self {
        Card {
            card_number: 0,
            instance_id,
            location: Location::Hand,
            card_type: CardType::Creature,
            cost,
            attack,
            defense,
            abilities: Abilities::new(),
            my_health_change: 0,
            opponent_health_change: 0,
            card_draw: 0,
        }
    }

    pub fn with_abilities(mut self, abilities: Abilities) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn is_creature(&self) -> bool {
        self.card_type == CardType::Creature
    }
}
