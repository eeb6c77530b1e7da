use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables for the agent. Every field has a default, so a config file only
/// needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Number of draft turns before the battle starts
    pub draft_turns: u32,
    /// Creatures a board can hold
    pub board_capacity: usize,
    /// Cards above this cost score zero in the draft
    pub max_draft_cost: i32,
    /// Picks at one cost after which further cards at that cost are penalized
    pub cost_saturation: usize,
    /// Target for the draft balance factor
    pub ideal_cost: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            draft_turns: 30,
            board_capacity: 6,
            max_draft_cost: 6,
            cost_saturation: 6,
            ideal_cost: 0.0,
        }
    }
}

impl AgentConfig {
    /// Load a config from a JSON file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draft_turns == 0 {
            return Err(ConfigError::Invalid("draft_turns must be positive".to_string()));
        }
        if self.board_capacity == 0 {
            return Err(ConfigError::Invalid(
                "board_capacity must be positive".to_string(),
            ));
        }
        if self.cost_saturation == 0 {
            return Err(ConfigError::Invalid(
                "cost_saturation must be positive".to_string(),
            ));
        }
        if !self.ideal_cost.is_finite() {
            return Err(ConfigError::Invalid("ideal_cost must be finite".to_string()));
        }
        Ok(())
    }
}
