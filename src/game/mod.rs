pub mod commands;
pub mod protocol;
pub mod state;
pub mod zones;

pub use commands::{format_turn, Command, Target};
pub use protocol::{parse_turn, ProtocolError, SnapshotReader};
pub use state::{GameSnapshot, Phase, PlayerStats};
pub use zones::{Board, DeckState, Hand};
