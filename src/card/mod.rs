pub mod abilities;
pub mod types;

pub use abilities::{Abilities, Ability};
pub use types::{Card, CardType, Location, FACE_TARGET};
