//! Treasure Hunter game model.
//! Hunter, terrain, shop and town are plain values; the controller drives
//! them turn by turn and reports a [`TurnOutcome`] instead of flipping a
//! global run flag.

pub mod controller;
pub mod errors;
pub mod hunter;
pub mod narration;
pub mod session;
pub mod shop;
pub mod terrain;
pub mod town;
pub mod types;

pub use controller::{play, Command, GameController, TurnOutcome, DEFAULT_HUNTER_NAME};
pub use errors::GameError;
pub use hunter::{Hunter, DEFAULT_KIT_CAPACITY, TREASURE_SLOTS};
pub use narration::{Narration, Segment, Tone};
pub use session::{Mode, Session};
pub use shop::{Shop, Trade};
pub use terrain::{Terrain, TERRAINS};
pub use town::{Brawl, Dig, Hunt, Town};
pub use types::*;
