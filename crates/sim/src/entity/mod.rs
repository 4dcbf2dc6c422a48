//! Game entities.
//!
//! Every circle in the world is an [`Entity`] tagged with an [`EntityKind`].
//! Kind-specific constructors and respawn rules live in their own modules.

mod bot;
mod cell;
mod color;
mod food;
mod player;
mod virus;

pub use bot::BOT_COLORS;
pub use cell::{Entity, EntityKind};
pub use color::{Color, Palette};
pub use food::FOOD_COLORS;
pub use player::{PLAYER_COLOR, PLAYER_ID};
pub use virus::{VIRUS_COLOR, VIRUS_SPIKES, VIRUS_INNER_RATIO};
