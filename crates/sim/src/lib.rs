//! Blob Battle simulation core.
//!
//! A single-player circle-eating arcade world: the player grows by eating
//! food and smaller bots, shrinks on viruses and dies to bigger bots. The
//! crate has no I/O beyond loading its config; drawing and UI live elsewhere.

pub mod ai;
pub mod camera;
pub mod collision;
pub mod config;
pub mod entity;
pub mod error;
pub mod input;
pub mod math;
pub mod render;
pub mod session;
pub mod world;

// Re-export commonly used types
pub use camera::Camera;
pub use config::Config;
pub use entity::{Entity, EntityKind};
pub use error::{ConfigError, SessionError};
pub use input::{Pointer, PointerReader, PointerWriter, pointer_slot};
pub use render::{RenderSink, RenderSnapshot};
pub use session::{GamePhase, LoopState, Session, SessionStats, ShellEvent};
pub use world::{ScoreSignal, TickOutcome, TickReport, World};
