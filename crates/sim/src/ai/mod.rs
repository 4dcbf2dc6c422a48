//! Bot AI.
//!
//! Bots are deliberately myopic: they wander between random targets and never
//! look at food, viruses or other blobs.

mod wander;

pub use wander::Wander;
