//! Text generation for the game shell.
//!
//! Nicknames and tactical tips come from a remote model when credentials are
//! available. Every call resolves to a string: failures map to fixed
//! fallbacks and never reach the simulation.

pub mod config;
pub mod desk;
pub mod error;
pub mod gemini;
pub mod service;

pub use config::AdvisorConfig;
pub use desk::AdviceDesk;
pub use error::AdvisorError;
pub use gemini::GeminiClient;
pub use service::TextService;
