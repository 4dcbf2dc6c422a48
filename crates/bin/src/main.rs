//! Blob Battle - headless run of the arcade simulation.
//!
//! Reads `config.toml` (written with defaults on first run), plays the
//! configured number of rounds with an autopilot cursor and logs the HUD.

mod autopilot;
mod config;
mod game_loop;
mod shell;
mod sink;

use advisor::GeminiClient;
use config::AppConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Cursor update period for the autopilot.
const AUTOPILOT_PERIOD: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Blob Battle v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        "World {}x{}: {} food, {} bots, {} viruses, {} rounds at {}ms per tick",
        config.game.world.size,
        config.game.world.size,
        config.game.world.food_count,
        config.game.world.bot_count,
        config.game.world.virus_count,
        config.game.session.rounds,
        config.game.session.tick_interval_ms
    );

    let service = Arc::new(GeminiClient::new(&config.advisor)?);

    let (writer, reader) = sim::pointer_slot();
    let seed = config.game.world.rng_seed.unwrap_or_else(rand::random);
    let autopilot = autopilot::spawn(writer, config.game.viewport.size(), AUTOPILOT_PERIOD, seed);

    let result = tokio::select! {
        result = game_loop::run_game_loop(&config, service, reader) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
            Ok(())
        }
    };

    autopilot.abort();
    result
}
