//! Fixed-cadence driver: one tick and one frame per interval.

use crate::config::AppConfig;
use crate::shell::{Hud, choose_name};
use crate::sink::LogSink;
use advisor::TextService;
use futures_util::FutureExt;
use sim::{GamePhase, PointerReader, RenderSink, Session};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

/// Frames between two logged frames.
const LOG_FRAME_EVERY: u64 = 120;

/// Play `session.rounds` rounds, reading the pointer once per tick.
pub async fn run_game_loop<S: TextService>(
    config: &AppConfig,
    service: Arc<S>,
    pointer: PointerReader,
) -> anyhow::Result<()> {
    let tick_interval_ms = config.game.session.tick_interval_ms;
    let max_ticks = config.game.session.max_ticks_per_round;
    let (mut session, mut events) = Session::new(config.game.clone());
    let mut hud = Hud::new(Arc::clone(&service), config.advisor.advice_ttl());
    let mut sink = LogSink::new(LOG_FRAME_EVERY);

    for _ in 0..config.game.session.rounds {
        let name = choose_name(
            service.as_ref(),
            config.game.player.nickname_theme.as_deref(),
            &config.game.player.name,
        )
        .await;
        session.start(&name)?;
        hud.phase_changed();

        let period = Duration::from_millis(tick_interval_ms);
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut ticks = 0u64;

        while session.phase() == GamePhase::Playing {
            let scheduled = ticker.tick().await;

            // Drain any backlog so the tick always runs on the latest input.
            let mut skipped = 0u32;
            while ticker.tick().now_or_never().is_some() {
                skipped += 1;
            }
            if skipped > 0 {
                debug!(
                    "Skipped {} ticks to stay current (lag: {:?})",
                    skipped,
                    Instant::now().saturating_duration_since(scheduled)
                );
            }

            let tick_start = std::time::Instant::now();
            session.tick(pointer.latest());
            if let Some(frame) = session.snapshot() {
                sink.present(&frame);
            }
            let tick_ms = tick_start.elapsed().as_secs_f64() * 1000.0;
            let tick_budget = tick_interval_ms as f64 * 0.9;
            if tick_ms > tick_budget {
                warn!(
                    "Slow tick #{}: {:.3}ms (budget: {:.1}ms)",
                    ticks, tick_ms, tick_budget
                );
            }
            ticks += 1;

            while let Ok(event) = events.try_recv() {
                hud.handle(event);
            }
            hud.poll_advice(Instant::now());

            if max_ticks.is_some_and(|limit| ticks >= limit) && session.phase() == GamePhase::Playing {
                info!("Round time limit of {} ticks reached", ticks);
                break;
            }
        }

        hud.finish_round(session.stats());
        session.return_to_menu()?;
        hud.phase_changed();
    }

    info!("All rounds played, {} frames rendered, high score {}", sink.frames(), hud.high_score());
    Ok(())
}
