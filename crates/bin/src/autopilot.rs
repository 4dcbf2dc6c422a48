//! Stand-in for the pointer listener: a drifting cursor.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sim::{Pointer, PointerWriter};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

/// How far the cursor wanders from the screen center, in screen units.
const MAX_REACH: f32 = 400.0;
/// Largest heading change per step, in radians.
const MAX_TURN: f32 = 0.6;

/// Cursor state between steps.
#[derive(Debug, Clone, Copy)]
pub struct Drift {
    heading: f32,
    reach: f32,
}

impl Drift {
    pub fn new() -> Self {
        Self {
            heading: 0.0,
            reach: MAX_REACH / 2.0,
        }
    }

    /// Turn a little and maybe change reach. Short reaches land in the deadzone.
    /// The cursor is reported in screen coordinates of `viewport`.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Vec2) -> Pointer {
        self.heading += rng.random_range(-MAX_TURN..MAX_TURN);
        if rng.random_bool(0.1) {
            self.reach = rng.random_range(0.0..MAX_REACH);
        }
        let cursor = viewport / 2.0 + Vec2::from_angle(self.heading) * self.reach;
        Pointer::from_screen(cursor, viewport)
    }
}

impl Default for Drift {
    fn default() -> Self {
        Self::new()
    }
}

/// Move the cursor every `every` until aborted.
pub fn spawn(writer: PointerWriter, viewport: Vec2, every: Duration, seed: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut drift = Drift::new();
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            writer.set(drift.step(&mut rng, viewport));
        }
    })
}
