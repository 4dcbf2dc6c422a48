//! Frame sink that logs instead of drawing.

use sim::{EntityKind, RenderSink, RenderSnapshot};
use tracing::trace;

pub struct LogSink {
    frames: u64,
    every: u64,
}

impl LogSink {
    /// Log one frame out of every `every`.
    pub fn new(every: u64) -> Self {
        Self {
            frames: 0,
            every: every.max(1),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &RenderSnapshot<'_>) {
        self.frames += 1;
        if self.frames % self.every != 0 {
            return;
        }
        let bots = frame.entities.iter().filter(|e| e.kind == EntityKind::Bot).count();
        trace!(
            "Frame {}: camera ({:.0}, {:.0}) x{:.2}, {} visible ({} bots), {}x{} grid lines, top {:?} ({})",
            self.frames,
            frame.camera.position.x,
            frame.camera.position.y,
            frame.camera.scale,
            frame.entities.len(),
            bots,
            frame.grid_x.len(),
            frame.grid_y.len(),
            frame.topmost().map(|e| e.id.as_str()),
            frame.topmost().map_or("none", |e| e.kind.as_str()),
        );
    }
}
