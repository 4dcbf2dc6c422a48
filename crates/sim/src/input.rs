// Pointer input: a single slot, last value wins
//
// The input listener overwrites the slot as often as it likes; the tick reads
// it once. Several events between two ticks collapse to the latest one.
use glam::Vec2;
use tokio::sync::watch;

/// Pointer position relative to the viewport center, in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub offset: Vec2,
}

impl Pointer {
    pub fn new(offset: Vec2) -> Self {
        Self { offset }
    }

    /// Pointer from absolute screen coordinates.
    pub fn from_screen(screen_pos: Vec2, viewport: Vec2) -> Self {
        Self {
            offset: screen_pos - viewport / 2.0,
        }
    }

    /// Movement for the player: zero inside the deadzone, else full speed along the pointer.
    #[inline]
    pub fn steering(&self, deadzone: f32) -> Option<Vec2> {
        if self.offset.length() < deadzone {
            None
        } else {
            Some(self.offset.normalize_or_zero())
        }
    }
}

/// Writer half, held by whatever captures pointer or touch events.
#[derive(Debug, Clone)]
pub struct PointerWriter {
    tx: watch::Sender<Pointer>,
}

impl PointerWriter {
    pub fn set(&self, pointer: Pointer) {
        self.tx.send_replace(pointer);
    }
}

/// Reader half, sampled once per tick.
#[derive(Debug, Clone)]
pub struct PointerReader {
    rx: watch::Receiver<Pointer>,
}

impl PointerReader {
    pub fn latest(&self) -> Pointer {
        *self.rx.borrow()
    }
}

/// Create the pointer slot, initially centered.
pub fn pointer_slot() -> (PointerWriter, PointerReader) {
    let (tx, rx) = watch::channel(Pointer::default());
    (PointerWriter { tx }, PointerReader { rx })
}
