//! Advice requests owned by the shell.
//!
//! At most one request is in flight. Results are picked up by polling once
//! per frame, shown until they expire, and dropped if the shell invalidates
//! the desk (e.g. on a phase change) before they arrive.

use crate::service::TextService;
use futures_util::FutureExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

/// A tip on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub text: String,
    pub expires_at: Instant,
}

pub struct AdviceDesk<S> {
    service: Arc<S>,
    ttl: Duration,
    pending: Option<JoinHandle<String>>,
    shown: Option<Advice>,
}

impl<S: TextService> AdviceDesk<S> {
    pub fn new(service: Arc<S>, ttl: Duration) -> Self {
        Self {
            service,
            ttl,
            pending: None,
            shown: None,
        }
    }

    /// Ask for a tip in the background. Ignored while another request is pending.
    pub fn request(&mut self, mass: u32, threats: u32) -> bool {
        if self.pending.is_some() {
            debug!("Advice already pending, ignoring request");
            return false;
        }
        let service = Arc::clone(&self.service);
        self.pending = Some(tokio::spawn(async move { service.advice(mass, threats).await }));
        true
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Collect a finished request and expire old advice. Never waits.
    /// Returns the text only on the call where it arrives; use
    /// [`AdviceDesk::current`] for what is on screen.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        let mut arrived = false;
        if let Some(handle) = self.pending.as_mut() {
            if let Some(result) = handle.now_or_never() {
                self.pending = None;
                match result {
                    Ok(text) => {
                        self.shown = Some(Advice {
                            text,
                            expires_at: now + self.ttl,
                        });
                        arrived = true;
                    }
                    Err(err) => warn!("Advice task failed: {}", err),
                }
            }
        }

        if self.shown.as_ref().is_some_and(|advice| now >= advice.expires_at) {
            self.shown = None;
        }
        if arrived { self.current() } else { None }
    }

    /// The tip currently on screen.
    pub fn current(&self) -> Option<&str> {
        self.shown.as_ref().map(|advice| advice.text.as_str())
    }

    /// Drop the pending request and any advice on screen.
    pub fn invalidate(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!("Stale advice request discarded");
        }
        self.shown = None;
    }
}

impl<S> Drop for AdviceDesk<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
