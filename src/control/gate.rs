//! # Broadcast pause/resume gate.
//!
//! [`PauseGate`] holds a single paused flag and lets an arbitrary number of
//! concurrent runners block on it. `resume()` is a broadcast wake: every
//! waiter parked at that moment is released, not just one.
//!
//! ## State machine
//! ```text
//! RUNNING ──pause()──► PAUSED
//! PAUSED ──resume()──► RUNNING
//! ```
//! Repeated `pause()`/`resume()` calls are idempotent self-loops.
//!
//! ## No missed wakeups
//! The gate is a thin wrapper over [`tokio::sync::watch`]. A waiter's
//! check-then-block sequence is atomic with respect to state changes:
//! [`watch::Receiver::wait_for`] inspects the current value before parking
//! and re-checks on every change notification. A `pause()` immediately
//! followed by a `resume()` before any waiter has parked therefore still
//! lets that waiter proceed, and a caller arriving strictly after
//! `resume()` never blocks at all.

use tokio::{select, sync::watch};
use tokio_util::sync::CancellationToken;

use crate::error::RaceError;

/// Pause/resume gate shared by all runners of a race.
///
/// Cloning is cheap; all clones observe and mutate the same flag.
///
/// # Example
/// ```
/// use dograce::PauseGate;
///
/// let gate = PauseGate::new();
/// assert!(!gate.is_paused());
///
/// gate.pause();
/// assert!(gate.is_paused());
///
/// gate.resume();
/// assert!(!gate.is_paused());
/// ```
#[derive(Clone)]
pub struct PauseGate {
    paused: watch::Sender<bool>,
}

impl PauseGate {
    /// Creates a new gate in the running (unpaused) state.
    pub fn new() -> Self {
        let (paused, _rx) = watch::channel(false);
        Self { paused }
    }

    /// Pauses the race. Idempotent: pausing an already paused gate is a no-op.
    ///
    /// Never blocks and never fails, even with zero waiters.
    pub fn pause(&self) {
        self.paused.send_replace(true);
    }

    /// Resumes the race, releasing **all** waiters currently parked in
    /// [`wait_if_paused`](Self::wait_if_paused).
    ///
    /// Idempotent when already running. Never blocks, even with zero waiters.
    pub fn resume(&self) {
        self.paused.send_replace(false);
    }

    /// Returns the current paused state.
    ///
    /// Safe to call concurrently with `pause()`/`resume()`; never blocks.
    pub fn is_paused(&self) -> bool {
        *self.paused.borrow()
    }

    /// Suspends the caller while the gate is paused.
    ///
    /// - Gate unpaused: returns `Ok(())` immediately (non-blocking fast path).
    /// - Gate paused: suspends until a later [`resume`](Self::resume).
    /// - `ctx` cancelled while parked: returns [`RaceError::Canceled`]
    ///   promptly. The gate stays fully usable for other waiters.
    pub async fn wait_if_paused(&self, ctx: &CancellationToken) -> Result<(), RaceError> {
        let mut rx = self.paused.subscribe();
        if !*rx.borrow() {
            return Ok(());
        }
        select! {
            res = rx.wait_for(|paused| !*paused) => {
                // The sender lives inside `self`, so the channel can only
                // close if the gate is dropped mid-wait. Surface that as a
                // cancellation rather than a distinct failure.
                res.map(|_| ()).map_err(|_| RaceError::Canceled)
            }
            _ = ctx.cancelled() => Err(RaceError::Canceled),
        }
    }
}

impl Default for PauseGate {
    fn default() -> Self {
        Self::new()
    }
}
