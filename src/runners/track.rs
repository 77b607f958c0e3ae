//! # Track contract.
//!
//! A [`Track`] is the rendering surface a [`Runner`](crate::Runner) drives:
//! per-step markers plus a banner for progress and the finish flag. It
//! carries **no** concurrency logic — every track is exclusively owned and
//! mutated by its single runner, so implementations need no internal
//! locking. Consumers that want to observe progress from elsewhere should
//! subscribe to the event bus instead of sharing the track.

/// Rendering surface owned by exactly one runner.
///
/// `len()` and `name()` are plain accessors; every other operation is a
/// side-effecting display update with no return value.
pub trait Track: Send + 'static {
    /// Number of steps in the track. Positive.
    fn len(&self) -> usize;

    /// Returns true for a zero-length track.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display name of the track.
    fn name(&self) -> &str;

    /// Marks step `index` (0-based) as done.
    fn set_step_mark(&mut self, index: usize);

    /// Clears the mark at step `index`.
    fn clear_step_mark(&mut self, index: usize);

    /// Updates the human-readable progress readout to `count` steps done.
    fn display_progress(&mut self, count: usize);

    /// Marks the finish indicator.
    fn mark_finished(&mut self);

    /// Restores the track to its initial state.
    fn reset(&mut self);
}
