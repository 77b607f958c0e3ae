//! In-memory [`Track`] implementation.
//!
//! [`Lane`] models one lane of the race display: a row of step markers and
//! a banner that shows the lane name until the race starts, then the
//! progress count, then `"!"` once the runner crosses the line. It backs
//! the bundled demos and tests; a GUI front end would implement [`Track`]
//! over its own widgets instead.

use crate::runners::Track;

/// One lane of the race display.
///
/// # Example
/// ```
/// use dograce::{Lane, Track};
///
/// let mut lane = Lane::new(3, "Lane1");
/// assert_eq!(lane.len(), 3);
/// assert_eq!(lane.banner(), "Lane1");
///
/// lane.set_step_mark(0);
/// lane.display_progress(1);
/// assert!(lane.step_mark(0));
/// assert_eq!(lane.banner(), "1");
///
/// lane.mark_finished();
/// assert_eq!(lane.banner(), "!");
///
/// lane.reset();
/// assert!(!lane.step_mark(0));
/// assert_eq!(lane.banner(), "Lane1");
/// ```
#[derive(Debug, Clone)]
pub struct Lane {
    name: String,
    marks: Vec<bool>,
    banner: String,
}

impl Lane {
    /// Creates a lane with `length` unmarked steps and the name shown on the banner.
    pub fn new(length: usize, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            banner: name.clone(),
            marks: vec![false; length],
            name,
        }
    }

    /// Returns whether step `index` is marked. Out-of-range reads as unmarked.
    pub fn step_mark(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    /// Current banner text: lane name, progress count, or `"!"` when finished.
    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Count of marked steps.
    pub fn marked_steps(&self) -> usize {
        self.marks.iter().filter(|m| **m).count()
    }
}

impl Track for Lane {
    fn len(&self) -> usize {
        self.marks.len()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_step_mark(&mut self, index: usize) {
        if let Some(mark) = self.marks.get_mut(index) {
            *mark = true;
        }
    }

    fn clear_step_mark(&mut self, index: usize) {
        if let Some(mark) = self.marks.get_mut(index) {
            *mark = false;
        }
    }

    fn display_progress(&mut self, count: usize) {
        self.banner = count.to_string();
    }

    fn mark_finished(&mut self) {
        self.banner = "!".to_string();
    }

    fn reset(&mut self) {
        self.marks.iter_mut().for_each(|m| *m = false);
        self.banner = self.name.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lane_has_size_and_name() {
        let lane = Lane::new(10, "Lane1");
        assert_eq!(lane.len(), 10);
        assert_eq!(lane.name(), "Lane1");
        assert_eq!(lane.banner(), "Lane1");
        assert_eq!(lane.marked_steps(), 0);
    }

    #[test]
    fn test_set_and_clear_step_mark() {
        let mut lane = Lane::new(10, "Lane1");
        lane.set_step_mark(5);
        assert!(lane.step_mark(5));

        lane.clear_step_mark(5);
        assert!(!lane.step_mark(5));
    }

    #[test]
    fn test_display_progress_updates_banner() {
        let mut lane = Lane::new(10, "Lane1");
        lane.display_progress(5);
        assert_eq!(lane.banner(), "5");

        lane.display_progress(10);
        assert_eq!(lane.banner(), "10");
    }

    #[test]
    fn test_finish_overrides_progress() {
        let mut lane = Lane::new(10, "Lane1");
        lane.display_progress(5);
        lane.mark_finished();
        assert_eq!(lane.banner(), "!");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut lane = Lane::new(10, "Lane1");
        lane.set_step_mark(0);
        lane.set_step_mark(1);
        lane.set_step_mark(2);
        lane.mark_finished();

        lane.reset();

        for i in 0..lane.len() {
            assert!(!lane.step_mark(i));
        }
        assert_eq!(lane.banner(), "Lane1");
        assert_eq!(lane.name(), "Lane1");
    }

    #[test]
    fn test_out_of_range_marks_are_ignored() {
        let mut lane = Lane::new(3, "Lane1");
        lane.set_step_mark(99);
        assert_eq!(lane.marked_steps(), 0);
        assert!(!lane.step_mark(99));
    }

    #[test]
    fn test_simulated_full_run() {
        let mut lane = Lane::new(5, "Lane1");
        for i in 0..lane.len() {
            lane.set_step_mark(i);
            lane.display_progress(i + 1);
        }
        lane.mark_finished();

        assert_eq!(lane.marked_steps(), 5);
        assert_eq!(lane.banner(), "!");
    }
}
