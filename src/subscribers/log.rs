//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [starting] runner=Rex
//! [step] runner=Rex step=3
//! [finished] runner=Rex position=1
//! [canceled] runner=Fido err="runner cancelled"
//! [paused]
//! [resumed]
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Useful for development and the bundled demos. Not intended for
/// production use - implement a custom [`Subscribe`] for structured
/// logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::RunnerStarting => {
                if let Some(runner) = &e.runner {
                    println!("[starting] runner={runner}");
                }
            }
            EventKind::StepAdvanced => {
                if let (Some(runner), Some(step)) = (&e.runner, e.step) {
                    println!("[step] runner={runner} step={step}");
                }
            }
            EventKind::RunnerFinished => {
                if let (Some(runner), Some(position)) = (&e.runner, e.position) {
                    println!("[finished] runner={runner} position={position}");
                }
            }
            EventKind::RunnerCanceled => {
                println!("[canceled] runner={:?} err={:?}", e.runner, e.error);
            }
            EventKind::RacePaused => {
                println!("[paused]");
            }
            EventKind::RaceResumed => {
                println!("[resumed]");
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
