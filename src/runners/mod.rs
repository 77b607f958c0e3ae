//! Runners and the collaborators they drive.
//!
//! ## Contents
//! - [`Runner`] — the per-competitor race loop (the only piece here with
//!   cross-component interactions: gate, registry, bus)
//! - [`Track`] — the rendering contract a runner drives; exclusively owned
//!   by its runner, no locking required
//! - [`Lane`] — in-memory [`Track`] implementation for tests and demos
//! - [`Pace`], [`DelaySource`], [`RandomDelay`] — per-step delay policy

mod lane;
mod pace;
mod runner;
mod track;

pub use lane::Lane;
pub use pace::{DelaySource, Pace, RandomDelay};
pub use runner::{Runner, RunnerHandle};
pub use track::Track;
