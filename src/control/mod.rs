//! Shared race control: the pause/resume gate.
//!
//! The gate is an explicit object injected into every runner — never
//! ambient global state. See [`PauseGate`] for the blocking semantics.

mod gate;

pub use gate::PauseGate;
