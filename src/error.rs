//! Error types used by the race core.
//!
//! [`RaceError`] covers the only two failure modes the core has:
//!
//! - [`RaceError::InvalidName`] — an empty runner name was passed to
//!   [`ArrivalRegistry::register_arrival`](crate::ArrivalRegistry::register_arrival).
//!   The call is rejected synchronously and no state is mutated.
//! - [`RaceError::Canceled`] — a runner's pause-wait or step sleep was
//!   interrupted. The runner unwinds cleanly without registering an arrival.
//!
//! There are no retries anywhere in the core: a cancelled runner is terminal
//! for that runner.

use thiserror::Error;

/// # Errors produced by the race core.
///
/// Both variants are terminal for the operation that raised them.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaceError {
    /// An empty runner name was passed to the arrival registry.
    #[error("runner name must not be empty")]
    InvalidName,

    /// The runner's wait or sleep was interrupted by cancellation.
    #[error("runner cancelled")]
    Canceled,
}

impl RaceError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use dograce::RaceError;
    ///
    /// assert_eq!(RaceError::Canceled.as_label(), "runner_canceled");
    /// assert_eq!(RaceError::InvalidName.as_label(), "invalid_name");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RaceError::InvalidName => "invalid_name",
            RaceError::Canceled => "runner_canceled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RaceError::InvalidName => "runner name must not be empty".to_string(),
            RaceError::Canceled => "runner cancelled before finishing".to_string(),
        }
    }

    /// Indicates whether the error is a cancellation outcome.
    ///
    /// # Example
    /// ```
    /// use dograce::RaceError;
    ///
    /// assert!(RaceError::Canceled.is_cancellation());
    /// assert!(!RaceError::InvalidName.is_cancellation());
    /// ```
    pub fn is_cancellation(&self) -> bool {
        matches!(self, RaceError::Canceled)
    }
}
