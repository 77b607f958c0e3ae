//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging custom event handlers
//! into a race. Each subscriber attached via [`Race::attach`](crate::Race::attach)
//! is driven by a dedicated listener task fed from the event bus, so a slow
//! subscriber never blocks the runners or other subscribers.

use async_trait::async_trait;

use crate::events::Event;

/// Contract for event subscribers.
///
/// Called from a subscriber-dedicated listener task. Implementations should
/// avoid blocking the async runtime (prefer async I/O and cooperative waits).
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use dograce::{Event, Subscribe};
///
/// struct Audit;
///
/// #[async_trait]
/// impl Subscribe for Audit {
///     async fn on_event(&self, event: &Event) {
///         // write audit record...
///         let _ = event;
///     }
///
///     fn name(&self) -> &'static str { "audit" }
/// }
/// ```
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles a single event.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
