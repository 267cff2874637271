//! # Subscriber trait
//!
//! A [`Subscribe`] implementation observes one ticker's lifecycle events
//! from its own worker task, so a slow handler never delays a tick.
//!
//! A busy ticker emits two or three events per cycle. Subscribers that only
//! care about some of them narrow the stream with [`Subscribe::accepts`];
//! rejected kinds never take up room in the subscriber's queue.

use crate::events::{Event, EventKind};
use async_trait::async_trait;

/// Handler for ticker events.
///
/// # Example
/// ```rust
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use jittered_ticker::{Event, EventKind, Subscribe};
///
/// #[derive(Default)]
/// struct DropCounter(AtomicU64);
///
/// #[async_trait::async_trait]
/// impl Subscribe for DropCounter {
///     async fn on_event(&self, _ev: &Event) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
///     fn name(&self) -> &'static str { "drop-counter" }
///     fn accepts(&self, kind: EventKind) -> bool { kind == EventKind::TickDropped }
/// }
/// ```
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles one accepted event.
    async fn on_event(&self, event: &Event);

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Whether events of `kind` should be queued for this subscriber.
    fn accepts(&self, _kind: EventKind) -> bool {
        true
    }

    /// Queue capacity; events arriving while it is full are missed and
    /// counted in the summary printed when the ticker stops.
    fn queue_capacity(&self) -> usize {
        256
    }
}
