//! # Lifecycle events emitted by running tickers.
//!
//! The [`EventKind`] enum classifies what happened inside a ticker loop:
//! - **Lifecycle events**: loop started / stopped
//! - **Cycle events**: interval scheduled, tick delivered, tick dropped
//!
//! The [`Event`] struct carries metadata such as the ticker id, the scheduled
//! interval, and a stop reason.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore the exact order when events are delivered out of order.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use jittered_ticker::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::IntervalScheduled)
//!     .with_ticker(3)
//!     .with_interval(Duration::from_millis(480))
//!     .with_tick(1);
//!
//! assert_eq!(ev.kind, EventKind::IntervalScheduled);
//! assert_eq!(ev.ticker, Some(3));
//! assert_eq!(ev.interval_ms, Some(480));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of ticker events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Background loop spawned.
    ///
    /// Sets:
    /// - `ticker`: ticker id
    /// - `reason`: strategy description
    TickerStarted,

    /// A fresh interval was sampled and the loop is waiting on it.
    ///
    /// Sets:
    /// - `ticker`: ticker id
    /// - `interval_ms`: sampled interval
    /// - `tick`: number of the upcoming tick (starting from 1)
    IntervalScheduled,

    /// The tick was placed in the consumer's slot.
    ///
    /// Sets:
    /// - `ticker`: ticker id
    /// - `tick`: tick number
    TickDelivered,

    /// A tick left the slot unread: overwritten by a newer tick, or cleared
    /// when the loop stopped.
    ///
    /// Sets:
    /// - `ticker`: ticker id
    /// - `tick`: number of the lost tick
    /// - `reason`: `"superseded"` or `"unread_at_stop"`
    TickDropped,

    /// Loop terminated permanently; the stream is closed.
    ///
    /// Sets:
    /// - `ticker`: ticker id
    /// - `reason`: `"cancelled"` or `"stream_closed"`
    /// - `tick`: number of ticks fired before stopping
    TickerStopped,
}

/// Ticker event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Id of the emitting ticker.
    pub ticker: Option<u64>,
    /// Tick counter (starting from 1).
    pub tick: Option<u64>,
    /// Sampled interval in milliseconds (compact).
    pub interval_ms: Option<u64>,
    /// Human-readable reason (stop cause, strategy, etc.).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            ticker: None,
            tick: None,
            interval_ms: None,
            reason: None,
        }
    }

    /// Attaches the emitting ticker's id.
    #[inline]
    pub fn with_ticker(mut self, id: u64) -> Self {
        self.ticker = Some(id);
        self
    }

    /// Attaches a tick counter.
    #[inline]
    pub fn with_tick(mut self, n: u64) -> Self {
        self.tick = Some(n);
        self
    }

    /// Attaches a sampled interval (stored as milliseconds).
    #[inline]
    pub fn with_interval(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u64::MAX)) as u64;
        self.interval_ms = Some(ms);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// True for the last event a ticker publishes ([`EventKind::TickerStopped`]).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, EventKind::TickerStopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let a = Event::new(EventKind::TickDelivered);
        let b = Event::new(EventKind::TickDropped);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_only_stopped_is_terminal() {
        assert!(Event::new(EventKind::TickerStopped).is_terminal());
        assert!(!Event::new(EventKind::TickerStarted).is_terminal());
        assert!(!Event::new(EventKind::TickDropped).is_terminal());
    }
}
