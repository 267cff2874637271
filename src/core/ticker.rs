//! # Ticker: entry points for jittered ticking.
//!
//! A [`Ticker`] owns one [`RandomSource`] and is consumed by exactly one of its
//! entry points, which spawns the background [`TickActor`] and hands back a
//! [`TickStream`]:
//!
//! ```text
//! Ticker::tick(token, base, factor)        ─► FactoredJitter ─┐
//! Ticker::tick_between(token, min, max)    ─► RangeJitter    ─┼─► tick_with() ─► spawn TickActor
//! Ticker::tick_with(token, custom)         ──────────────────-┘         │
//!                                                                      └─► TickStream
//! ```
//!
//! The caller keeps the [`CancellationToken`] and must cancel it (or drop the
//! stream) to release the background task.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::{
    error::TickerError,
    events::{Bus, Event, EventKind},
    policies::{FactoredJitter, JitterStrategy, RandomSource, RangeJitter},
    subscribers::{Subscribe, SubscriberSet},
};

use super::{
    actor::TickActor,
    builder::TickerBuilder,
    config::TickerConfig,
    stream::{TickStream, tick_slot},
};

/// Process-wide ticker id counter.
static TICKER_ID: AtomicU64 = AtomicU64::new(1);

/// Jittered ticker.
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
/// use jittered_ticker::Ticker;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let token = CancellationToken::new();
///
///     // 1s ± 5%, re-sampled on every tick
///     let mut ticks = Ticker::new().tick(token.clone(), Duration::from_secs(1), 0.05);
///     while let Some(at) = ticks.recv().await {
///         println!("tick at {at:?}");
///     }
/// }
/// ```
pub struct Ticker {
    id: u64,
    rng: RandomSource,
    bus: Bus,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl Ticker {
    /// Creates a ticker seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::builder(TickerConfig::default()).build()
    }

    /// Creates a ticker whose interval sequence is fixed by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::builder(TickerConfig {
            seed: Some(seed),
            ..TickerConfig::default()
        })
        .build()
    }

    /// Returns a builder for a configured ticker.
    pub fn builder(cfg: TickerConfig) -> TickerBuilder {
        TickerBuilder::new(cfg)
    }

    pub(crate) fn from_parts(
        rng: RandomSource,
        bus_capacity: usize,
        subscribers: Vec<Arc<dyn Subscribe>>,
    ) -> Self {
        let id = TICKER_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            id,
            rng,
            bus: Bus::new(id, bus_capacity),
            subscribers,
        }
    }

    /// Process-unique id carried in this ticker's events.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Creates a receiver for this ticker's lifecycle events.
    ///
    /// Call before starting the ticker; the receiver closes once the loop stops.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Starts ticking every `base ± base·jitter_factor`.
    ///
    /// A factor `≤ 0` gives a fixed interval of `base`. Never fails.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    pub fn tick(
        self,
        token: CancellationToken,
        base: Duration,
        jitter_factor: f64,
    ) -> TickStream {
        let jitter_factor = if jitter_factor > 0.0 { jitter_factor } else { 0.0 };
        self.tick_with(token, FactoredJitter::new(base, jitter_factor))
    }

    /// Starts ticking at intervals drawn uniformly from `[min, max]`.
    ///
    /// Returns [`TickerError::InvalidRange`] if `max < min`; nothing is spawned
    /// in that case.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    pub fn tick_between(
        self,
        token: CancellationToken,
        min: Duration,
        max: Duration,
    ) -> Result<TickStream, TickerError> {
        let jitter = RangeJitter::new(min, max)?;
        Ok(self.tick_with(token, jitter))
    }

    /// Starts ticking with a caller-supplied strategy.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    pub fn tick_with<S>(self, token: CancellationToken, strategy: S) -> TickStream
    where
        S: JitterStrategy + Send + 'static,
    {
        let Ticker {
            id,
            rng,
            bus,
            subscribers,
        } = self;

        if !subscribers.is_empty() {
            tokio::spawn(SubscriberSet::new(id, subscribers).listen(bus.subscribe()));
        }

        bus.publish(Event::new(EventKind::TickerStarted).with_reason(strategy.describe()));

        let (tx, stream) = tick_slot(token.clone());
        tokio::spawn(TickActor::new(strategy, rng, tx, bus).run(token));
        stream
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
