//! # TickActor: the background loop behind one ticker.
//!
//! Owns the ticker's [`RandomSource`], its [`JitterStrategy`] and the producer
//! half of the tick slot. Runs on its own tokio task until cancelled.
//!
//! ## Architecture
//! ```text
//! Ticker::tick_with() ──► tokio::spawn(TickActor::run(token))
//!
//! loop {
//!   ├─► interval = strategy.next_interval(&mut rng)   (fresh every cycle)
//!   ├─► publish IntervalScheduled
//!   ├─► select! (biased)
//!   │     ├─ token.cancelled()  ─► Stopped("cancelled")
//!   │     ├─ tx.closed()        ─► Stopped("stream_closed")
//!   │     └─ sleep(interval)    ─► continue below
//!   └─► tx.offer(n, now)
//!         ├─ Placed       ─► publish TickDelivered(n)
//!         ├─ Replaced(m)  ─► publish TickDropped(m, "superseded"), TickDelivered(n)
//!         └─ Closed       ─► Stopped("stream_closed")
//! }
//!
//! Stopped: close slot (unread tick ─► TickDropped "unread_at_stop"),
//!          publish TickerStopped
//! ```
//!
//! ## Rules
//! - States are **Running** and **Stopped**; Stopped is terminal.
//! - Delivery never waits on the consumer.
//! - Ticks leave the loop in strictly increasing time order.

use tokio::{
    select,
    time::{self, Instant},
};
use tokio_util::sync::CancellationToken;

use crate::{
    events::{Bus, Event, EventKind},
    policies::{JitterStrategy, RandomSource},
};

use super::stream::{Offer, SlotSender};

/// Why the loop reached its terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StopReason {
    Cancelled,
    StreamClosed,
}

impl StopReason {
    fn as_str(self) -> &'static str {
        match self {
            StopReason::Cancelled => "cancelled",
            StopReason::StreamClosed => "stream_closed",
        }
    }
}

/// Runs the jittered repeat loop of a single ticker.
pub(crate) struct TickActor<S> {
    strategy: S,
    rng: RandomSource,
    tx: SlotSender,
    bus: Bus,
}

impl<S: JitterStrategy> TickActor<S> {
    pub(crate) fn new(strategy: S, rng: RandomSource, tx: SlotSender, bus: Bus) -> Self {
        Self {
            strategy,
            rng,
            tx,
            bus,
        }
    }

    /// Runs until `token` is cancelled or the consumer drops its stream.
    ///
    /// ### Cancellation semantics
    /// - A token cancelled before the first cycle yields zero ticks.
    /// - Cancellation wins over an expiring timer when both are ready.
    /// - After returning, the slot is closed and never reopened.
    pub(crate) async fn run(mut self, token: CancellationToken) {
        let mut fired: u64 = 0;

        let reason = loop {
            if token.is_cancelled() {
                break StopReason::Cancelled;
            }

            let interval = self.strategy.next_interval(&mut self.rng);
            self.bus.publish(
                Event::new(EventKind::IntervalScheduled)
                    .with_tick(fired + 1)
                    .with_interval(interval),
            );

            let sleep = time::sleep(interval);
            tokio::pin!(sleep);
            select! {
                biased;
                _ = token.cancelled() => { break StopReason::Cancelled; }
                _ = self.tx.closed() => { break StopReason::StreamClosed; }
                _ = &mut sleep => {}
            }

            match self.tx.offer(fired + 1, Instant::now()) {
                Offer::Placed => {}
                Offer::Replaced(stale) => self.dropped(stale, "superseded"),
                Offer::Closed => break StopReason::StreamClosed,
            }
            fired += 1;
            self.bus.publish(Event::new(EventKind::TickDelivered).with_tick(fired));
        };

        if let Some(unread) = self.tx.close() {
            self.dropped(unread, "unread_at_stop");
        }
        self.bus.publish(
            Event::new(EventKind::TickerStopped)
                .with_tick(fired)
                .with_reason(reason.as_str()),
        );
    }

    fn dropped(&self, tick: u64, reason: &'static str) {
        self.bus.publish(
            Event::new(EventKind::TickDropped)
                .with_tick(tick)
                .with_reason(reason),
        );
    }
}
