//! # Per-ticker event bus.
//!
//! Every [`Ticker`](crate::Ticker) owns one [`Bus`]. The bus stamps the
//! ticker's id on everything published through it, so the loop only fills in
//! tick-specific fields.
//!
//! ```text
//! TickActor ── publish(Event) ──► Bus(ticker=N) ──┬──► SubscriberSet::listen
//!                                                 └──► Ticker::subscribe() receivers
//! ```
//!
//! Publishing never waits. Receivers that fall more than `capacity` events
//! behind observe `Lagged`; once the loop drops its bus they observe `Closed`.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for one ticker's events.
#[derive(Clone, Debug)]
pub struct Bus {
    ticker: u64,
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates the bus of ticker `ticker`, with at least one slot of capacity.
    pub fn new(ticker: u64, capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<Event>(capacity.max(1));
        Self { ticker, tx }
    }

    /// Id stamped on every published event.
    pub fn ticker(&self) -> u64 {
        self.ticker
    }

    /// Stamps the ticker id and broadcasts; dropped when nobody listens.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev.with_ticker(self.ticker));
    }

    /// Creates a receiver for events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    #[tokio::test]
    async fn test_publish_stamps_ticker_id() {
        let bus = Bus::new(9, 4);
        let mut rx = bus.subscribe();
        bus.publish(Event::new(EventKind::TickDelivered).with_tick(3));

        let ev = rx.recv().await.unwrap();
        assert_eq!(ev.ticker, Some(9));
        assert_eq!(ev.tick, Some(3));
    }

    #[tokio::test]
    async fn test_zero_capacity_is_usable() {
        let bus = Bus::new(1, 0);
        let mut rx = bus.subscribe();
        bus.publish(Event::new(EventKind::TickerStarted));
        assert_eq!(rx.recv().await.unwrap().kind, EventKind::TickerStarted);
    }

    #[tokio::test]
    async fn test_receiver_closes_when_bus_dropped() {
        let bus = Bus::new(2, 4);
        let mut rx = bus.subscribe();
        bus.publish(Event::new(EventKind::TickerStopped));
        drop(bus);

        assert!(rx.recv().await.unwrap().is_terminal());
        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Closed)
        ));
    }
}
