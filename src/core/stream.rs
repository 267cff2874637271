//! # TickStream: consumer side of a running ticker.
//!
//! The loop and the stream share a single **latest-wins** slot:
//!
//! ```text
//! TickActor ── offer(n, now) ──► [ slot: Option<(tick, Instant)> ] ── take ──► TickStream
//!                 │                         ▲
//!                 └─ replaces an unread     └─ cleared when the loop stops
//!                    tick (TickDropped)
//! ```
//!
//! ## Rules
//! - `offer` never waits; an unread tick is overwritten by the newer one, so a
//!   consumer that stalls reads a tick at most one interval old.
//! - Once the ticker's token is cancelled the stream yields `None`, even if a
//!   tick was still pending.
//! - Dropping the stream closes the slot; the loop notices at its next wake-up
//!   or while waiting.

use std::{
    fmt,
    pin::Pin,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    task::{Context, Poll, ready},
};

use futures::{Stream, StreamExt, future::BoxFuture};
use tokio::{sync::Notify, time::Instant};
use tokio_util::sync::{CancellationToken, DropGuard};

#[derive(Debug, Default)]
struct SlotState {
    pending: Option<(u64, Instant)>,
    closed: bool,
}

#[derive(Debug, Default)]
struct Slot {
    state: Mutex<SlotState>,
    notify: Notify,
}

impl Slot {
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Result of handing a tick to the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Offer {
    /// Slot was empty.
    Placed,
    /// Slot held an unread tick with this number; it was overwritten.
    Replaced(u64),
    /// Stream is gone.
    Closed,
}

/// Producer half of the tick slot, owned by the ticker loop.
pub(crate) struct SlotSender {
    slot: Arc<Slot>,
    stream_gone: CancellationToken,
}

impl SlotSender {
    /// Stores tick `n`, overwriting any unread one. Never waits.
    pub(crate) fn offer(&self, n: u64, at: Instant) -> Offer {
        if self.stream_gone.is_cancelled() {
            return Offer::Closed;
        }
        let previous = {
            let mut state = self.slot.lock();
            if state.closed {
                return Offer::Closed;
            }
            state.pending.replace((n, at))
        };
        self.slot.notify.notify_one();
        match previous {
            Some((stale, _)) => Offer::Replaced(stale),
            None => Offer::Placed,
        }
    }

    /// Resolves once the consumer has dropped its stream.
    pub(crate) async fn closed(&self) {
        self.stream_gone.cancelled().await;
    }

    /// Closes the slot for good and returns the number of an unread tick, if any.
    pub(crate) fn close(&self) -> Option<u64> {
        let discarded = {
            let mut state = self.slot.lock();
            state.closed = true;
            state.pending.take().map(|(n, _)| n)
        };
        self.slot.notify.notify_one();
        discarded
    }
}

impl Drop for SlotSender {
    fn drop(&mut self) {
        self.close();
    }
}

/// Creates a connected slot. The stream stops yielding once `token` is cancelled.
pub(crate) fn tick_slot(token: CancellationToken) -> (SlotSender, TickStream) {
    let slot = Arc::new(Slot::default());
    let stream_gone = CancellationToken::new();
    let stream = TickStream {
        slot: Arc::clone(&slot),
        token,
        wake: None,
        _guard: stream_gone.clone().drop_guard(),
    };
    (SlotSender { slot, stream_gone }, stream)
}

/// Timestamps produced by a jittered ticker.
///
/// Dropping the stream stops the background loop.
pub struct TickStream {
    slot: Arc<Slot>,
    token: CancellationToken,
    wake: Option<BoxFuture<'static, ()>>,
    _guard: DropGuard,
}

impl TickStream {
    /// Waits for the next tick.
    ///
    /// Returns `None` once the ticker is cancelled or has stopped.
    pub async fn recv(&mut self) -> Option<Instant> {
        self.next().await
    }

    /// Takes the pending tick, if one is waiting in the slot.
    ///
    /// Returns `None` both when no tick is pending and when the stream is closed.
    pub fn try_recv(&mut self) -> Option<Instant> {
        self.poll_slot().flatten()
    }

    /// `Some(Some(at))` for a pending tick, `Some(None)` once closed, `None` to wait.
    fn poll_slot(&self) -> Option<Option<Instant>> {
        if self.token.is_cancelled() {
            return Some(None);
        }
        let mut state = self.slot.lock();
        if let Some((_, at)) = state.pending.take() {
            return Some(Some(at));
        }
        state.closed.then_some(None)
    }
}

impl Stream for TickStream {
    type Item = Instant;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(item) = this.poll_slot() {
                return Poll::Ready(item);
            }
            let slot = Arc::clone(&this.slot);
            let wake = this.wake.get_or_insert_with(|| {
                Box::pin(async move { slot.notify.notified().await }) as BoxFuture<'static, ()>
            });
            ready!(wake.as_mut().poll(cx));
            this.wake = None;
        }
    }
}

impl fmt::Debug for TickStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickStream")
            .field("cancelled", &self.token.is_cancelled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time;

    #[tokio::test]
    async fn test_newer_tick_replaces_unread_one() {
        let (tx, mut rx) = tick_slot(CancellationToken::new());
        let t0 = Instant::now();

        assert_eq!(tx.offer(1, t0), Offer::Placed);
        assert_eq!(tx.offer(2, t0 + Duration::from_millis(5)), Offer::Replaced(1));
        assert_eq!(rx.try_recv(), Some(t0 + Duration::from_millis(5)));
        assert_eq!(rx.try_recv(), None);
        assert_eq!(tx.offer(3, t0 + Duration::from_millis(9)), Offer::Placed);
    }

    #[tokio::test]
    async fn test_cancelled_token_hides_pending_tick() {
        let token = CancellationToken::new();
        let (tx, mut rx) = tick_slot(token.clone());

        tx.offer(1, Instant::now());
        token.cancel();
        assert_eq!(rx.recv().await, None);
        assert_eq!(rx.try_recv(), None);
    }

    #[tokio::test]
    async fn test_close_discards_and_wakes_receiver() {
        let (tx, mut rx) = tick_slot(CancellationToken::new());
        tx.offer(4, Instant::now());
        assert_eq!(tx.close(), Some(4));

        assert_eq!(rx.recv().await, None);
        assert_eq!(tx.offer(5, Instant::now()), Offer::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waiting_receiver_is_woken_by_offer() {
        let (tx, mut rx) = tick_slot(CancellationToken::new());
        let at = Instant::now() + Duration::from_millis(30);

        let producer = tokio::spawn(async move {
            time::sleep(Duration::from_millis(30)).await;
            tx.offer(1, Instant::now());
            tx
        });
        let got = rx.recv().await.expect("tick after offer");
        assert!(got >= at, "tick {got:?} before the offer at {at:?}");
        drop(producer.await.unwrap());
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_dropping_stream_closes_sender() {
        let (tx, rx) = tick_slot(CancellationToken::new());
        drop(rx);
        tx.closed().await;
        assert_eq!(tx.offer(1, Instant::now()), Offer::Closed);
    }
}
