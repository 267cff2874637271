//! # SubscriberSet: fan-out of one ticker's events.
//!
//! A set is created when a ticker starts and lives exactly as long as that
//! ticker's bus. [`SubscriberSet::listen`] drains the bus, queues each event
//! for the subscribers that accept its kind, and once the loop has stopped
//! waits for every worker and reports what each subscriber missed.
//!
//! ```text
//! Bus(ticker=N) ──► listen() ──┬─ accepts(kind)? ─► [queue S1] ─► worker S1 ─► on_event()
//!                              └─ accepts(kind)? ─► [queue SN] ─► worker SN ─► on_event()
//! ```
//!
//! ## Rules
//! - Queueing never waits: a full queue counts the event as missed.
//! - Bus lag counts as missed for every subscriber.
//! - A panic in `on_event` is reported with the event's tick and the worker
//!   moves on to the next event.

use std::{panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tokio::{
    sync::{broadcast, mpsc},
    task::JoinHandle,
};

use crate::events::Event;

use super::Subscribe;

struct Lane {
    sub: Arc<dyn Subscribe>,
    tx: mpsc::Sender<Arc<Event>>,
    missed: u64,
}

/// Subscribers of one running ticker, each behind its own queue and worker.
pub(crate) struct SubscriberSet {
    ticker: u64,
    lanes: Vec<Lane>,
    workers: Vec<JoinHandle<()>>,
}

impl SubscriberSet {
    /// Spawns one worker per subscriber. Must run inside a tokio runtime.
    pub(crate) fn new(ticker: u64, subs: Vec<Arc<dyn Subscribe>>) -> Self {
        let mut lanes = Vec::with_capacity(subs.len());
        let mut workers = Vec::with_capacity(subs.len());

        for sub in subs {
            let (tx, mut rx) = mpsc::channel::<Arc<Event>>(sub.queue_capacity().max(1));
            let worker_sub = Arc::clone(&sub);
            workers.push(tokio::spawn(async move {
                while let Some(ev) = rx.recv().await {
                    let handled = AssertUnwindSafe(worker_sub.on_event(&ev)).catch_unwind();
                    if let Err(panic) = handled.await {
                        eprintln!(
                            "[jittered-ticker] ticker={ticker} subscriber '{}' panicked on {:?} tick={:?}: {panic:?}",
                            worker_sub.name(),
                            ev.kind,
                            ev.tick,
                        );
                    }
                }
            }));
            lanes.push(Lane { sub, tx, missed: 0 });
        }

        Self {
            ticker,
            lanes,
            workers,
        }
    }

    /// Queues `event` for every subscriber that accepts its kind.
    pub(crate) fn emit(&mut self, event: &Event) {
        let ev = Arc::new(event.clone());
        for lane in &mut self.lanes {
            if !lane.sub.accepts(event.kind) {
                continue;
            }
            if lane.tx.try_send(Arc::clone(&ev)).is_err() {
                lane.missed += 1;
            }
        }
    }

    /// Forwards bus events until the ticker's bus closes, then shuts down.
    pub(crate) async fn listen(
        mut self,
        mut rx: broadcast::Receiver<Event>,
    ) -> Vec<(&'static str, u64)> {
        loop {
            match rx.recv().await {
                Ok(ev) => self.emit(&ev),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    for lane in &mut self.lanes {
                        lane.missed += n;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        self.shutdown().await
    }

    /// Closes every queue, waits for the workers to drain, and returns how many
    /// events each subscriber missed.
    pub(crate) async fn shutdown(self) -> Vec<(&'static str, u64)> {
        let Self {
            ticker,
            lanes,
            workers,
        } = self;
        let missed: Vec<_> = lanes
            .into_iter()
            .map(|lane| (lane.sub.name(), lane.missed))
            .collect();

        for worker in workers {
            let _ = worker.await;
        }
        for (name, n) in missed.iter().filter(|(_, n)| *n > 0) {
            eprintln!("[jittered-ticker] ticker={ticker} subscriber '{name}' missed {n} events");
        }
        missed
    }
}
