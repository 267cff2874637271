//! # LogWriter — simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [started] ticker=1 strategy="factored base=500ms factor=0.2"
//! [interval] ticker=1 tick=1 delay=463ms
//! [tick] ticker=1 tick=1
//! [dropped] ticker=1 tick=2 reason="superseded"
//! [stopped] ticker=1 reason="cancelled" ticks=2
//! ```

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;
use async_trait::async_trait;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        let ticker = e.ticker.unwrap_or_default();
        let tick = e.tick.unwrap_or_default();
        match e.kind {
            EventKind::TickerStarted => {
                println!(
                    "[started] ticker={ticker} strategy={:?}",
                    e.reason.as_deref().unwrap_or("unknown")
                );
            }
            EventKind::IntervalScheduled => {
                println!(
                    "[interval] ticker={ticker} tick={tick} delay={}ms",
                    e.interval_ms.unwrap_or_default()
                );
            }
            EventKind::TickDelivered => {
                println!("[tick] ticker={ticker} tick={tick}");
            }
            EventKind::TickDropped => {
                println!(
                    "[dropped] ticker={ticker} tick={tick} reason={:?}",
                    e.reason.as_deref().unwrap_or("unknown")
                );
            }
            EventKind::TickerStopped => {
                println!(
                    "[stopped] ticker={ticker} reason={:?} ticks={tick}",
                    e.reason.as_deref().unwrap_or("unknown")
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
