//! # Example: tick_between
//!
//! Ticks at intervals drawn uniformly from [1s, 2s], consumed as a
//! `futures::Stream`, and shows the error returned for an inverted range.
//!
//! ## Run
//! ```bash
//! cargo run --example tick_between
//! ```

use std::time::Duration;

use futures::StreamExt;
use jittered_ticker::{Ticker, TickerError};
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("=== tick_between example ===\n");

    // 1. Inverted bounds are rejected up front; nothing is spawned.
    let err = Ticker::new()
        .tick_between(
            CancellationToken::new(),
            Duration::from_secs(2),
            Duration::from_secs(1),
        )
        .err();
    if let Some(e @ TickerError::InvalidRange { .. }) = err {
        println!("rejected: {e} (label={})", e.as_label());
    }

    // 2. Valid bounds, with a fixed seed so runs are repeatable.
    let token = CancellationToken::new();
    let ticks = Ticker::seeded(2024).tick_between(
        token.clone(),
        Duration::from_secs(1),
        Duration::from_secs(2),
    )?;

    // 3. Stop from another task after a while.
    let stopper = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(7)).await;
        stopper.cancel();
    });

    let stamps: Vec<_> = ticks.collect().await;
    for pair in stamps.windows(2) {
        println!("interval: {:?}", pair[1] - pair[0]);
    }
    println!("\n{} ticks before cancellation", stamps.len());
    Ok(())
}
