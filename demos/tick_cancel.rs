//! # Example: tick_cancel
//!
//! Shows the lifecycle events of a ticker through the built-in [`LogWriter`],
//! including ticks dropped while the consumer is busy.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► Ticker::builder(cfg).with_subscribers([LogWriter]).build()
//!   ├─► tick(token, 200ms, 0.3)
//!   ├─► consumer reads one tick, then sleeps 1s (unread ticks are superseded)
//!   ├─► consumer reads the latest tick
//!   └─► token.cancel() ─► [stopped] reason="cancelled"
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example tick_cancel --features logging
//! ```

use std::{sync::Arc, time::Duration};

use jittered_ticker::{LogWriter, Subscribe, Ticker, TickerConfig};
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("=== tick_cancel example ===\n");

    // 1. Configure the ticker
    let mut cfg = TickerConfig::default();
    cfg.bus_capacity = 128;

    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let ticker = Ticker::builder(cfg).with_subscribers(subs).build();

    // 2. Start ticking
    let token = CancellationToken::new();
    let mut ticks = ticker.tick(token.clone(), Duration::from_millis(200), 0.3);

    // 3. Read one tick, then stall the consumer
    ticks.recv().await;
    tokio::time::sleep(Duration::from_secs(1)).await;

    // 4. Only the most recent tick is waiting, never a backlog
    if let Some(at) = ticks.recv().await {
        println!("latest tick is {:?} old", at.elapsed());
    }

    // 5. Cancel and drain
    token.cancel();
    while ticks.recv().await.is_some() {}

    // let the subscriber worker flush
    tokio::time::sleep(Duration::from_millis(50)).await;
    Ok(())
}
