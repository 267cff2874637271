//! # Example: basic_tick
//!
//! Ticks every 1s ± 5% and stops after five ticks.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► Ticker::new().tick(token, 1s, 0.05)
//!   │     └─► background loop: sample interval ─► sleep ─► deliver
//!   └─► consume ticks, print spacing
//!         └─► after 5 ticks: token.cancel() ─► stream yields None
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic_tick
//! ```

use std::time::Duration;

use jittered_ticker::Ticker;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("=== basic_tick example ===\n");

    // If this token is cancelled, ticking stops and the stream closes.
    let token = CancellationToken::new();

    // The interval is re-sampled on every tick: 950ms..=1050ms.
    let mut ticks = Ticker::new().tick(token.clone(), Duration::from_secs(1), 0.05);

    let mut prev = Instant::now();
    let mut count = 0;
    while let Some(at) = ticks.recv().await {
        count += 1;
        println!("tick #{count} after {:?}", at - prev);
        prev = at;
        if count == 5 {
            token.cancel();
        }
    }

    println!("\nstream closed after {count} ticks");
    Ok(())
}
