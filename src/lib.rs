//! # jittered-ticker
//!
//! **jittered-ticker** produces a stream of timestamps at randomized
//! ("jittered") intervals instead of a fixed period, so that many independent
//! callers doing periodic work (polling, heartbeats, retries) do not line up
//! and hit a shared dependency at the same moment.
//!
//! ## Architecture
//! ```text
//!   caller                                   background task (one per ticker)
//! ┌──────────────────────────────┐         ┌──────────────────────────────────────┐
//! │ Ticker (owns RandomSource)   │         │ TickActor                            │
//! │  ├─ tick(token, base, f)     │ spawn   │ loop {                               │
//! │  ├─ tick_between(token, a, b)├────────►│   d = strategy.next_interval(rng)    │
//! │  └─ tick_with(token, custom) │         │   select! { cancelled => stop,       │
//! │                              │         │            sleep(d)  => offer }      │
//! │ TickStream ◄─────────────────┼─────────┤ }                                    │
//! │  (latest-wins, None on stop) │  tick   │ publish(Event) ──► Bus ──► Subscribe │
//! └──────────────────────────────┘         └──────────────────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! Running ──(token cancelled | stream dropped)──► Stopped (terminal, stream yields None)
//! ```
//!
//! ## Features
//! | Area              | Description                                                 | Key types / traits                          |
//! |-------------------|-------------------------------------------------------------|---------------------------------------------|
//! | **Ticking**       | Jittered tick streams with cooperative cancellation.        | [`Ticker`], [`TickStream`]                  |
//! | **Policies**      | Interval distributions and the per-ticker random source.    | [`JitterStrategy`], [`FactoredJitter`], [`RangeJitter`], [`RandomSource`] |
//! | **Events**        | Lifecycle events (scheduled, delivered, dropped, stopped).  | [`Event`], [`EventKind`]                    |
//! | **Subscriber API**| Hook into lifecycle events (logging, metrics).              | [`Subscribe`]                               |
//! | **Errors**        | Typed construction errors.                                  | [`TickerError`]                             |
//! | **Configuration** | Seed and bus settings.                                      | [`TickerConfig`], [`TickerBuilder`]         |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use jittered_ticker::Ticker;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let token = CancellationToken::new();
//!
//!     // Uniform interval in [10ms, 30ms], re-sampled every tick.
//!     let mut ticks = Ticker::new().tick_between(
//!         token.clone(),
//!         Duration::from_millis(10),
//!         Duration::from_millis(30),
//!     )?;
//!
//!     let mut seen = 0;
//!     while let Some(_at) = ticks.recv().await {
//!         seen += 1;
//!         if seen == 3 {
//!             token.cancel();
//!         }
//!     }
//!     assert_eq!(seen, 3);
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod policies;
mod subscribers;

// ---- Public re-exports ----

pub use crate::core::{TickStream, Ticker, TickerBuilder, TickerConfig};
pub use error::TickerError;
pub use events::{Event, EventKind};
pub use policies::{FactoredJitter, JitterStrategy, RandomSource, RangeJitter, sample_inclusive};
pub use subscribers::Subscribe;

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
