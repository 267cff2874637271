//! Interval policies.
//!
//! This module groups the pieces that decide **how long** a ticker waits
//! between two ticks.
//!
//! ## Contents
//! - [`RandomSource`] per-ticker uniform generator (entropy or fixed seed)
//! - [`JitterStrategy`] "produce next interval" capability
//! - [`FactoredJitter`] `base ± base·factor`
//! - [`RangeJitter`] uniform in `[min, max]`
//!
//! ## Quick wiring
//! ```text
//! Ticker { rng: RandomSource }
//!      └─► core::actor::TickActor::run calls, once per cycle:
//!           strategy.next_interval(&mut rng) ─► sleep ─► deliver tick
//! ```

mod jitter;
mod random;

pub use jitter::{FactoredJitter, JitterStrategy, RangeJitter, sample_inclusive};
pub use random::RandomSource;
