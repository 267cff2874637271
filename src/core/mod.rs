//! Ticker core: entry points and the background loop.
//!
//! The public API from this module is [`Ticker`] (with [`TickerBuilder`] and
//! [`TickerConfig`]) and the consumer handle [`TickStream`].
//!
//! Internal modules:
//! - [`actor`]: the jittered repeat loop with cancellation and non-blocking delivery;
//! - [`ticker`]: entry points, validation, task spawning, subscriber wiring;
//! - [`stream`]: consumer side of the tick slot;
//! - [`builder`], [`config`]: construction.

mod actor;
mod builder;
mod config;
mod stream;
mod ticker;

pub use builder::TickerBuilder;
pub use config::TickerConfig;
pub use stream::TickStream;
pub use ticker::Ticker;
