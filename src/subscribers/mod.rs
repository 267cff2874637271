//! # Event subscribers for ticker lifecycle events.
//!
//! Subscribers passed to [`TickerBuilder::with_subscribers`](crate::TickerBuilder::with_subscribers)
//! are attached when the ticker starts and detached when its loop stops.
//!
//! ```text
//! TickActor ── publish ──► Bus ──► SubscriberSet::listen ──► [queue per subscriber] ──► on_event()
//! ```
//!
//! The built-in [`LogWriter`] is exported with the `logging` feature.

#[cfg(feature = "logging")]
mod embedded;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub(crate) use set::SubscriberSet;
pub use subscribe::Subscribe;
