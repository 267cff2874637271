//! Error types used by the ticker entry points.
//!
//! The ticking loop itself cannot fail: timer waits and random sampling are
//! infallible, and a tick that cannot be delivered is dropped rather than
//! reported. The only failure is a misconfigured bounded range, which is
//! rejected synchronously before any background task is spawned.
//!
//! [`TickerError`] provides helper methods (`as_label`, `as_message`) for
//! logging/metrics.

use std::time::Duration;
use thiserror::Error;

/// # Errors produced when starting a ticker.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    /// The upper bound of a bounded interval is below the lower bound.
    #[error("invalid interval range: max {max:?} is smaller than min {min:?}")]
    InvalidRange {
        /// Requested lower bound.
        min: Duration,
        /// Requested upper bound.
        max: Duration,
    },
}

impl TickerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use jittered_ticker::TickerError;
    /// use std::time::Duration;
    ///
    /// let err = TickerError::InvalidRange {
    ///     min: Duration::from_millis(2),
    ///     max: Duration::from_millis(1),
    /// };
    /// assert_eq!(err.as_label(), "ticker_invalid_range");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TickerError::InvalidRange { .. } => "ticker_invalid_range",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TickerError::InvalidRange { min, max } => {
                format!("range [{min:?}, {max:?}] is inverted")
            }
        }
    }
}
