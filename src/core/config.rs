//! # Ticker configuration.
//!
//! Provides [`TickerConfig`], the settings applied when a [`Ticker`](crate::Ticker)
//! is built through [`Ticker::builder`](crate::Ticker::builder).
//!
//! ## Sentinel values
//! - `seed = None` → random source seeded from OS entropy
//! - `bus_capacity = 0` → clamped to 1

use crate::policies::RandomSource;

/// Configuration for a single ticker.
///
/// ## Field semantics
/// - `seed`: fixed seed for the ticker's random source (`None` = entropy)
/// - `bus_capacity`: event bus ring buffer size (min 1; clamped by Bus)
///
/// ## Notes
/// All fields are public for flexibility. Prefer using helper accessors to avoid
/// sprinkling sentinel checks across the codebase.
///
/// # Example
/// ```
/// use jittered_ticker::TickerConfig;
///
/// let mut cfg = TickerConfig::default();
/// cfg.seed = Some(42);
/// cfg.bus_capacity = 0;
///
/// assert_eq!(cfg.bus_capacity_clamped(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TickerConfig {
    /// Seed for the ticker's random source.
    ///
    /// Two tickers built with the same seed and strategy sample the same
    /// interval sequence.
    pub seed: Option<u64>,

    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Receivers that lag behind more than `bus_capacity` events will receive
    /// `Lagged` and skip older items.
    pub bus_capacity: usize,
}

impl TickerConfig {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }

    /// Builds the random source described by `seed`.
    pub fn random_source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::new(),
        }
    }
}

impl Default for TickerConfig {
    /// Default configuration:
    ///
    /// - `seed = None` (entropy)
    /// - `bus_capacity = 64`
    fn default() -> Self {
        Self {
            seed: None,
            bus_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_config_is_reproducible() {
        let cfg = TickerConfig {
            seed: Some(99),
            ..TickerConfig::default()
        };
        let mut a = cfg.random_source();
        let mut b = cfg.random_source();
        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
    }

    #[test]
    fn test_default_bus_capacity() {
        assert_eq!(TickerConfig::default().bus_capacity_clamped(), 64);
    }
}
