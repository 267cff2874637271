//! # Jitter strategies for tick intervals.
//!
//! A [`JitterStrategy`] produces the next interval each time the ticker loop
//! asks for one. The distribution is re-sampled on every tick, never fixed at
//! startup.
//!
//! - [`FactoredJitter`] — `base ± base·factor`
//! - [`RangeJitter`] — uniform between explicit `[min, max]`
//!
//! Both delegate to [`sample_inclusive`], which works on whole nanoseconds.
//!
//! ## Inclusive sampling
//! ```text
//! u ∈ [0, 1)           (from the ticker's RandomSource)
//! offset = ⌊u · (high − low + 1)⌋
//! result = low + offset ∈ [low, high]
//! ```
//! The `+ 1` gives `high` the same probability as every other nanosecond step;
//! without it the upper bound would only be reachable through float rounding.

use std::time::Duration;

use crate::error::TickerError;

use super::random::RandomSource;

/// Source of tick intervals.
///
/// Implementations hold immutable configuration only. The random source is
/// lent by the owning ticker on each call, so a strategy never owns or shares
/// generator state.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use jittered_ticker::{JitterStrategy, RandomSource};
///
/// /// Alternates between two fixed intervals, ignoring randomness.
/// struct Coin(Duration, Duration);
///
/// impl JitterStrategy for Coin {
///     fn next_interval(&self, rng: &mut RandomSource) -> Duration {
///         if rng.next_f64() < 0.5 { self.0 } else { self.1 }
///     }
/// }
///
/// let mut rng = RandomSource::seeded(7);
/// let d = Coin(Duration::from_secs(1), Duration::from_secs(2)).next_interval(&mut rng);
/// assert!(d == Duration::from_secs(1) || d == Duration::from_secs(2));
/// ```
pub trait JitterStrategy {
    /// Computes the interval to wait before the next tick.
    fn next_interval(&self, rng: &mut RandomSource) -> Duration;

    /// Short description used in lifecycle events.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// Draws a whole number uniformly from the inclusive range `[low, high]`.
///
/// `low` must not exceed `high`; if it does, `low` is returned.
pub fn sample_inclusive(rng: &mut RandomSource, low: u64, high: u64) -> u64 {
    if high <= low {
        return low;
    }
    let span = high - low;
    let offset = (rng.next_f64() * (span as f64 + 1.0)) as u64;
    // rounding in the product can land exactly on span + 1
    low + offset.min(span)
}

/// Interval of `base ± base·factor`.
///
/// A factor `≤ 0` (or NaN) yields a fixed interval equal to `base`. A factor
/// above `1` saturates the lower bound at zero. Bounds are kept in `u64`
/// nanoseconds, so a `base` past ~584 years is capped there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FactoredJitter {
    base: Duration,
    factor: f64,
    low_ns: u64,
    high_ns: u64,
}

impl FactoredJitter {
    /// Creates a strategy around `base` with relative spread `factor`.
    pub fn new(base: Duration, factor: f64) -> Self {
        let factor = if factor > 0.0 { factor } else { 0.0 };
        let base_ns = duration_to_nanos(base).unwrap_or(u64::MAX);

        let (low_ns, high_ns) = if factor == 0.0 {
            (base_ns, base_ns)
        } else {
            let center = base_ns as f64;
            let delta = center * factor;
            // round inward so the integer range never leaves the float range
            let low = (center - delta).max(0.0).ceil() as u64;
            let high = (center + delta).floor() as u64;
            (low.min(high), high)
        };

        Self {
            base,
            factor,
            low_ns,
            high_ns,
        }
    }

    /// Base interval.
    pub fn base(&self) -> Duration {
        self.base
    }

    /// Effective factor after clamping (never negative).
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Smallest interval this strategy can produce.
    pub fn min_interval(&self) -> Duration {
        Duration::from_nanos(self.low_ns)
    }

    /// Largest interval this strategy can produce.
    pub fn max_interval(&self) -> Duration {
        Duration::from_nanos(self.high_ns)
    }
}

impl JitterStrategy for FactoredJitter {
    fn next_interval(&self, rng: &mut RandomSource) -> Duration {
        Duration::from_nanos(sample_inclusive(rng, self.low_ns, self.high_ns))
    }

    fn describe(&self) -> String {
        format!("factored base={:?} factor={}", self.base, self.factor)
    }
}

/// Interval drawn uniformly from `[min, max]`.
///
/// Sampling works on `u64` nanoseconds (about 584 years). Above that, `max`
/// is capped at the limit, and a `min` beyond it is returned as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeJitter {
    min: Duration,
    max: Duration,
}

impl RangeJitter {
    /// Creates a bounded strategy.
    ///
    /// Returns [`TickerError::InvalidRange`] if `max < min`.
    pub fn new(min: Duration, max: Duration) -> Result<Self, TickerError> {
        if max < min {
            return Err(TickerError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> Duration {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> Duration {
        self.max
    }
}

impl JitterStrategy for RangeJitter {
    fn next_interval(&self, rng: &mut RandomSource) -> Duration {
        let Some(low) = duration_to_nanos(self.min) else {
            return self.min;
        };
        let high = duration_to_nanos(self.max).unwrap_or(u64::MAX);
        Duration::from_nanos(sample_inclusive(rng, low, high))
    }

    fn describe(&self) -> String {
        format!("range min={:?} max={:?}", self.min, self.max)
    }
}

/// Whole nanoseconds, or `None` past `u64::MAX` (~584 years).
fn duration_to_nanos(d: Duration) -> Option<u64> {
    u64::try_from(d.as_nanos()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factored_bounds() {
        let mut rng = RandomSource::new();
        let jitter = FactoredJitter::new(Duration::from_secs(1), 0.25);
        for _ in 0..10_000 {
            let d = jitter.next_interval(&mut rng);
            assert!(d >= Duration::from_millis(750), "interval {d:?} below lower bound");
            assert!(d <= Duration::from_millis(1250), "interval {d:?} above upper bound");
        }
    }

    #[test]
    fn test_factored_bounds_odd_factor() {
        let mut rng = RandomSource::seeded(11);
        let base = Duration::from_millis(500);
        let jitter = FactoredJitter::new(base, 0.2);
        let low = Duration::from_millis(400);
        let high = Duration::from_millis(600);
        for _ in 0..10_000 {
            let d = jitter.next_interval(&mut rng);
            assert!(d >= low && d <= high, "interval {d:?} outside [{low:?}, {high:?}]");
        }
    }

    #[test]
    fn test_factored_zero_is_fixed() {
        let mut rng = RandomSource::new();
        let base = Duration::from_millis(500);
        let jitter = FactoredJitter::new(base, 0.0);
        for _ in 0..1_000 {
            assert_eq!(jitter.next_interval(&mut rng), base);
        }
    }

    #[test]
    fn test_factored_negative_and_nan_are_fixed() {
        let mut rng = RandomSource::new();
        let base = Duration::from_millis(250);
        for factor in [-0.5, -1.0, f64::NEG_INFINITY, f64::NAN] {
            let jitter = FactoredJitter::new(base, factor);
            assert_eq!(jitter.factor(), 0.0);
            for _ in 0..100 {
                assert_eq!(jitter.next_interval(&mut rng), base);
            }
        }
    }

    #[test]
    fn test_factored_above_one_saturates_at_zero() {
        let jitter = FactoredJitter::new(Duration::from_millis(100), 1.5);
        assert_eq!(jitter.min_interval(), Duration::ZERO);
        assert_eq!(jitter.max_interval(), Duration::from_millis(250));

        let mut rng = RandomSource::seeded(3);
        for _ in 0..1_000 {
            assert!(jitter.next_interval(&mut rng) <= Duration::from_millis(250));
        }
    }

    #[test]
    fn test_factored_actually_jitters() {
        let mut rng = RandomSource::new();
        let base = Duration::from_secs(60);
        let jitter = FactoredJitter::new(base, 0.1);
        let non_center = (0..1_000)
            .filter(|_| jitter.next_interval(&mut rng) != base)
            .count();
        assert!(non_center > 0);
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = RangeJitter::new(Duration::from_millis(2), Duration::from_millis(1)).unwrap_err();
        assert_eq!(
            err,
            TickerError::InvalidRange {
                min: Duration::from_millis(2),
                max: Duration::from_millis(1),
            }
        );
    }

    #[test]
    fn test_range_equal_bounds_is_fixed() {
        let mut rng = RandomSource::new();
        let d = Duration::from_millis(500);
        let jitter = RangeJitter::new(d, d).unwrap();
        for _ in 0..1_000 {
            assert_eq!(jitter.next_interval(&mut rng), d);
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = RandomSource::new();
        let min = Duration::from_millis(400);
        let max = Duration::from_millis(600);
        let jitter = RangeJitter::new(min, max).unwrap();
        for _ in 0..10_000 {
            let d = jitter.next_interval(&mut rng);
            assert!(d >= min && d <= max, "interval {d:?} outside [{min:?}, {max:?}]");
        }
    }

    #[test]
    fn test_range_hits_both_endpoints() {
        let mut rng = RandomSource::seeded(5);
        let min = Duration::from_nanos(1);
        let max = Duration::from_nanos(3);
        let jitter = RangeJitter::new(min, max).unwrap();

        let mut counts = [0usize; 3];
        for _ in 0..30_000 {
            let d = jitter.next_interval(&mut rng);
            counts[(d.as_nanos() - 1) as usize] += 1;
        }
        // each outcome should get roughly a third of the samples
        for (i, c) in counts.iter().enumerate() {
            assert!(
                (8_000..12_000).contains(c),
                "outcome {}ns drawn {c} times: {counts:?}",
                i + 1
            );
        }
    }

    #[test]
    fn test_sample_inclusive_handles_full_span() {
        let mut rng = RandomSource::seeded(9);
        for _ in 0..1_000 {
            let _ = sample_inclusive(&mut rng, 0, u64::MAX);
        }
        assert_eq!(sample_inclusive(&mut rng, 7, 7), 7);
        assert_eq!(sample_inclusive(&mut rng, 9, 3), 9);
    }

    #[test]
    fn test_describe() {
        let f = FactoredJitter::new(Duration::from_millis(500), 0.2);
        assert_eq!(f.describe(), "factored base=500ms factor=0.2");
        let r = RangeJitter::new(Duration::from_millis(400), Duration::from_millis(600)).unwrap();
        assert_eq!(r.describe(), "range min=400ms max=600ms");
    }

    #[test]
    fn test_seeded_sources_replay_intervals() {
        let jitter = FactoredJitter::new(Duration::from_millis(100), 0.5);
        let mut a = RandomSource::seeded(1234);
        let mut b = RandomSource::seeded(1234);
        for _ in 0..100 {
            assert_eq!(jitter.next_interval(&mut a), jitter.next_interval(&mut b));
        }
    }

    #[test]
    fn test_range_beyond_nanosecond_limit_stays_in_bounds() {
        let mut rng = RandomSource::seeded(5);
        let huge = Duration::from_secs(u64::MAX / 2);

        let past_limit = RangeJitter::new(huge, huge + Duration::from_secs(1)).unwrap();
        assert_eq!(past_limit.next_interval(&mut rng), huge);

        let min = Duration::from_secs(1);
        let open_top = RangeJitter::new(min, huge).unwrap();
        for _ in 0..100 {
            let d = open_top.next_interval(&mut rng);
            assert!(d >= min && d <= huge, "interval {d:?} outside [{min:?}, {huge:?}]");
        }
    }
}
