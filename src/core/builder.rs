use std::sync::Arc;

use crate::subscribers::Subscribe;

use super::{config::TickerConfig, ticker::Ticker};

/// Builder for constructing a [`Ticker`] with optional features.
pub struct TickerBuilder {
    cfg: TickerConfig,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl TickerBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: TickerConfig) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Sets event subscribers for observability.
    ///
    /// Subscribers receive the ticker's lifecycle events through dedicated
    /// workers with bounded queues, once the ticker is started.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.cfg.seed = Some(seed);
        self
    }

    /// Builds the ticker.
    ///
    /// Nothing is spawned until one of the ticker's entry points is called.
    pub fn build(self) -> Ticker {
        Ticker::from_parts(
            self.cfg.random_source(),
            self.cfg.bus_capacity_clamped(),
            self.subscribers,
        )
    }
}
