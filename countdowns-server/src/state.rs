use std::sync::Arc;

use countdowns_core::Catalog;
use countdowns_core::clock::{Clock, SystemClock};
use countdowns_core::config::SiteConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
    pub config: Arc<SiteConfig>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(catalog: &'static Catalog, config: SiteConfig) -> Self {
        AppState {
            catalog,
            config: Arc::new(config),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the wall clock, e.g. with a fixed one in tests.
    #[cfg(test)]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
