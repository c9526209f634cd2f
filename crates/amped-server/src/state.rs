use std::sync::Arc;

use amped_export::styles::DocumentStyles;
use jiff::Zoned;

use crate::config::ServerConfig;

/// Source of "now" for report headers and download filenames.
pub trait Clock: Send + Sync {
    fn now(&self) -> Zoned;
}

/// Wall-clock time in the process's local zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// Always returns the same instant.
pub struct FixedClock(pub Zoned);

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.0.clone()
    }
}

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub styles: Arc<DocumentStyles>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            styles: Arc::new(DocumentStyles::default()),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}
