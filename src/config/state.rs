// Application state module
// Read-only state shared by all in-flight requests

use super::types::Config;

/// Application state
///
/// Nothing here is mutated after startup, so concurrent requests share
/// it without locking.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Whether access logging is enabled
    #[must_use]
    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
