//! Application configuration loaded from the environment

use std::env;
use tracing::warn;

use cardio_log_domain::config::{ConfigError, StorageConfig};
use cardio_log_domain::services::DEFAULT_RECENCY_WINDOW_DAYS;

/// Environment variable holding the default recency window in days
pub const WINDOW_DAYS_VAR: &str = "CARDIOLOG_WINDOW_DAYS";

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the journal document lives
    pub storage: StorageConfig,
    /// Recency window used by the dashboard when none is given
    pub window_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            window_days: DEFAULT_RECENCY_WINDOW_DAYS,
        }
    }
}

impl AppConfig {
    /// Create the configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage = StorageConfig::from_env()?;

        let window_days = match env::var(WINDOW_DAYS_VAR) {
            Ok(value) => value.trim().parse::<u32>().unwrap_or_else(|_| {
                warn!(
                    "Ignoring malformed {}={:?}, using {} days",
                    WINDOW_DAYS_VAR, value, DEFAULT_RECENCY_WINDOW_DAYS
                );
                DEFAULT_RECENCY_WINDOW_DAYS
            }),
            Err(_) => DEFAULT_RECENCY_WINDOW_DAYS,
        };

        Ok(Self { storage, window_days })
    }
}
