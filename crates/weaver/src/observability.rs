//! Logging setup for the `story-weaver` binary.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use weaver_config::LoggingSettings;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Service name attached to the startup log line
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Log level filter used when `RUST_LOG` is unset (e.g., "info", "debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// The filter to install: `RUST_LOG` when set and valid, else `log_level`.
    pub fn env_filter(&self) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(&self.log_level)?),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new("story-weaver")
    }
}

impl From<&LoggingSettings> for ObservabilityConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self::default()
            .with_log_level(settings.level.clone())
            .with_json_logs(settings.json)
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the level filter does not parse or a subscriber is
/// already installed.
pub fn init_observability(
    config: &ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = config.env_filter()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        json = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}
