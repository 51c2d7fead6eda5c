//! Logging setup
//!
//! Rendering emits `debug` events per input and `trace` events for field
//! normalization and leaf details. Applications that already install a
//! subscriber do not need this module.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global `tracing` subscriber
///
/// Uses `RUST_LOG` when set. Otherwise debug builds log at
/// `debug,acton_input=trace` with pretty formatting and release builds log
/// at `info` as JSON.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use acton_input::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    init_with(&ObservabilityConfig::default())
}

/// Install a global subscriber using explicit settings
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_with(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    tracing::debug!(service = %config.service_name, json = config.json, "logging initialized");
    Ok(())
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Service name recorded in the startup event
    pub service_name: String,

    /// Emit JSON instead of pretty output
    pub json: bool,

    /// Filter used when `RUST_LOG` is unset
    pub default_filter: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "acton-input".to_string(),
            json: !cfg!(debug_assertions),
            default_filter: None,
        }
    }
}

impl ObservabilityConfig {
    /// Create config for a named service
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Force JSON output
    #[must_use]
    pub const fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Override the fallback filter
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = Some(filter.into());
        self
    }

    fn default_directive(&self) -> String {
        self.default_filter.clone().unwrap_or_else(|| {
            if cfg!(debug_assertions) {
                "debug,acton_input=trace".to_string()
            } else {
                "info".to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.service_name, "acton-input");
        assert_eq!(config.json, !cfg!(debug_assertions));
        assert!(config.default_filter.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new("my-app")
            .with_json()
            .with_filter("warn");

        assert_eq!(config.service_name, "my-app");
        assert!(config.json);
        assert_eq!(config.default_directive(), "warn");
    }
}
