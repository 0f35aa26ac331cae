//! Logging setup built on `tracing-subscriber`.

use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Builder for the logging subscriber of the binary.
///
/// Logs go to stderr so that diff output on stdout stays machine-readable.
pub struct TelemetryBuilder {
    service_name: String,
    log_level: String,
    json: bool,
}

impl TelemetryBuilder {
    /// Starts a builder for the given service name with level `info`.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json: false,
        }
    }

    /// Filter directive used when `RUST_LOG` is not set.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Switches to JSON-formatted log lines.
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Installs the subscriber as the global default.
    ///
    /// # Errors
    ///
    /// Returns an error if the log level cannot be parsed or a global
    /// subscriber is already installed.
    pub fn init(self) -> Result<()> {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.log_level)
                .with_context(|| format!("Invalid log level '{}'", self.log_level))?,
        };

        let fmt_layer = if self.json {
            fmt::layer().json().with_writer(std::io::stderr).boxed()
        } else {
            fmt::layer().with_writer(std::io::stderr).boxed()
        };

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to init subscriber")?;

        tracing::debug!(service = %self.service_name, "telemetry initialized");
        Ok(())
    }
}
