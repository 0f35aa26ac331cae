//! Telemetry configuration.

use serde::Deserialize;

/// Logging settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TelemetrySettings {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON lines instead of human-readable logs.
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

pub(super) fn default_log_level() -> String {
    "warn".to_string()
}
