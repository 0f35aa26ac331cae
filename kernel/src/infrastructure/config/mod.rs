//! Configuration management for the `snakediff` binary.
//!
//! Settings are layered: built-in defaults, then an optional configuration
//! file, then environment variables prefixed with `SNAKEDIFF__` (for example
//! `SNAKEDIFF__ENCODING__IGNORE_CASE=true`). Command line flags are applied
//! on top by the caller.
//!
//! # Example
//!
//! ```
//! use snakediff_kernel::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! assert!(settings.diff.shift_boundaries);
//! ```

pub mod diff;
pub mod encoding;
pub mod output;
pub mod telemetry;

pub use diff::DiffSettings;
pub use encoding::EncodingSettings;
pub use output::OutputSettings;
pub use telemetry::TelemetrySettings;

use std::path::Path;

use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Engine settings.
    #[serde(default)]
    pub diff: DiffSettings,
    /// Tokenization and normalization settings.
    #[serde(default)]
    pub encoding: EncodingSettings,
    /// Output settings.
    #[serde(default)]
    pub output: OutputSettings,
    /// Logging settings.
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Loads settings from defaults and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Loads settings from defaults, `config_file` (if given) and environment
    /// variables, later sources overriding earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a value
    /// has the wrong type.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::build(
            config_file,
            Environment::with_prefix("SNAKEDIFF")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn build(config_file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with default values
            .set_default("diff.shift_boundaries", true)?
            .set_default("encoding.granularity", "lines")?
            .set_default("encoding.trim_space", false)?
            .set_default("encoding.ignore_space", false)?
            .set_default("encoding.ignore_case", false)?
            .set_default("output.format", "normal")?
            .set_default("telemetry.log_level", "warn")?
            .set_default("telemetry.json", false)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        // Merge in Environment variables
        builder.add_source(env).build()?.try_deserialize()
    }
}
