//! Output configuration.

use serde::Deserialize;

use crate::render::OutputFormat;

/// How results are printed.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct OutputSettings {
    /// Rendering style.
    #[serde(default)]
    pub format: OutputFormat,
}
