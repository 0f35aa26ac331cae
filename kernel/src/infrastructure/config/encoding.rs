//! Symbol encoding configuration.

use serde::Deserialize;

use crate::encoding::{EncodeOptions, Granularity, TextOptions};

/// How input files are tokenized and normalized.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct EncodingSettings {
    /// Token boundaries.
    #[serde(default)]
    pub granularity: Granularity,
    /// Strip leading and trailing whitespace of each token.
    #[serde(default)]
    pub trim_space: bool,
    /// Collapse whitespace runs into one space.
    #[serde(default)]
    pub ignore_space: bool,
    /// Compare case-insensitively.
    #[serde(default)]
    pub ignore_case: bool,
}

impl EncodingSettings {
    /// Options for [`crate::diff::diff_text`] and [`crate::encoding::SymbolTable`].
    #[must_use]
    pub const fn text_options(&self) -> TextOptions {
        TextOptions {
            granularity: self.granularity,
            encode: EncodeOptions {
                trim_space: self.trim_space,
                ignore_space: self.ignore_space,
                ignore_case: self.ignore_case,
            },
        }
    }
}
