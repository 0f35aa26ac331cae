//! Engine configuration.

use serde::Deserialize;

use crate::diff::DiffConfig;

/// Settings passed to the difference engine.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DiffSettings {
    /// Move modified runs behind equal trailing context.
    #[serde(default = "default_shift_boundaries")]
    pub shift_boundaries: bool,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            shift_boundaries: default_shift_boundaries(),
        }
    }
}

impl From<&DiffSettings> for DiffConfig {
    fn from(settings: &DiffSettings) -> Self {
        Self {
            shift_boundaries: settings.shift_boundaries,
        }
    }
}

pub(super) const fn default_shift_boundaries() -> bool {
    true
}
