//! Configuration for the form engine

use serde::Deserialize;

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Substitute a field's prior value into the validated output when
    /// its submission fails validation, instead of omitting the field
    #[serde(default)]
    pub revert_on_invalid: bool,

    /// Scheme prefixed by the `website` rule when the value carries none
    #[serde(default = "default_url_scheme")]
    pub default_url_scheme: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            revert_on_invalid: false,
            default_url_scheme: default_url_scheme(),
        }
    }
}

fn default_url_scheme() -> String {
    "http".to_string()
}
