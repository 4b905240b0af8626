//! Interaction options with TOML preset support.
//!
//! The defaults reproduce the fixed behavior of the cube menu (0.005 rad/px
//! rotation, 5 px click threshold, four destinations). Presets let a page
//! override any subset of them.

mod interaction;
mod navigation;
mod zoom;

use std::path::Path;

pub use interaction::{InteractionOptions, CLICK_THRESHOLD, ROTATE_SPEED};
pub use navigation::{NavigationOptions, DEFAULT_TARGETS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::ZoomOptions;

use crate::error::CubeNavError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[interaction]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Drag rotation and click classification.
    pub interaction: InteractionOptions,
    /// Face → destination table.
    pub navigation: NavigationOptions,
    /// Wheel zoom.
    pub zoom: ZoomOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, CubeNavError> {
        toml::from_str(content)
            .map_err(|e| CubeNavError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CubeNavError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CubeNavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CubeNavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(CubeNavError::Io)
    }
}
