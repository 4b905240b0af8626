use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Destinations for faces 0..3, in mesh face order.
pub const DEFAULT_TARGETS: [&str; 4] = [
    "./Pages/Playground.html",
    "./Pages/Halloween.html",
    "./Pages/About.html",
    "./Pages/Legalisation.html",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Face → destination table.
pub struct NavigationOptions {
    /// Destination per face index. Faces past the end are inert.
    #[schemars(title = "Targets")]
    pub targets: Vec<String>,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            targets: Vec::from(DEFAULT_TARGETS.map(str::to_owned)),
        }
    }
}
