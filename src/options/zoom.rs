use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Wheel zoom parameters.
pub struct ZoomOptions {
    /// Camera distance change per unit of wheel delta.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Fraction of the remaining distance covered each frame.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
    /// Closest allowed camera distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed camera distance.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            zoom_speed: 0.1,
            smoothing: 0.1,
            min_distance: 2.0,
            max_distance: 50.0,
        }
    }
}
