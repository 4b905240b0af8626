use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Radians of rotation applied per pixel of pointer travel.
pub const ROTATE_SPEED: f32 = 0.005;

/// Total pointer travel (pixels) above which a gesture counts as a drag.
pub const CLICK_THRESHOLD: f32 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Drag rotation and click classification parameters.
pub struct InteractionOptions {
    /// Radians per pixel of drag movement, applied to both axes.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Accumulated movement (pixels) above which a release is not a click.
    #[schemars(title = "Click Threshold", range(min = 0.0, max = 50.0), extend("step" = 1.0))]
    pub click_threshold: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            rotate_speed: ROTATE_SPEED,
            click_threshold: CLICK_THRESHOLD,
        }
    }
}
