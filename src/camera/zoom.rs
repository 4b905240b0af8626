use super::core::Camera;
use crate::options::ZoomOptions;

/// Below this distance to the target the eased zoom snaps and stops.
const SETTLE_EPSILON: f32 = 1e-3;

/// Smoothed wheel zoom along the camera's Z axis.
///
/// Wheel input moves a target distance; [`step`](Self::step) eases the
/// camera toward it once per frame.
#[derive(Debug, Clone)]
pub struct ZoomState {
    target_z: f32,
    options: ZoomOptions,
}

impl ZoomState {
    /// Start at the camera's current Z position.
    #[must_use]
    pub fn new(camera: &Camera, options: ZoomOptions) -> Self {
        Self {
            target_z: camera.eye.z,
            options,
        }
    }

    /// Z position the camera is easing toward.
    #[must_use]
    pub fn target_z(&self) -> f32 {
        self.target_z
    }

    /// Apply a wheel delta (positive = away from the scene).
    pub fn scroll(&mut self, delta: f32) {
        self.target_z = (self.target_z + delta * self.options.zoom_speed)
            .clamp(self.options.min_distance, self.options.max_distance);
    }

    /// Move the camera a fraction of the way to the target. Returns `true`
    /// if the camera moved.
    pub fn step(&mut self, camera: &mut Camera) -> bool {
        let remaining = self.target_z - camera.eye.z;
        if remaining == 0.0 {
            return false;
        }
        if remaining.abs() < SETTLE_EPSILON {
            camera.eye.z = self.target_z;
        } else {
            camera.eye.z += remaining * self.options.smoothing;
        }
        true
    }
}
