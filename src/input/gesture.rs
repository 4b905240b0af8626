use glam::Vec2;

use super::event::PointerDelta;

/// Drag tracking for one press→release gesture.
///
/// `accumulated_movement` only grows while dragging and is reset to zero
/// when the next gesture starts. It is kept after release so the click that
/// follows can be classified.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    dragging: bool,
    accumulated_movement: f32,
    last_position: Option<Vec2>,
}

impl GestureState {
    /// Idle state with no movement recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture. `position` is the absolute touch position, or
    /// `None` for relative (mouse) input.
    pub fn begin(&mut self, position: Option<Vec2>) {
        self.dragging = true;
        self.accumulated_movement = 0.0;
        self.last_position = position;
    }

    /// End the gesture. Movement stays recorded for click classification.
    pub fn end(&mut self) {
        self.dragging = false;
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Total pointer travel since the gesture started.
    #[must_use]
    pub fn accumulated_movement(&self) -> f32 {
        self.accumulated_movement
    }

    /// Last absolute position seen in this gesture.
    #[must_use]
    pub fn last_position(&self) -> Option<Vec2> {
        self.last_position
    }

    /// Turn a movement sample into a relative delta and add its length to
    /// the accumulated movement.
    ///
    /// Absolute samples are differenced against the previous sample, which
    /// then becomes the new reference. An absolute sample with no reference
    /// only establishes one.
    pub fn track(&mut self, delta: PointerDelta) -> Vec2 {
        let relative = match delta {
            PointerDelta::Relative(d) => d,
            PointerDelta::Absolute(pos) => {
                let previous = self.last_position.replace(pos);
                previous.map_or(Vec2::ZERO, |prev| pos - prev)
            }
        };
        self.accumulated_movement += relative.length();
        relative
    }
}
