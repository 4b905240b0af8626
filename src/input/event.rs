use glam::Vec2;

/// Platform-agnostic input events.
///
/// These are fed into an
/// [`InteractionController`](super::InteractionController), which turns
/// them into rotation changes and, for clicks, navigation requests.
///
/// # Example
///
/// ```ignore
/// let nav = controller.handle_event(
///     InputEvent::Click { position: Vec2::new(320.0, 240.0) },
///     &mut scene,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button or finger went down.
    PressStart {
        /// Absolute position for touch input; `None` for mouse input,
        /// whose moves arrive as relative deltas.
        position: Option<Vec2>,
    },
    /// Pointer or finger moved.
    Move {
        /// Movement sample.
        delta: PointerDelta,
    },
    /// Mouse button or finger released.
    PressEnd,
    /// Click or tap at a viewport position, in pixels from the top-left.
    Click {
        /// Pointer position in CSS pixels.
        position: Vec2,
    },
    /// Scroll wheel (positive = zoom out).
    Scroll {
        /// Wheel delta.
        delta: f32,
    },
}

/// One movement sample.
///
/// Mouse input reports motion relative to the previous event; touch input
/// reports absolute positions, which are differenced against the previous
/// sample of the same gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerDelta {
    /// Motion since the previous event.
    Relative(Vec2),
    /// Absolute pointer position.
    Absolute(Vec2),
}

impl PointerDelta {
    /// Relative delta from optionally-reported platform fields. Missing
    /// axes count as zero movement.
    #[must_use]
    pub fn relative_or_zero(dx: Option<f32>, dy: Option<f32>) -> Self {
        Self::Relative(Vec2::new(dx.unwrap_or(0.0), dy.unwrap_or(0.0)))
    }
}

/// Size of the area pointer coordinates are measured in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f32,
    /// Height in CSS pixels.
    pub height: f32,
}

impl Viewport {
    /// Viewport of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a pixel position to normalized device coordinates (`[-1, 1]`,
    /// +Y up). `None` for an empty viewport.
    #[must_use]
    pub fn to_ndc(self, position: Vec2) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            (position.x / self.width) * 2.0 - 1.0,
            -(position.y / self.height) * 2.0 + 1.0,
        ))
    }
}
