//! Input handling: event types, gesture tracking, and the controller that
//! turns raw pointer events into rotation and navigation decisions.

/// Platform-agnostic input events.
pub mod event;
/// Drag state for a single press→release gesture.
pub mod gesture;
/// Converts raw events into rotation and navigation requests.
pub mod processor;

pub use event::{InputEvent, PointerDelta, Viewport};
pub use gesture::GestureState;
pub use processor::{InteractionController, SceneView};
