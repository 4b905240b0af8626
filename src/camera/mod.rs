//! Camera used for picking, plus smoothed wheel zoom.

/// Core camera struct and picking-ray construction.
pub mod core;
/// Eased wheel zoom along the view axis.
pub mod zoom;

pub use self::core::Camera;
pub use self::zoom::ZoomState;
