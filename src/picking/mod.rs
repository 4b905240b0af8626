//! Ray picking against the interactive mesh.

/// Rotatable box mesh and the [`Pickable`] seam.
pub mod cube;
/// Rays and ray/triangle intersection.
pub mod ray;

pub use cube::{CubeMesh, Orientation, Pickable, CUBE_TRIANGLES};
pub use ray::{intersect_triangle, Ray, RayHit};
