//! Axis-aligned box mesh that can be rotated and raycast.
//!
//! Triangles follow the usual box-geometry layout: faces in the order
//! +X, −X, +Y, −Y, +Z, −Z with two triangles per face, so triangle `i`
//! belongs to face `i / 2`.

use glam::{Quat, Vec3};

use super::ray::{intersect_triangle, Ray, RayHit};

/// Number of triangles in a box mesh.
pub const CUBE_TRIANGLES: usize = 12;

/// (normal, u, v) axes for each face, in mesh definition order.
const FACE_AXES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

/// Euler rotation (radians) about the X and Y axes.
///
/// Angles accumulate without wrapping. Applied X first, then Y (XYZ
/// order).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    /// Rotation about the X axis.
    pub x: f32,
    /// Rotation about the Y axis.
    pub y: f32,
}

impl Orientation {
    /// Quaternion for this orientation.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_x(self.x) * Quat::from_rotation_y(self.y)
    }
}

/// A scene object whose orientation the interaction layer may change and
/// which can answer ray queries.
pub trait Pickable {
    /// Current orientation.
    fn orientation(&self) -> Orientation;

    /// Mutable orientation, written during drags.
    fn orientation_mut(&mut self) -> &mut Orientation;

    /// Nearest intersection of `ray` with the object, if any.
    fn raycast(&self, ray: &Ray) -> Option<RayHit>;
}

/// Box mesh centered at `position`.
#[derive(Debug, Clone)]
pub struct CubeMesh {
    /// World-space center.
    pub position: Vec3,
    /// Rotation applied about the center.
    pub orientation: Orientation,
    triangles: [[Vec3; 3]; CUBE_TRIANGLES],
}

impl CubeMesh {
    /// Box with the given full extents, centered at the origin.
    #[must_use]
    pub fn new(size: Vec3) -> Self {
        let half = size * 0.5;
        let mut triangles = [[Vec3::ZERO; 3]; CUBE_TRIANGLES];
        for (face, &(n, u, v)) in FACE_AXES.iter().enumerate() {
            let corner = |su: f32, sv: f32| (n + u * su + v * sv) * half;
            let p00 = corner(-1.0, -1.0);
            let p10 = corner(1.0, -1.0);
            let p01 = corner(-1.0, 1.0);
            let p11 = corner(1.0, 1.0);
            triangles[face * 2] = [p01, p00, p11];
            triangles[face * 2 + 1] = [p00, p10, p11];
        }
        Self {
            position: Vec3::ZERO,
            orientation: Orientation::default(),
            triangles,
        }
    }

    /// Unit cube centered at the origin.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(Vec3::ONE)
    }

    /// Local-space triangles in definition order.
    #[must_use]
    pub fn triangles(&self) -> &[[Vec3; 3]; CUBE_TRIANGLES] {
        &self.triangles
    }
}

impl Pickable for CubeMesh {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn orientation_mut(&mut self) -> &mut Orientation {
        &mut self.orientation
    }

    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let inv = self.orientation.to_quat().inverse();
        let local = Ray {
            origin: inv * (ray.origin - self.position),
            direction: inv * ray.direction,
        };

        // Rotation only, so local distances equal world distances
        self.triangles
            .iter()
            .enumerate()
            .filter_map(|(i, [a, b, c])| {
                intersect_triangle(&local, *a, *b, *c).map(|t| (i, t))
            })
            .min_by(|(_, ta), (_, tb)| ta.total_cmp(tb))
            .map(|(triangle_index, distance)| RayHit {
                triangle_index,
                distance,
                point: ray.at(distance),
            })
    }
}
