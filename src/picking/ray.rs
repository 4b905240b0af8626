use glam::Vec3;

/// Hits closer than this along the ray are rejected, as are near-parallel
/// triangles.
const EPSILON: f32 = 1e-6;

/// Half-line from `origin` along a unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray; `direction` is normalized (zero stays zero).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a successful raycast against a [`Pickable`](super::Pickable).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Index of the struck triangle, in mesh definition order.
    pub triangle_index: usize,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// Hit point in world space.
    pub point: Vec3,
}

/// Möller–Trumbore ray/triangle test. Two-sided; returns the ray parameter
/// of the hit.
#[must_use]
pub fn intersect_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    (t > EPSILON).then_some(t)
}
