//! Face → destination lookup and the navigation seam.
//!
//! The interaction layer only decides *where* to go. Fulfilling the request
//! (changing the page, pushing a route) belongs to a [`Navigator`].

use crate::error::CubeNavError;
use crate::options::NavigationOptions;

/// Each quadrilateral face is two triangles in the mesh.
const TRIANGLES_PER_FACE: usize = 2;

/// Face index owning a given triangle.
#[must_use]
pub const fn face_for_triangle(triangle_index: usize) -> usize {
    triangle_index / TRIANGLES_PER_FACE
}

/// Immutable table of destinations indexed by face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTable {
    targets: Vec<String>,
}

impl NavigationTable {
    /// Build a table from destinations in face order.
    #[must_use]
    pub fn new(targets: Vec<String>) -> Self {
        Self { targets }
    }

    /// Destination for `face`, or `None` past the end of the table.
    #[must_use]
    pub fn lookup(&self, face: usize) -> Option<&str> {
        self.targets.get(face).map(String::as_str)
    }

    /// Number of faces with a destination.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no face has a destination.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for NavigationTable {
    fn default() -> Self {
        NavigationOptions::default().into()
    }
}

impl From<NavigationOptions> for NavigationTable {
    fn from(options: NavigationOptions) -> Self {
        Self::new(options.targets)
    }
}

/// A decision to go to `destination`, produced by a click on `face`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Face that was clicked.
    pub face: usize,
    /// Destination from the table.
    pub destination: String,
}

/// Carries out navigation requests.
pub trait Navigator {
    /// Go to `request.destination`.
    fn navigate(
        &mut self,
        request: &NavigationRequest,
    ) -> Result<(), CubeNavError>;
}
