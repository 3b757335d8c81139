//! Result type for configured icosphere generation.

// Face counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use crate::growth::GrowthPrediction;
use crate::mesh::IndexedMesh;
use crate::params::FaceWinding;

/// A generated icosphere together with the sizes it was planned for.
#[derive(Debug, Clone)]
pub struct GeneratedIcosphere {
    /// The generated mesh.
    pub mesh: IndexedMesh,

    /// Number of subdivision passes performed.
    pub depth: u32,

    /// Sizes predicted, and preallocated, before generation.
    pub prediction: GrowthPrediction,

    /// Orientation of the faces in `mesh`.
    pub winding: FaceWinding,
}

impl GeneratedIcosphere {
    /// Face count relative to the 20-face icosahedron.
    #[must_use]
    pub fn face_ratio(&self) -> f64 {
        let seed = GrowthPrediction::seed();
        self.mesh.face_count() as f64 / seed.faces as f64
    }

    /// Vertex count relative to the 12-vertex icosahedron.
    #[must_use]
    pub fn vertex_ratio(&self) -> f64 {
        let seed = GrowthPrediction::seed();
        self.mesh.vertex_count() as f64 / seed.vertices as f64
    }

    /// Check if any subdivision occurred.
    #[must_use]
    pub const fn was_subdivided(&self) -> bool {
        self.depth > 0
    }

    /// Consume the result, keeping only the mesh.
    #[must_use]
    pub fn into_mesh(self) -> IndexedMesh {
        self.mesh
    }
}

impl std::fmt::Display for GeneratedIcosphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Icosphere (depth {}, {:?} winding): {} vertices, {} faces ({:.1}x)",
            self.depth,
            self.winding,
            self.mesh.vertex_count(),
            self.mesh.face_count(),
            self.face_ratio()
        )
    }
}
