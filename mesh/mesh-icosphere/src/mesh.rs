//! Indexed triangle mesh produced by the generator.

use hashbrown::HashSet;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edge_cache::EdgeKey;

/// An indexed triangle mesh.
///
/// Vertices and faces are stored separately, with faces referencing
/// vertices by index. A vertex is identified only by its position in
/// `vertices`.
///
/// # Example
///
/// ```
/// use mesh_icosphere::{IndexedMesh, Point3};
///
/// let mesh = IndexedMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into `vertices`.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create an empty mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Number of distinct undirected edges referenced by the faces.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.faces
            .iter()
            .flat_map(|&[a, b, c]| [EdgeKey::new(a, b), EdgeKey::new(b, c), EdgeKey::new(c, a)])
            .collect::<HashSet<_>>()
            .len()
    }

    /// Find the first face with an out-of-range or repeated index.
    ///
    /// Returns `None` when every face references three distinct vertices
    /// that exist.
    #[must_use]
    pub fn validate_indices(&self) -> Option<(usize, [u32; 3])> {
        find_invalid_face(self.vertices.len(), &self.faces)
    }

    /// Signed volume enclosed by the faces.
    ///
    /// Sums the signed tetrahedra formed by each face and the origin.
    /// Positive when faces wind counter-clockwise seen from outside.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let volume: f64 = self
            .faces
            .iter()
            .map(|&[i0, i1, i2]| {
                let v0 = self.vertices[i0 as usize].coords;
                let v1 = self.vertices[i1 as usize].coords;
                let v2 = self.vertices[i2 as usize].coords;
                v0.dot(&v1.cross(&v2))
            })
            .sum();
        volume / 6.0
    }

    /// Absolute enclosed volume.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Total area of all faces.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.faces
            .iter()
            .map(|&[i0, i1, i2]| {
                let p0 = self.vertices[i0 as usize];
                let e1: Vector3<f64> = self.vertices[i1 as usize] - p0;
                let e2: Vector3<f64> = self.vertices[i2 as usize] - p0;
                0.5 * e1.cross(&e2).norm()
            })
            .sum()
    }

    /// Reverse the winding of every face.
    pub fn flip_winding(&mut self) {
        for face in &mut self.faces {
            face.swap(1, 2);
        }
    }

    /// Vertex positions narrowed to `f32`, for single-precision consumers.
    #[allow(clippy::cast_possible_truncation)]
    // Unit-sphere coordinates lose only precision when narrowed
    #[must_use]
    pub fn positions_f32(&self) -> Vec<[f32; 3]> {
        self.vertices
            .iter()
            .map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Face indices as one flat buffer, three per face.
    #[must_use]
    pub fn indices_flat(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }
}

/// First face in `faces` with a repeated index or one not below `vertex_count`.
pub(crate) fn find_invalid_face(vertex_count: usize, faces: &[[u32; 3]]) -> Option<(usize, [u32; 3])> {
    faces
        .iter()
        .enumerate()
        .find(|&(_, &[a, b, c])| {
            a == b || b == c || c == a || [a, b, c].iter().any(|&i| i as usize >= vertex_count)
        })
        .map(|(i, &face)| (i, face))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> IndexedMesh {
        IndexedMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
    }

    #[test]
    fn test_new_is_empty() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);

        let mesh = IndexedMesh::with_capacity(10, 20);
        assert!(mesh.is_empty());
        assert!(mesh.vertices.capacity() >= 10);
        assert!(mesh.faces.capacity() >= 20);
    }

    #[test]
    fn test_signed_volume_outward() {
        let mesh = tetrahedron();
        assert!((mesh.signed_volume() - 1.0 / 6.0).abs() < 1e-12);
        assert!((mesh.volume() - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_flip_winding_negates_volume() {
        let mut mesh = tetrahedron();
        mesh.flip_winding();
        assert!((mesh.signed_volume() + 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(mesh.faces[0], [0, 1, 2]);
    }

    #[test]
    fn test_surface_area() {
        let mesh = tetrahedron();
        // Three right triangles of area 0.5 plus one equilateral with side sqrt(2)
        let expected = 1.5 + 3.0_f64.sqrt() / 2.0;
        assert!((mesh.surface_area() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_edge_count() {
        assert_eq!(tetrahedron().edge_count(), 6);
    }

    #[test]
    fn test_validate_indices() {
        let mut mesh = tetrahedron();
        assert_eq!(mesh.validate_indices(), None);

        mesh.faces.push([0, 1, 9]);
        assert_eq!(mesh.validate_indices(), Some((4, [0, 1, 9])));

        mesh.faces[4] = [2, 2, 3];
        assert_eq!(mesh.validate_indices(), Some((4, [2, 2, 3])));
    }

    #[test]
    fn test_flat_buffers() {
        let mesh = tetrahedron();
        let positions = mesh.positions_f32();
        assert_eq!(positions.len(), 4);
        assert_eq!(positions[3], [0.0, 0.0, 1.0]);

        let indices = mesh.indices_flat();
        assert_eq!(indices.len(), 12);
        assert_eq!(&indices[..3], &[0, 2, 1]);
    }
}
