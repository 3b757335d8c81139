//! One round of midpoint subdivision on a closed triangle mesh.

use nalgebra::Point3;

use crate::edge_cache::EdgeCache;

/// Split every face of `input` into four, writing the result to `output`.
///
/// Midpoint vertices are looked up in (or added to) `cache` and appended to
/// `vertices`, so a vertex is created once per edge and shared by the two
/// faces on either side of it. Winding is preserved: for an input face
/// `(v0, v1, v2)` with midpoints `m01`, `m12`, `m20` the pass emits
///
/// ```text
/// (v0, m01, m20)  (v1, m12, m01)  (v2, m20, m12)  (m01, m12, m20)
/// ```
///
/// Both `cache` and `output` are cleared first; their capacity is reused.
///
/// # Panics
///
/// `input` must be a closed, manifold triangulation whose indices are valid
/// for `vertices`. The pass asserts that it produced four faces per input
/// face and one cache entry per input edge (`3T / 2`); a mismatch means the
/// input topology is broken and is not recoverable.
///
/// # Example
///
/// ```
/// use mesh_icosphere::{EdgeCache, IndexedMesh, icosphere, subdivide_pass};
///
/// let IndexedMesh { mut vertices, faces } = icosphere(0);
/// let mut cache = EdgeCache::new();
/// let mut next = Vec::new();
///
/// subdivide_pass(&mut vertices, &faces, &mut cache, &mut next);
///
/// assert_eq!(next.len(), 80);
/// assert_eq!(vertices.len(), 42);
/// assert_eq!(cache.len(), 30);
/// ```
pub fn subdivide_pass(
    vertices: &mut Vec<Point3<f64>>,
    input: &[[u32; 3]],
    cache: &mut EdgeCache,
    output: &mut Vec<[u32; 3]>,
) {
    cache.clear();
    output.clear();

    for &[v0, v1, v2] in input {
        let m01 = cache.midpoint(vertices, v0, v1);
        let m12 = cache.midpoint(vertices, v1, v2);
        let m20 = cache.midpoint(vertices, v2, v0);

        // Corner triangles
        output.push([v0, m01, m20]);
        output.push([v1, m12, m01]);
        output.push([v2, m20, m12]);
        // Center triangle
        output.push([m01, m12, m20]);
    }

    assert_eq!(
        output.len(),
        input.len() * 4,
        "subdivision produced {} faces from {} input faces",
        output.len(),
        input.len()
    );
    assert_eq!(
        cache.len(),
        input.len() + input.len() / 2,
        "{} input faces produced {} distinct edges; input is not a closed manifold",
        input.len(),
        cache.len()
    );
}
