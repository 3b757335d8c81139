//! Closed-form growth of an icosphere under repeated subdivision.
//!
//! Every pass turns each face into four and adds one vertex per edge. For a
//! closed genus-0 triangulation that gives `T' = 4T` and `V' = 4V - 6`
//! starting from the icosahedron's 12 vertices and 20 faces. The edge cache
//! for a pass holds one entry per input edge, `T + T / 2`.

use std::mem::size_of;

use nalgebra::Point3;

use crate::edge_cache::EdgeKey;
use crate::seed::{SEED_FACES, SEED_VERTICES};

/// Largest depth whose vertex count still fits in `u32` indices.
pub const MAX_DEPTH: u32 = 14;

/// Predicted sizes for an icosphere at a given depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPrediction {
    /// Number of subdivision passes.
    pub depth: u32,
    /// Final vertex count.
    pub vertices: usize,
    /// Final face count.
    pub faces: usize,
    /// Face count before the last pass (zero at depth 0).
    pub previous_faces: usize,
    /// Edge-cache entries after the last pass (zero at depth 0).
    pub edge_cache_entries: usize,
}

/// Predicted sizes for a single subdivision pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassPrediction {
    /// One-based pass number.
    pub pass: u32,
    /// Faces read by the pass.
    pub input_faces: usize,
    /// Faces written by the pass.
    pub output_faces: usize,
    /// Vertex count once the pass has run.
    pub vertices: usize,
    /// Distinct edges, and therefore new vertices, in the pass.
    pub edge_cache_entries: usize,
}

impl GrowthPrediction {
    /// The unsubdivided icosahedron.
    #[must_use]
    pub const fn seed() -> Self {
        Self {
            depth: 0,
            vertices: SEED_VERTICES.len(),
            faces: SEED_FACES.len(),
            previous_faces: 0,
            edge_cache_entries: 0,
        }
    }

    /// Predict final sizes after `depth` passes.
    ///
    /// Returns `None` if a count overflows `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_icosphere::GrowthPrediction;
    ///
    /// let p = GrowthPrediction::for_depth(2).unwrap();
    /// assert_eq!(p.vertices, 162);
    /// assert_eq!(p.faces, 320);
    /// assert_eq!(p.edge_cache_entries, 120);
    /// ```
    #[must_use]
    pub fn for_depth(depth: u32) -> Option<Self> {
        let mut prediction = Self::seed();
        for pass in Self::passes(depth) {
            prediction = Self {
                depth: pass.pass,
                vertices: pass.vertices,
                faces: pass.output_faces,
                previous_faces: pass.input_faces,
                edge_cache_entries: pass.edge_cache_entries,
            };
        }
        (prediction.depth == depth).then_some(prediction)
    }

    /// Iterate the per-pass predictions for `depth` passes.
    ///
    /// Stops early if a count would overflow `usize`.
    pub fn passes(depth: u32) -> impl Iterator<Item = PassPrediction> {
        let seed = Self::seed();
        (1..=depth).scan((seed.vertices, seed.faces), |(vertices, faces), pass| {
            let input_faces = *faces;
            let edge_cache_entries = input_faces.checked_add(input_faces / 2)?;
            let output_faces = input_faces.checked_mul(4)?;
            let next_vertices = vertices.checked_mul(4)?.checked_sub(6)?;
            *vertices = next_vertices;
            *faces = output_faces;
            Some(PassPrediction {
                pass,
                input_faces,
                output_faces,
                vertices: next_vertices,
                edge_cache_entries,
            })
        })
    }

    /// Number of distinct edges in the final mesh.
    #[must_use]
    pub const fn edges(&self) -> usize {
        self.faces + self.faces / 2
    }

    /// Lower bound on the bytes held by the preallocated buffers.
    ///
    /// Counts vertex storage, both face buffers and the edge-cache payload.
    /// Hash table control bytes and load-factor slack are not included.
    #[must_use]
    pub const fn approx_bytes(&self) -> usize {
        self.vertices * size_of::<Point3<f64>>()
            + (self.faces + self.previous_faces) * size_of::<[u32; 3]>()
            + self.edge_cache_entries * size_of::<(EdgeKey, u32)>()
    }
}

/// Predict the sizes of an icosphere at `depth`.
///
/// Shorthand for [`GrowthPrediction::for_depth`].
#[must_use]
pub fn predict_growth(depth: u32) -> Option<GrowthPrediction> {
    GrowthPrediction::for_depth(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_prediction() {
        let p = GrowthPrediction::for_depth(0);
        assert_eq!(p, Some(GrowthPrediction::seed()));
        assert_eq!(GrowthPrediction::seed().vertices, 12);
        assert_eq!(GrowthPrediction::seed().faces, 20);
        assert_eq!(GrowthPrediction::seed().edges(), 30);
    }

    #[test]
    fn known_depths() {
        let expected = [(0, 12, 20), (1, 42, 80), (2, 162, 320), (4, 2562, 5120)];
        for (depth, vertices, faces) in expected {
            let p = predict_growth(depth);
            assert!(p.is_some(), "depth {depth} should be predictable");
            let p = p.unwrap_or_else(GrowthPrediction::seed);
            assert_eq!(p.vertices, vertices, "vertices at depth {depth}");
            assert_eq!(p.faces, faces, "faces at depth {depth}");
        }
    }

    #[test]
    fn edge_cache_matches_previous_faces() {
        for depth in 1..=6 {
            let p = GrowthPrediction::for_depth(depth).unwrap_or_else(GrowthPrediction::seed);
            assert_eq!(p.previous_faces * 4, p.faces);
            assert_eq!(
                p.edge_cache_entries,
                p.previous_faces + p.previous_faces / 2
            );
        }
    }

    #[test]
    fn passes_follow_recurrence() {
        let passes: Vec<_> = GrowthPrediction::passes(3).collect();
        assert_eq!(passes.len(), 3);
        assert_eq!(passes[0].input_faces, 20);
        assert_eq!(passes[0].edge_cache_entries, 30);
        assert_eq!(passes[0].vertices, 42);
        assert_eq!(passes[2].pass, 3);
        assert_eq!(passes[2].output_faces, 1280);
        assert_eq!(passes[2].vertices, 642);

        for pair in passes.windows(2) {
            assert_eq!(pair[1].input_faces, pair[0].output_faces);
            // Each pass adds exactly one vertex per edge
            assert_eq!(
                pair[1].vertices - pair[0].vertices,
                pair[1].edge_cache_entries
            );
        }
    }

    #[test]
    fn euler_characteristic_is_two() {
        for depth in 0..=8 {
            let p = GrowthPrediction::for_depth(depth).unwrap_or_else(GrowthPrediction::seed);
            assert_eq!(p.vertices + p.faces, p.edges() + 2, "depth {depth}");
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn max_depth_fits_u32_indices() {
        let at_max = GrowthPrediction::for_depth(MAX_DEPTH);
        assert!(at_max.is_some_and(|p| u32::try_from(p.vertices).is_ok()));

        let beyond = GrowthPrediction::for_depth(MAX_DEPTH + 1);
        assert!(beyond.is_some_and(|p| u32::try_from(p.vertices).is_err()));
    }

    #[test]
    fn overflow_yields_none() {
        assert!(GrowthPrediction::for_depth(64).is_none());
    }

    #[test]
    fn approx_bytes_grows_with_depth() {
        let small = GrowthPrediction::for_depth(1).map_or(0, |p| p.approx_bytes());
        let large = GrowthPrediction::for_depth(3).map_or(0, |p| p.approx_bytes());
        assert!(small > 0);
        assert!(large > small * 10);
    }
}
