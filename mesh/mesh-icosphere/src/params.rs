//! Icosphere generation parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::growth::GrowthPrediction;

/// Orientation of the generated faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FaceWinding {
    /// Keep the seed icosahedron's orientation (clockwise seen from outside).
    #[default]
    Seed,

    /// Counter-clockwise seen from outside, so right-hand normals point out.
    Outward,
}

/// Parameters for icosphere generation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IcosphereParams {
    /// Number of subdivision passes applied to the icosahedron.
    pub depth: u32,

    /// Maximum faces allowed in the result (prevents memory issues).
    pub max_faces: usize,

    /// Orientation of the output faces.
    pub winding: FaceWinding,
}

impl Default for IcosphereParams {
    fn default() -> Self {
        Self {
            depth: 0,
            max_faces: 10_000_000, // 10M faces max
            winding: FaceWinding::default(),
        }
    }
}

impl IcosphereParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create parameters for the given depth.
    #[must_use]
    pub fn for_depth(depth: u32) -> Self {
        Self::default().with_depth(depth)
    }

    /// Set subdivision depth.
    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set maximum faces allowed.
    #[must_use]
    pub const fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Set face winding.
    #[must_use]
    pub const fn with_winding(mut self, winding: FaceWinding) -> Self {
        self.winding = winding;
        self
    }

    /// Expected face count, or `None` if it overflows `usize`.
    #[must_use]
    pub fn expected_faces(&self) -> Option<usize> {
        GrowthPrediction::for_depth(self.depth).map(|p| p.faces)
    }

    /// Expected vertex count, or `None` if it overflows `usize`.
    #[must_use]
    pub fn expected_vertices(&self) -> Option<usize> {
        GrowthPrediction::for_depth(self.depth).map(|p| p.vertices)
    }
}
