//! Icosphere generation for CortenForge.
//!
//! An icosphere is built from a regular icosahedron by repeatedly splitting
//! every triangle into four and pushing the new vertices out onto the unit
//! sphere. This crate produces it as an indexed mesh in which every edge
//! midpoint exists exactly once and is shared by both faces on that edge.
//!
//! - [`icosphere`] - Generate a unit icosphere at a given depth
//! - [`generate_icosphere`] - Generate from [`IcosphereParams`] with a face budget
//! - [`predict_growth`] - Exact vertex, face and edge counts before generating
//! - [`subdivide_pass`] / [`EdgeCache`] - The single-pass building blocks
//!
//! # Growth
//!
//! Sizes are known in closed form, so every buffer is allocated once:
//!
//! | depth | vertices | faces |
//! |------:|---------:|------:|
//! | 0     | 12       | 20    |
//! | 1     | 42       | 80    |
//! | 2     | 162      | 320   |
//! | 4     | 2562     | 5120  |
//!
//! # Example
//!
//! ```
//! use mesh_icosphere::{icosphere, predict_growth};
//!
//! let prediction = predict_growth(4).unwrap();
//! let sphere = icosphere(4);
//!
//! assert_eq!(sphere.vertex_count(), prediction.vertices);
//! assert_eq!(sphere.face_count(), 5120);
//! ```
//!
//! # Layer 0 Crate
//!
//! No Bevy or GPU dependencies. Generation is single-threaded, performs no
//! I/O and shares no state between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod edge_cache;
mod error;
mod generate;
mod growth;
mod mesh;
mod params;
mod result;
mod seed;
mod subdivide;

pub use edge_cache::{EdgeCache, EdgeKey};
pub use error::{IcosphereError, IcosphereResult};
pub use generate::{generate_icosphere, icosphere};
pub use growth::{GrowthPrediction, MAX_DEPTH, PassPrediction, predict_growth};
pub use mesh::IndexedMesh;
pub use params::{FaceWinding, IcosphereParams};
pub use result::GeneratedIcosphere;
pub use seed::{SEED_FACES, SEED_VERTICES};
pub use subdivide::subdivide_pass;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
