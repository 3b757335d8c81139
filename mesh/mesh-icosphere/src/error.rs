//! Error types for icosphere generation.

use thiserror::Error;

/// Errors that can occur when generating an icosphere from parameters.
///
/// These are all raised before any buffer is allocated. Topology defects
/// discovered during a pass are not represented here: they are bugs and
/// abort through an assertion instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IcosphereError {
    /// Vertex indices would overflow `u32` at this depth.
    #[error("Subdivision depth {depth} exceeds the maximum of {max} for u32 vertex indices")]
    DepthTooLarge {
        /// Requested depth.
        depth: u32,
        /// Largest supported depth.
        max: u32,
    },

    /// Projected face count exceeds the configured budget.
    #[error("Icosphere at depth {depth} would have {projected} faces (max {max})")]
    MeshTooLarge {
        /// Requested depth.
        depth: u32,
        /// Face count the generator would produce.
        projected: usize,
        /// Configured face budget.
        max: usize,
    },
}

/// Result type for icosphere generation.
pub type IcosphereResult<T> = std::result::Result<T, IcosphereError>;
