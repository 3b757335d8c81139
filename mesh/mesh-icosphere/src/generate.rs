//! Icosphere generation.

use tracing::{debug, info};

use crate::edge_cache::EdgeCache;
use crate::error::{IcosphereError, IcosphereResult};
use crate::growth::{GrowthPrediction, MAX_DEPTH};
use crate::mesh::{IndexedMesh, find_invalid_face};
use crate::params::{FaceWinding, IcosphereParams};
use crate::result::GeneratedIcosphere;
use crate::seed::{SEED_FACES, seed_points};
use crate::subdivide::subdivide_pass;

/// Generate a unit icosphere with `depth` subdivision passes.
///
/// Depth 0 returns the seed icosahedron unchanged. Every further pass
/// quadruples the face count. Faces keep the seed orientation; use
/// [`generate_icosphere`] with [`FaceWinding::Outward`] for outward normals.
///
/// # Panics
///
/// Panics if `depth` exceeds [`MAX_DEPTH`], beyond which vertex indices no
/// longer fit in `u32`.
///
/// # Examples
///
/// ```
/// use mesh_icosphere::icosphere;
///
/// let sphere = icosphere(2);
/// assert_eq!(sphere.vertex_count(), 162);
/// assert_eq!(sphere.face_count(), 320);
///
/// for v in &sphere.vertices {
///     assert!((v.coords.norm() - 1.0).abs() < 1e-9);
/// }
/// ```
#[must_use]
pub fn icosphere(depth: u32) -> IndexedMesh {
    match plan(depth) {
        Ok(prediction) => build(&prediction),
        Err(err) => panic!("{err}"),
    }
}

/// Generate an icosphere using the specified parameters.
///
/// The face budget is checked against the predicted size before anything
/// is allocated.
///
/// # Errors
///
/// Returns an error if:
/// - `depth` exceeds [`MAX_DEPTH`]
/// - the resulting mesh would exceed `max_faces`
///
/// # Examples
///
/// ```
/// use mesh_icosphere::{generate_icosphere, FaceWinding, IcosphereParams};
///
/// let params = IcosphereParams::for_depth(3).with_winding(FaceWinding::Outward);
/// let result = generate_icosphere(&params)?;
///
/// assert_eq!(result.mesh.face_count(), 1280);
/// assert!(result.mesh.signed_volume() > 0.0);
/// # Ok::<(), mesh_icosphere::IcosphereError>(())
/// ```
pub fn generate_icosphere(params: &IcosphereParams) -> IcosphereResult<GeneratedIcosphere> {
    let prediction = plan(params.depth)?;
    if prediction.faces > params.max_faces {
        return Err(IcosphereError::MeshTooLarge {
            depth: params.depth,
            projected: prediction.faces,
            max: params.max_faces,
        });
    }

    let mut mesh = build(&prediction);
    if params.winding == FaceWinding::Outward {
        mesh.flip_winding();
    }

    info!(
        "Generated icosphere: depth {}, {} vertices, {} faces",
        params.depth,
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(GeneratedIcosphere {
        mesh,
        depth: params.depth,
        prediction,
        winding: params.winding,
    })
}

/// Growth prediction for `depth`, refusing depths whose indices overflow.
fn plan(depth: u32) -> IcosphereResult<GrowthPrediction> {
    let too_large = IcosphereError::DepthTooLarge {
        depth,
        max: MAX_DEPTH,
    };
    if depth > MAX_DEPTH {
        return Err(too_large);
    }
    GrowthPrediction::for_depth(depth).ok_or(too_large)
}

/// Run the subdivision passes with every buffer sized up front.
fn build(prediction: &GrowthPrediction) -> IndexedMesh {
    let depth = prediction.depth;

    let mut vertices = Vec::with_capacity(prediction.vertices);
    vertices.extend(seed_points());
    if depth == 0 {
        return IndexedMesh::from_parts(vertices, SEED_FACES.to_vec());
    }

    // The buffer holding the seed ends up holding the output when depth is even
    let (seed_capacity, other_capacity) = if depth % 2 == 0 {
        (prediction.faces, prediction.previous_faces)
    } else {
        (prediction.previous_faces, prediction.faces)
    };
    let mut current = Vec::with_capacity(seed_capacity);
    current.extend_from_slice(&SEED_FACES);
    let mut next = Vec::with_capacity(other_capacity);
    let mut cache = EdgeCache::with_capacity(prediction.edge_cache_entries);

    debug!(
        "Subdividing icosahedron: {} passes, reserved {} vertices, {} faces, {} edges",
        depth, prediction.vertices, prediction.faces, prediction.edge_cache_entries
    );

    for pass in 1..=depth {
        subdivide_pass(&mut vertices, &current, &mut cache, &mut next);
        std::mem::swap(&mut current, &mut next);

        debug_assert_eq!(find_invalid_face(vertices.len(), &current), None);
        debug!(
            "Pass {}: {} faces, {} vertices, {} edges",
            pass,
            current.len(),
            vertices.len(),
            cache.len()
        );
    }

    assert_eq!(
        vertices.len(),
        prediction.vertices,
        "vertex count diverged from prediction"
    );
    assert_eq!(
        current.len(),
        prediction.faces,
        "face count diverged from prediction"
    );
    assert_eq!(
        next.len(),
        prediction.previous_faces,
        "previous pass size diverged from prediction"
    );
    assert_eq!(
        cache.len(),
        prediction.edge_cache_entries,
        "edge cache size diverged from prediction"
    );

    IndexedMesh::from_parts(vertices, current)
}
