//! The regular icosahedron every icosphere starts from.

use nalgebra::Point3;

// Unit-length golden-ratio coordinates: X = 1 / sqrt(1 + phi^2), Z = phi * X.
#[allow(clippy::excessive_precision)]
const X: f64 = 0.525_731_112_119_133_606;
#[allow(clippy::excessive_precision)]
const Z: f64 = 0.850_650_808_352_039_932;
const N: f64 = 0.0;

/// The 12 icosahedron vertices, already on the unit sphere.
pub const SEED_VERTICES: [[f64; 3]; 12] = [
    [-X, N, Z],
    [X, N, Z],
    [-X, N, -Z],
    [X, N, -Z],
    [N, Z, X],
    [N, Z, -X],
    [N, -Z, X],
    [N, -Z, -X],
    [Z, X, N],
    [-Z, X, N],
    [Z, -X, N],
    [-Z, -X, N],
];

/// The 20 icosahedron faces.
///
/// Every face is wound clockwise when viewed from outside, so right-hand
/// normals point toward the centre. Each edge is used once in each
/// direction.
#[rustfmt::skip]
pub const SEED_FACES: [[u32; 3]; 20] = [
    [0, 4, 1], [0, 9, 4], [9, 5, 4], [4, 5, 8], [4, 8, 1],
    [8, 10, 1], [8, 3, 10], [5, 3, 8], [5, 2, 3], [2, 7, 3],
    [7, 10, 3], [7, 6, 10], [7, 11, 6], [11, 0, 6], [0, 1, 6],
    [6, 1, 10], [9, 0, 11], [9, 11, 2], [9, 2, 5], [7, 2, 11],
];

/// Seed vertex positions as points.
pub(crate) fn seed_points() -> impl ExactSizeIterator<Item = Point3<f64>> {
    SEED_VERTICES.iter().map(|&[x, y, z]| Point3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    #[test]
    fn seed_vertices_are_unit_length() {
        for p in seed_points() {
            assert!((p.coords.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn seed_edges_are_shared_by_opposite_faces() {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for face in &SEED_FACES {
            for i in 0..3 {
                *directed.entry((face[i], face[(i + 1) % 3])).or_insert(0) += 1;
            }
        }

        assert_eq!(directed.len(), 60);
        for (&(a, b), &count) in &directed {
            assert_eq!(count, 1, "edge ({a}, {b}) used twice in the same direction");
            assert_eq!(directed.get(&(b, a)), Some(&1), "edge ({a}, {b}) has no twin");
        }
    }

    #[test]
    fn every_vertex_has_valence_five() {
        let mut valence = [0_usize; 12];
        for face in &SEED_FACES {
            for &v in face {
                valence[v as usize] += 1;
            }
        }
        assert!(valence.iter().all(|&n| n == 5));
    }

    #[test]
    fn seed_edges_have_equal_length() {
        let points: Vec<_> = seed_points().collect();
        let first = &SEED_FACES[0];
        let expected = (points[first[0] as usize] - points[first[1] as usize]).norm();
        for face in &SEED_FACES {
            for i in 0..3 {
                let a = points[face[i] as usize];
                let b = points[face[(i + 1) % 3] as usize];
                assert!(((a - b).norm() - expected).abs() < 1e-12);
            }
        }
    }
}
