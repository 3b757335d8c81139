//! Per-pass cache of edge midpoints.

use hashbrown::HashMap;
use nalgebra::Point3;

/// An undirected edge stored with the smaller vertex index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    lo: u32,
    hi: u32,
}

impl EdgeKey {
    /// Canonical key for the edge between `a` and `b`, in either order.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_icosphere::EdgeKey;
    ///
    /// assert_eq!(EdgeKey::new(7, 3), EdgeKey::new(3, 7));
    /// assert_eq!(EdgeKey::new(7, 3).endpoints(), (3, 7));
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Self {
        if a <= b { Self { lo: a, hi: b } } else { Self { lo: b, hi: a } }
    }

    /// Endpoints as `(min, max)`.
    #[inline]
    #[must_use]
    pub const fn endpoints(self) -> (u32, u32) {
        (self.lo, self.hi)
    }
}

/// Maps each edge seen during one subdivision pass to the index of the
/// vertex created at its midpoint.
///
/// The cache only stores indices. Midpoint positions are appended to the
/// caller's vertex buffer, so an entry is meaningful only for the buffer and
/// pass it was created in; call [`EdgeCache::clear`] before reusing it.
#[derive(Debug, Clone, Default)]
pub struct EdgeCache {
    midpoints: HashMap<EdgeKey, u32>,
}

impl EdgeCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache sized for `entries` edges.
    #[must_use]
    pub fn with_capacity(entries: usize) -> Self {
        Self {
            midpoints: HashMap::with_capacity(entries),
        }
    }

    /// Index of the midpoint vertex between `first` and `second`.
    ///
    /// The first request for an edge appends the normalized sum of its
    /// endpoints to `vertices`, which places the midpoint on the unit sphere
    /// when both endpoints are on it. Later requests for the same edge, in
    /// either direction, return the stored index without touching
    /// `vertices`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not an index into `vertices`, or if the
    /// new vertex index does not fit in `u32`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_icosphere::{EdgeCache, Point3};
    ///
    /// let mut vertices = vec![Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
    /// let mut cache = EdgeCache::new();
    ///
    /// let m = cache.midpoint(&mut vertices, 0, 1);
    /// assert_eq!(m, 2);
    /// assert_eq!(cache.midpoint(&mut vertices, 1, 0), m);
    /// assert_eq!(vertices.len(), 3);
    /// assert!((vertices[2].coords.norm() - 1.0).abs() < 1e-12);
    /// ```
    pub fn midpoint(&mut self, vertices: &mut Vec<Point3<f64>>, first: u32, second: u32) -> u32 {
        let key = EdgeKey::new(first, second);
        *self.midpoints.entry(key).or_insert_with(|| {
            let sum = vertices[key.lo as usize].coords + vertices[key.hi as usize].coords;
            let index = u32::try_from(vertices.len())
                .unwrap_or_else(|_| panic!("vertex index {} overflows u32", vertices.len()));
            vertices.push(Point3::from(sum.normalize()));
            index
        })
    }

    /// Midpoint index already recorded for an edge, if any.
    #[must_use]
    pub fn get(&self, first: u32, second: u32) -> Option<u32> {
        self.midpoints.get(&EdgeKey::new(first, second)).copied()
    }

    /// Remove all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.midpoints.clear();
    }

    /// Make room for at least `entries` edges in total without rehashing.
    pub fn reserve(&mut self, entries: usize) {
        self.midpoints
            .reserve(entries.saturating_sub(self.midpoints.len()));
    }

    /// Number of edges recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// Whether no edge has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }

    /// Number of edges the cache can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.midpoints.capacity()
    }
}
