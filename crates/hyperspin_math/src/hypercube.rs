//! Hypercube (n-cube) topology
//!
//! An n-cube has 2^n vertices (every combination of ±1 over n coordinates)
//! and n·2^(n-1) edges. Two vertices share an edge exactly when they differ
//! in a single coordinate, which in the ±1 encoding means their L1 distance
//! is 2.

use serde::{Serialize, Deserialize};
use crate::{MathError, VectorN};

/// Highest dimension the topology will generate (4096 vertices)
pub const MAX_DIMENSION: usize = 12;

/// Edge between two vertex indices, tagged with the axis they differ along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisEdge {
    /// Lower vertex index
    pub a: usize,
    /// Higher vertex index
    pub b: usize,
    /// Coordinate in which the two vertices differ
    pub axis: usize,
}

/// Vertex set of an n-cube
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HypercubeTopology {
    dimension: usize,
    vertices: Vec<VectorN>,
}

impl HypercubeTopology {
    /// Generate the n-cube for the given dimension
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vertices: generate_vertices(dimension),
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn vertices(&self) -> &[VectorN] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Lazily enumerate every edge as an `(i, j)` index pair with `i < j`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.axis_edges().map(|edge| (edge.a, edge.b))
    }

    /// Like [`edges`](Self::edges), but also reports the axis each edge runs along
    ///
    /// Coordinate `k` of vertex `i` is +1 exactly when bit `n-1-k` of `i` is
    /// set (see [`generate_vertices`]), so each neighbour is one bit flip
    /// away. Pairs come out ordered by `a`, then by `b`.
    pub fn axis_edges(&self) -> impl Iterator<Item = AxisEdge> + '_ {
        let n = self.dimension;
        (0..self.vertices.len()).flat_map(move |a| {
            (0..n).filter_map(move |bit| {
                let b = a ^ (1 << bit);
                (b > a).then_some(AxisEdge { a, b, axis: n - 1 - bit })
            })
        })
    }

    /// Number of edges, `n · 2^(n-1)`
    pub fn edge_count(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.dimension << (self.dimension - 1)
        }
    }
}

/// Build every length-`n` vector over {-1, +1}.
///
/// Starts from the single empty vector and, once per dimension, prepends
/// first -1 and then +1 to every vector built so far. The -1 copies come
/// before the +1 copies, so for `n = 2` the order is
/// `(-1,-1), (-1,1), (1,-1), (1,1)`: the first coordinate varies slowest.
pub fn generate_vertices(n: usize) -> Vec<VectorN> {
    let mut points = vec![VectorN::default()];
    for _ in 0..n {
        let mut next = Vec::with_capacity(points.len() * 2);
        for option in [-1.0, 1.0] {
            next.extend(points.iter().map(|base| base.prepended(option)));
        }
        points = next;
    }
    points
}

/// Edge predicate: true iff the two vertices are at L1 distance exactly 2
pub fn are_adjacent(a: &VectorN, b: &VectorN) -> Result<bool, MathError> {
    Ok(a.l1_distance(b)? == 2.0)
}
