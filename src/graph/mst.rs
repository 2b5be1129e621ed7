//! Minimum spanning tree over a dense distance matrix.
//!
//! Dense Prim's algorithm, O(n²), which is optimal for complete graphs.
//! Each undirected edge `{i, j}` is weighted by [`DistanceMatrix::undirected`].
//!
//! # Reference
//!
//! Prim (1957), "Shortest connection networks and some generalizations"

use log::trace;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};

/// An undirected spanning tree over `num_vertices` cities.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    num_vertices: usize,
    edges: Vec<(usize, usize, f64)>,
    total_weight: f64,
}

impl SpanningTree {
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Tree edges as `(parent, child, weight)` in insertion order.
    pub fn edges(&self) -> &[(usize, usize, f64)] {
        &self.edges
    }

    /// Sum of all tree edge weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of tree edges incident to `vertex`.
    pub fn degree(&self, vertex: usize) -> usize {
        self.edges
            .iter()
            .filter(|&&(a, b, _)| a == vertex || b == vertex)
            .count()
    }
}

/// Builds a minimum spanning tree rooted at city 0.
///
/// Ties between equal keys are broken by the lowest city index, so the
/// result is deterministic for a given matrix.
///
/// Fails with [`TourError::DisconnectedGraph`] if some city is only
/// reachable through infinite edges.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::graph::minimum_spanning_tree;
///
/// let inf = f64::INFINITY;
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![inf, 1.0, 4.0],
///     vec![1.0, inf, 2.0],
///     vec![4.0, 2.0, inf],
/// ]).unwrap();
/// let tree = minimum_spanning_tree(&dm).unwrap();
/// assert_eq!(tree.edges().len(), 2);
/// assert!((tree.total_weight() - 3.0).abs() < 1e-10);
/// ```
pub fn minimum_spanning_tree(distances: &DistanceMatrix) -> Result<SpanningTree> {
    let n = distances.size();
    let mut in_tree = vec![false; n];
    let mut key = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;

    key[0] = 0.0;

    for reached in 0..n {
        let mut next: Option<usize> = None;
        for v in 0..n {
            if in_tree[v] || !key[v].is_finite() {
                continue;
            }
            if next.is_none_or(|u| key[v] < key[u]) {
                next = Some(v);
            }
        }

        let Some(u) = next else {
            return Err(TourError::DisconnectedGraph { reached, total: n });
        };
        in_tree[u] = true;

        if let Some(p) = parent[u] {
            trace!("mst edge ({p}, {u}) weight {}", key[u]);
            edges.push((p, u, key[u]));
            total_weight += key[u];
        }

        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            let w = distances.undirected(u, v);
            if w < key[v] {
                key[v] = w;
                parent[v] = Some(u);
            }
        }
    }

    Ok(SpanningTree {
        num_vertices: n,
        edges,
        total_weight,
    })
}
