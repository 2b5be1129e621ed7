//! Eulerian circuits on undirected multigraphs.
//!
//! Iterative Hierholzer: walk unused edges until stuck, then back out of the
//! stack emitting vertices. Each edge is visited once, so the whole circuit
//! is built in O(V + E).
//!
//! # Reference
//!
//! Hierholzer & Wiener (1873), "Über die Möglichkeit, einen Linienzug ohne
//! Wiederholung und ohne Unterbrechung zu umfahren"

use crate::error::{Result, TourError};

/// Computes an Eulerian circuit of an undirected multigraph starting and
/// ending at `start`.
///
/// `edges` may contain parallel edges; each entry is traversed exactly once.
/// The returned walk has `edges.len() + 1` vertices. A graph with no edges
/// yields `[start]`.
///
/// Fails with [`TourError::NotEulerian`] if a vertex has odd degree, if
/// `start` is out of range or has no incident edge, or if some edges are
/// unreachable from `start`.
///
/// # Panics
///
/// Panics if an edge endpoint is `>= num_vertices`.
///
/// # Examples
///
/// ```
/// use u_tour::graph::eulerian_circuit;
///
/// // A path 0-1-2 with every edge doubled.
/// let edges = [(0, 1), (1, 2), (0, 1), (1, 2)];
/// let walk = eulerian_circuit(3, &edges, 0).unwrap();
/// assert_eq!(walk.len(), 5);
/// assert_eq!(walk.first(), walk.last());
/// ```
pub fn eulerian_circuit(
    num_vertices: usize,
    edges: &[(usize, usize)],
    start: usize,
) -> Result<Vec<usize>> {
    if start >= num_vertices {
        return Err(TourError::NotEulerian { vertex: start });
    }
    if edges.is_empty() {
        return Ok(vec![start]);
    }

    // (neighbor, edge id)
    let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); num_vertices];
    for (id, &(a, b)) in edges.iter().enumerate() {
        adjacency[a].push((b, id));
        adjacency[b].push((a, id));
    }

    if let Some(vertex) = (0..num_vertices).find(|&v| adjacency[v].len() % 2 == 1) {
        return Err(TourError::NotEulerian { vertex });
    }
    if adjacency[start].is_empty() {
        return Err(TourError::NotEulerian { vertex: start });
    }

    let mut used = vec![false; edges.len()];
    let mut cursor = vec![0usize; num_vertices];
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(edges.len() + 1);

    while let Some(&v) = stack.last() {
        while cursor[v] < adjacency[v].len() && used[adjacency[v][cursor[v]].1] {
            cursor[v] += 1;
        }
        match adjacency[v].get(cursor[v]) {
            Some(&(next, id)) => {
                used[id] = true;
                stack.push(next);
            }
            None => {
                circuit.push(v);
                stack.pop();
            }
        }
    }

    if let Some(id) = used.iter().position(|&u| !u) {
        return Err(TourError::NotEulerian {
            vertex: edges[id].0,
        });
    }

    circuit.reverse();
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_uses_every_edge(walk: &[usize], edges: &[(usize, usize)]) {
        assert_eq!(walk.len(), edges.len() + 1);
        let mut remaining: Vec<(usize, usize)> =
            edges.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect();
        for w in walk.windows(2) {
            let key = (w[0].min(w[1]), w[0].max(w[1]));
            let idx = remaining
                .iter()
                .position(|&e| e == key)
                .expect("walk step must use an unused edge");
            remaining.swap_remove(idx);
        }
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_triangle() {
        let edges = [(0, 1), (1, 2), (2, 0)];
        let walk = eulerian_circuit(3, &edges, 0).expect("eulerian");
        assert_eq!(walk[0], 0);
        assert_eq!(*walk.last().expect("non-empty"), 0);
        assert_uses_every_edge(&walk, &edges);
    }

    #[test]
    fn test_doubled_star() {
        let edges = [(0, 1), (0, 2), (0, 3), (0, 1), (0, 2), (0, 3)];
        let walk = eulerian_circuit(4, &edges, 2).expect("eulerian");
        assert_eq!(walk[0], 2);
        assert_eq!(*walk.last().expect("non-empty"), 2);
        assert_uses_every_edge(&walk, &edges);
    }

    #[test]
    fn test_figure_eight() {
        // Two triangles sharing vertex 0.
        let edges = [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)];
        let walk = eulerian_circuit(5, &edges, 0).expect("eulerian");
        assert_uses_every_edge(&walk, &edges);
    }

    #[test]
    fn test_no_edges() {
        let walk = eulerian_circuit(3, &[], 1).expect("trivial");
        assert_eq!(walk, vec![1]);
    }

    #[test]
    fn test_odd_degree() {
        let err = eulerian_circuit(3, &[(0, 1), (1, 2)], 0).unwrap_err();
        assert_eq!(err, TourError::NotEulerian { vertex: 0 });
    }

    #[test]
    fn test_disconnected_components() {
        let edges = [(0, 1), (0, 1), (2, 3), (2, 3)];
        let err = eulerian_circuit(4, &edges, 0).unwrap_err();
        assert_eq!(err, TourError::NotEulerian { vertex: 2 });
    }

    #[test]
    fn test_isolated_start() {
        let err = eulerian_circuit(3, &[(0, 1), (0, 1)], 2).unwrap_err();
        assert_eq!(err, TourError::NotEulerian { vertex: 2 });
    }
}
