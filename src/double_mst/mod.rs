//! Double minimum-spanning-tree approximation.
//!
//! 1. Build a minimum spanning tree over all cities.
//! 2. Double every tree edge so every vertex has even degree.
//! 3. Walk an Eulerian circuit of the doubled multigraph.
//! 4. Shortcut the walk: keep the first occurrence of each city, then close.
//!
//! On metric instances the resulting tour costs at most twice the MST
//! weight, and therefore at most twice the optimal tour.
//!
//! # Complexity
//!
//! O(n²), dominated by the dense MST.
//!
//! # Reference
//!
//! Rosenkrantz, Stearns & Lewis (1977), "An analysis of several heuristics
//! for the traveling salesman problem"

use std::time::Instant;

use log::info;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::graph::{eulerian_circuit, minimum_spanning_tree, SpanningTree};
use crate::models::{AlgorithmResult, Tour};

/// Double-tree tour construction over a borrowed distance matrix.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::double_mst::DoubleMst;
///
/// let inf = f64::INFINITY;
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![inf, 1.0, 2.0, 2.0],
///     vec![1.0, inf, 2.0, 1.0],
///     vec![2.0, 2.0, inf, 1.0],
///     vec![2.0, 1.0, 1.0, inf],
/// ]).unwrap();
///
/// let result = DoubleMst::new(&dm).run().unwrap();
/// assert_eq!(result.metric("mst_weight"), Some(3.0));
/// assert!(result.cost <= 6.0);
/// ```
pub struct DoubleMst<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> DoubleMst<'a> {
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Builds a tour starting at city 0.
    ///
    /// `metrics` holds `mst_weight`, the total weight of the undoubled tree.
    pub fn run(&self) -> Result<AlgorithmResult> {
        let start_time = Instant::now();

        let tree = minimum_spanning_tree(self.distances)?;
        let circuit = eulerian_circuit(tree.num_vertices(), &doubled_edges(&tree), 0)?;
        let tour = shortcut(&circuit, tree.num_vertices())?;
        let cost = tour.cost(self.distances);

        let elapsed = start_time.elapsed().as_secs_f64();
        info!(
            "double-mst: cost {cost:.3}, mst weight {:.3}, {elapsed:.4}s",
            tree.total_weight()
        );

        Ok(AlgorithmResult::new(tour, cost, elapsed)
            .with_metric("mst_weight", tree.total_weight()))
    }
}

/// Every tree edge listed twice.
fn doubled_edges(tree: &SpanningTree) -> Vec<(usize, usize)> {
    tree.edges()
        .iter()
        .flat_map(|&(a, b, _)| [(a, b), (a, b)])
        .collect()
}

/// Keeps the first occurrence of each city in walk order and closes the cycle.
fn shortcut(walk: &[usize], num_cities: usize) -> Result<Tour> {
    let mut seen = vec![false; num_cities];
    let mut order = Vec::with_capacity(num_cities);
    for &city in walk {
        if !seen[city] {
            seen[city] = true;
            order.push(city);
        }
    }
    Tour::close(order)
}
