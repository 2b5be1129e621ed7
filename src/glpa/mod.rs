//! Priority-driven frontier search (GLPA).
//!
//! An incremental-search-inspired heuristic: cities carry `(g, rhs)`
//! estimates, and the lowest `min(g, rhs)` city is finalized next. The
//! visiting order is the order in which cities are finalized, closed back
//! to the start city. Finalized cities are never revisited or corrected.
//!
//! # Complexity
//!
//! O(n³) on a dense matrix: each finalization recomputes `rhs` for up to n
//! neighbors, each over n predecessors.

mod state;

use std::time::Instant;

use log::{info, trace};

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::models::{AlgorithmResult, Tour};
use state::FrontierState;

/// Frontier search over a borrowed distance matrix.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::glpa::Glpa;
///
/// let inf = f64::INFINITY;
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![inf, 1.0, 5.0],
///     vec![1.0, inf, 1.0],
///     vec![5.0, 1.0, inf],
/// ]).unwrap();
///
/// let result = Glpa::new(&dm).run(0).unwrap();
/// assert_eq!(result.tour.cities(), &[0, 1, 2, 0]);
/// assert_eq!(result.metric("iterations"), Some(3.0));
/// ```
pub struct Glpa<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> Glpa<'a> {
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Runs the search with `start_city` as the goal.
    ///
    /// `metrics` holds `iterations`, the number of cities finalized.
    ///
    /// Fails with [`TourError::DisconnectedGraph`] if the queue drains before
    /// every city is finalized.
    pub fn run(&self, start_city: usize) -> Result<AlgorithmResult> {
        let n = self.distances.size();
        if start_city >= n {
            return Err(TourError::invalid_config(format!(
                "start city {start_city} out of range for {n} cities"
            )));
        }

        let start_time = Instant::now();
        let mut state = FrontierState::new(n, start_city);
        let mut finalized = vec![false; n];
        let mut order = Vec::with_capacity(n + 1);

        while let Some(current) = state.pop() {
            if finalized[current] {
                continue;
            }
            finalized[current] = true;
            order.push(current);
            trace!("glpa: finalized city {current} at priority {}", state.priority(current));

            state.settle(current);
            for neighbor in 0..n {
                if finalized[neighbor] || !self.distances.get(current, neighbor).is_finite() {
                    continue;
                }
                state.update(neighbor, self.distances);
            }
        }

        let iterations = order.len();
        if iterations < n {
            return Err(TourError::DisconnectedGraph {
                reached: iterations,
                total: n,
            });
        }

        let tour = Tour::close(order)?;
        let cost = tour.cost(self.distances);
        let elapsed = start_time.elapsed().as_secs_f64();
        info!("glpa: cost {cost:.3}, {iterations} cities finalized, {elapsed:.4}s");

        Ok(AlgorithmResult::new(tour, cost, elapsed)
            .with_metric("iterations", iterations as f64))
    }
}
