//! Per-city `(g, rhs)` bookkeeping and the inconsistency queue.

use crate::distance::DistanceMatrix;
use crate::graph::IndexedMinQueue;

/// Frontier state for the priority-driven search.
///
/// `g` is the settled cost estimate and `rhs` the one-step lookahead. A city
/// is locally consistent when `g == rhs`; the queue holds exactly the
/// inconsistent cities, keyed by `min(g, rhs)`.
#[derive(Debug, Clone)]
pub(super) struct FrontierState {
    g: Vec<f64>,
    rhs: Vec<f64>,
    goal: usize,
    queue: IndexedMinQueue,
}

impl FrontierState {
    /// Seeds the goal city with `rhs = 0` and queues it.
    pub(super) fn new(num_cities: usize, goal: usize) -> Self {
        let mut state = Self {
            g: vec![f64::INFINITY; num_cities],
            rhs: vec![f64::INFINITY; num_cities],
            goal,
            queue: IndexedMinQueue::new(num_cities),
        };
        state.rhs[goal] = 0.0;
        let priority = state.priority(goal);
        state.queue.push_or_update(goal, priority);
        state
    }

    pub(super) fn priority(&self, city: usize) -> f64 {
        self.g[city].min(self.rhs[city])
    }

    pub(super) fn is_consistent(&self, city: usize) -> bool {
        self.g[city] == self.rhs[city]
    }

    pub(super) fn pop(&mut self) -> Option<usize> {
        self.queue.pop().map(|(city, _)| city)
    }

    /// Declares `city` locally consistent.
    pub(super) fn settle(&mut self, city: usize) {
        self.g[city] = self.rhs[city];
    }

    /// Recomputes `rhs` of `city` from every predecessor with a finite edge
    /// and requeues it if it became inconsistent. The goal's `rhs` is fixed.
    pub(super) fn update(&mut self, city: usize, distances: &DistanceMatrix) {
        if city != self.goal {
            self.rhs[city] = (0..distances.size())
                .map(|u| (u, distances.get(u, city)))
                .filter(|&(_, d)| d.is_finite())
                .map(|(u, d)| self.g[u] + d)
                .fold(f64::INFINITY, f64::min);
        }
        self.queue.remove(city);
        if !self.is_consistent(city) {
            let priority = self.priority(city);
            self.queue.push_or_update(city, priority);
        }
    }

    #[cfg(test)]
    pub(super) fn is_queued(&self, city: usize) -> bool {
        self.queue.contains(city)
    }

    #[cfg(test)]
    pub(super) fn g(&self, city: usize) -> f64 {
        self.g[city]
    }

    #[cfg(test)]
    pub(super) fn rhs(&self, city: usize) -> f64 {
        self.rhs[city]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn test_new_seeds_goal() {
        let mut state = FrontierState::new(3, 1);
        assert_eq!(state.rhs(1), 0.0);
        assert!(state.g(1).is_infinite());
        assert!(!state.is_consistent(1));
        assert!(state.is_consistent(0));
        assert_eq!(state.pop(), Some(1));
        assert_eq!(state.pop(), None);
    }

    #[test]
    fn test_update_uses_settled_predecessors() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![INF, 2.0, 7.0],
            vec![2.0, INF, 3.0],
            vec![7.0, 3.0, INF],
        ])
        .expect("valid");
        let mut state = FrontierState::new(3, 0);
        state.pop();
        state.settle(0);
        state.update(2, &dm);
        assert_eq!(state.rhs(2), 7.0);
        assert!(state.is_queued(2));
        assert_eq!(state.priority(2), 7.0);
    }

    #[test]
    fn test_update_without_settled_neighbors_stays_consistent() {
        let dm = DistanceMatrix::from_rows(vec![vec![INF, 1.0], vec![1.0, INF]]).expect("valid");
        let mut state = FrontierState::new(2, 0);
        // Goal not settled yet, so every g is infinite.
        state.update(1, &dm);
        assert!(state.rhs(1).is_infinite());
        assert!(state.is_consistent(1));
        assert!(!state.is_queued(1));
    }

    #[test]
    fn test_goal_rhs_fixed() {
        let dm = DistanceMatrix::from_rows(vec![vec![INF, 1.0], vec![1.0, INF]]).expect("valid");
        let mut state = FrontierState::new(2, 0);
        state.update(0, &dm);
        assert_eq!(state.rhs(0), 0.0);
        assert!(state.is_queued(0));
    }
}
