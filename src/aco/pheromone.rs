//! Pheromone trail matrix.

/// A dense n×n matrix of pheromone levels, row-major.
///
/// Entries start at a uniform level and only change through the two batch
/// updates [`evaporate`](Self::evaporate) and [`deposit_tour`](Self::deposit_tour).
/// Deposits are directed: only the traversed direction `(u, v)` is reinforced.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates an n×n matrix with every entry set to `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            data: vec![initial; size * size],
            size,
        }
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for tau in &mut self.data {
            *tau *= keep;
        }
    }

    /// Adds `amount` to each consecutive edge of `tour`.
    pub fn deposit_tour(&mut self, tour: &[usize], amount: f64) {
        for w in tour.windows(2) {
            self.data[w[0] * self.size + w[1]] += amount;
        }
    }

    /// Smallest entry in the matrix.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }
}
