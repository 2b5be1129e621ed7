//! ACO construction-and-reinforcement loop.

use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::models::{AlgorithmResult, ClusterAssignment, Tour};

/// One ant's closed tour and its cost.
#[derive(Debug, Clone)]
struct AntTour {
    cities: Vec<usize>,
    cost: f64,
}

/// Ant colony for the clustered (generalized) TSP.
///
/// Owns its pheromone matrix for its whole lifetime; repeated `run` calls
/// keep reinforcing the same trails.
///
/// # Examples
///
/// ```
/// use u_tour::aco::{AcoConfig, AcoGtsp};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::models::ClusterAssignment;
///
/// let dm = DistanceMatrix::from_points(&[
///     (0.0, 0.0), (0.1, 0.0), (5.0, 0.0), (5.0, 0.1), (0.0, 5.0),
/// ]).unwrap();
/// let clusters = ClusterAssignment::new(vec![0, 0, 1, 1, 2]);
/// let config = AcoConfig::default().with_iterations(20).with_seed(42);
///
/// let mut aco = AcoGtsp::new(&dm, config).unwrap();
/// let result = aco.run(&clusters).unwrap();
/// assert_eq!(result.tour.num_visited(), 3);
/// assert_eq!(result.metric("iterations"), Some(20.0));
/// ```
pub struct AcoGtsp<'a> {
    distances: &'a DistanceMatrix,
    config: AcoConfig,
    pheromones: PheromoneMatrix,
}

impl<'a> AcoGtsp<'a> {
    /// Creates a colony with every pheromone entry at 1.0.
    ///
    /// Fails if the configuration is invalid or if any off-diagonal distance
    /// is zero (visibility `1/d` would be infinite).
    pub fn new(distances: &'a DistanceMatrix, config: AcoConfig) -> Result<Self> {
        config.validate()?;
        if distances.min_off_diagonal() <= 0.0 {
            return Err(TourError::invalid_matrix(
                "ant colony requires strictly positive off-diagonal distances",
            ));
        }
        Ok(Self {
            distances,
            pheromones: PheromoneMatrix::new(distances.size(), 1.0),
            config,
        })
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    /// Runs the colony with a generator seeded from `config.seed`, or from
    /// OS entropy when no seed is set.
    pub fn run(&mut self, clusters: &ClusterAssignment) -> Result<AlgorithmResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.run_with_rng(clusters, &mut rng)
    }

    /// Runs the colony drawing all randomness from `rng`.
    ///
    /// Each iteration draws one seed per ant from `rng` before construction,
    /// so the outcome does not depend on whether ants run in parallel.
    ///
    /// `metrics` holds `iterations`. Fails with
    /// [`TourError::InfeasibleSelection`] if an ant gets stuck with clusters
    /// still uncovered. With `evaporation_rate = 1.0` and `alpha > 0` only
    /// the edges of the previous iteration's tours keep any pheromone, so
    /// this can happen on complete instances too.
    pub fn run_with_rng<R: Rng>(
        &mut self,
        clusters: &ClusterAssignment,
        rng: &mut R,
    ) -> Result<AlgorithmResult> {
        self.check_clusters(clusters)?;

        let start_time = Instant::now();
        let mut best: Option<AntTour> = None;

        for iteration in 0..self.config.iterations {
            let seeds: Vec<u64> = (0..self.config.num_ants).map(|_| rng.random()).collect();
            let ants = self.construct_all(&seeds, clusters)?;
            self.reinforce(&ants);

            let mut iteration_best = &ants[0];
            for ant in &ants[1..] {
                if ant.cost < iteration_best.cost {
                    iteration_best = ant;
                }
            }
            if best.as_ref().is_none_or(|b| iteration_best.cost < b.cost) {
                best = Some(iteration_best.clone());
            }

            debug!(
                "aco iteration {iteration}: iteration best {:.3}, global best {:.3}",
                iteration_best.cost,
                best.as_ref().map_or(f64::INFINITY, |b| b.cost)
            );
        }

        let best = best.ok_or_else(|| TourError::invalid_config("no ant tours constructed"))?;
        let elapsed = start_time.elapsed().as_secs_f64();
        info!(
            "aco: cost {:.3}, {} clusters, {elapsed:.4}s",
            best.cost,
            clusters.num_clusters()
        );

        let tour = Tour::new(best.cities)?;
        Ok(AlgorithmResult::new(tour, best.cost, elapsed)
            .with_metric("iterations", self.config.iterations as f64))
    }

    fn check_clusters(&self, clusters: &ClusterAssignment) -> Result<()> {
        if clusters.len() != self.distances.size() {
            return Err(TourError::invalid_clusters(format!(
                "assignment covers {} cities, matrix has {}",
                clusters.len(),
                self.distances.size()
            )));
        }
        if clusters.num_clusters() < 2 {
            return Err(TourError::invalid_clusters(format!(
                "need at least 2 distinct clusters, got {}",
                clusters.num_clusters()
            )));
        }
        Ok(())
    }

    /// Builds one tour per seed against the current, unchanged pheromones.
    fn construct_all(&self, seeds: &[u64], clusters: &ClusterAssignment) -> Result<Vec<AntTour>> {
        let build = |&seed: &u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            construct_tour(
                self.distances,
                &self.pheromones,
                clusters,
                &self.config,
                &mut rng,
            )
        };

        #[cfg(feature = "parallel")]
        let ants = seeds.par_iter().map(build).collect();
        #[cfg(not(feature = "parallel"))]
        let ants = seeds.iter().map(build).collect();

        ants
    }

    /// Evaporation over the whole matrix, then every ant's deposit.
    fn reinforce(&mut self, ants: &[AntTour]) {
        self.pheromones.evaporate(self.config.evaporation_rate);
        for ant in ants {
            if !ant.cost.is_finite() {
                warn!("aco: ant tour {:?} has non-finite cost", ant.cities);
            }
            self.pheromones.deposit_tour(&ant.cities, 1.0 / ant.cost);
        }
    }
}

/// Walks one ant from a random start until every cluster is covered.
fn construct_tour<R: Rng>(
    distances: &DistanceMatrix,
    pheromones: &PheromoneMatrix,
    clusters: &ClusterAssignment,
    config: &AcoConfig,
    rng: &mut R,
) -> Result<AntTour> {
    let n = distances.size();
    let num_clusters = clusters.num_clusters();

    let start = rng.random_range(0..n);
    let mut cities = Vec::with_capacity(num_clusters + 1);
    let mut in_tour = vec![false; n];
    let mut covered = vec![false; num_clusters];

    cities.push(start);
    in_tour[start] = true;
    covered[clusters.dense_index(start)] = true;
    let mut num_covered = 1;

    let mut scores = vec![0.0; n];
    let mut current = start;

    while num_covered < num_clusters {
        let mut total = 0.0;
        for (j, score) in scores.iter_mut().enumerate() {
            *score = if in_tour[j] || covered[clusters.dense_index(j)] {
                0.0
            } else {
                desirability(pheromones.get(current, j), distances.get(current, j), config)
            };
            total += *score;
        }

        let next = roulette(&scores, total, rng).ok_or(TourError::InfeasibleSelection {
            current,
            visited: cities.len(),
        })?;

        cities.push(next);
        in_tour[next] = true;
        covered[clusters.dense_index(next)] = true;
        num_covered += 1;
        current = next;
    }

    cities.push(start);
    let cost = distances.path_cost(&cities);
    Ok(AntTour { cities, cost })
}

/// `tau^alpha * (1/d)^beta`; missing (infinite) edges score zero.
fn desirability(tau: f64, distance: f64, config: &AcoConfig) -> f64 {
    if !distance.is_finite() {
        return 0.0;
    }
    tau.powf(config.alpha) * (1.0 / distance).powf(config.beta)
}

/// Roulette-wheel draw proportional to `scores`.
///
/// Returns `None` when no candidate has a positive score.
fn roulette<R: Rng>(scores: &[f64], total: f64, rng: &mut R) -> Option<usize> {
    if total <= 0.0 || total.is_nan() {
        return None;
    }
    let r = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last = None;
    for (j, &score) in scores.iter().enumerate() {
        if score <= 0.0 {
            continue;
        }
        cumulative += score;
        last = Some(j);
        if r < cumulative {
            return Some(j);
        }
    }
    // Rounding can leave r just above the final cumulative sum.
    last
}
