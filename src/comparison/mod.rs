//! Side-by-side comparison of the three tour heuristics.
//!
//! Runs ACO_GTSP, Double-MST, and GLPA on one instance and ranks them by
//! tour cost and by wall-clock time. Presentation (printing, plotting)
//! is left to the caller.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::aco::{AcoConfig, AcoGtsp};
use crate::distance::DistanceMatrix;
use crate::double_mst::DoubleMst;
use crate::error::Result;
use crate::glpa::Glpa;
use crate::models::{AlgorithmResult, ClusterAssignment};

/// The algorithms being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    AcoGtsp,
    DoubleMst,
    Glpa,
}

impl AlgorithmKind {
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::AcoGtsp => "ACO",
            AlgorithmKind::DoubleMst => "Double-MST",
            AlgorithmKind::Glpa => "Graph-Based",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Instance size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    /// Up to 20 cities.
    Small,
    /// 21 to 100 cities.
    Medium,
    /// More than 100 cities.
    Large,
}

impl SizeClass {
    pub fn from_num_cities(num_cities: usize) -> Self {
        match num_cities {
            0..=20 => SizeClass::Small,
            21..=100 => SizeClass::Medium,
            _ => SizeClass::Large,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeClass::Small => "Small",
            SizeClass::Medium => "Medium",
            SizeClass::Large => "Large",
        };
        f.write_str(name)
    }
}

/// Results of every algorithm on one instance, in run order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub num_cities: usize,
    pub size_class: SizeClass,
    pub entries: Vec<(AlgorithmKind, AlgorithmResult)>,
}

impl Comparison {
    /// Algorithm with the lowest tour cost; the earlier entry wins ties.
    pub fn best_by_cost(&self) -> Option<&(AlgorithmKind, AlgorithmResult)> {
        self.best_by(|r| r.cost)
    }

    /// Algorithm with the shortest elapsed time; the earlier entry wins ties.
    pub fn best_by_time(&self) -> Option<&(AlgorithmKind, AlgorithmResult)> {
        self.best_by(|r| r.elapsed_time)
    }

    pub fn get(&self, kind: AlgorithmKind) -> Option<&AlgorithmResult> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, result)| result)
    }

    fn best_by(
        &self,
        key: impl Fn(&AlgorithmResult) -> f64,
    ) -> Option<&(AlgorithmKind, AlgorithmResult)> {
        let mut best: Option<&(AlgorithmKind, AlgorithmResult)> = None;
        for entry in &self.entries {
            if best.is_none_or(|b| key(&entry.1) < key(&b.1)) {
                best = Some(entry);
            }
        }
        best
    }
}

/// Runs ACO_GTSP, Double-MST, and GLPA (from city 0) on the same instance.
///
/// The first algorithm failure is returned as-is.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tour::aco::AcoConfig;
/// use u_tour::comparison::{run_comparison, SizeClass};
/// use u_tour::instance::{random_clusters, random_distances};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let dm = random_distances(10, &mut rng).unwrap();
/// let clusters = random_clusters(10, &mut rng);
/// let config = AcoConfig::default().with_iterations(10).with_seed(1);
///
/// let comparison = run_comparison(&dm, &clusters, config).unwrap();
/// assert_eq!(comparison.size_class, SizeClass::Small);
/// assert_eq!(comparison.entries.len(), 3);
/// assert!(comparison.best_by_cost().is_some());
/// ```
pub fn run_comparison(
    distances: &DistanceMatrix,
    clusters: &ClusterAssignment,
    aco_config: AcoConfig,
) -> Result<Comparison> {
    let aco = AcoGtsp::new(distances, aco_config)?.run(clusters)?;
    let double_mst = DoubleMst::new(distances).run()?;
    let glpa = Glpa::new(distances).run(0)?;

    let comparison = Comparison {
        num_cities: distances.size(),
        size_class: SizeClass::from_num_cities(distances.size()),
        entries: vec![
            (AlgorithmKind::AcoGtsp, aco),
            (AlgorithmKind::DoubleMst, double_mst),
            (AlgorithmKind::Glpa, glpa),
        ],
    };

    if let (Some((by_cost, _)), Some((by_time, _))) =
        (comparison.best_by_cost(), comparison.best_by_time())
    {
        info!(
            "comparison ({} cities, {}): best cost {by_cost}, best time {by_time}",
            comparison.num_cities, comparison.size_class
        );
    }

    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tour;

    fn entry(kind: AlgorithmKind, cost: f64, time: f64) -> (AlgorithmKind, AlgorithmResult) {
        let tour = Tour::close(vec![0, 1]).expect("valid");
        (kind, AlgorithmResult::new(tour, cost, time))
    }

    #[test]
    fn test_size_class() {
        assert_eq!(SizeClass::from_num_cities(10), SizeClass::Small);
        assert_eq!(SizeClass::from_num_cities(20), SizeClass::Small);
        assert_eq!(SizeClass::from_num_cities(21), SizeClass::Medium);
        assert_eq!(SizeClass::from_num_cities(100), SizeClass::Medium);
        assert_eq!(SizeClass::from_num_cities(200), SizeClass::Large);
    }

    #[test]
    fn test_names() {
        assert_eq!(AlgorithmKind::AcoGtsp.to_string(), "ACO");
        assert_eq!(AlgorithmKind::DoubleMst.to_string(), "Double-MST");
        assert_eq!(AlgorithmKind::Glpa.to_string(), "Graph-Based");
    }

    #[test]
    fn test_best_by_cost_and_time() {
        let comparison = Comparison {
            num_cities: 2,
            size_class: SizeClass::Small,
            entries: vec![
                entry(AlgorithmKind::AcoGtsp, 10.0, 0.5),
                entry(AlgorithmKind::DoubleMst, 8.0, 0.1),
                entry(AlgorithmKind::Glpa, 8.0, 0.01),
            ],
        };
        assert_eq!(
            comparison.best_by_cost().map(|(k, _)| *k),
            Some(AlgorithmKind::DoubleMst)
        );
        assert_eq!(
            comparison.best_by_time().map(|(k, _)| *k),
            Some(AlgorithmKind::Glpa)
        );
        assert!(comparison.get(AlgorithmKind::AcoGtsp).is_some());
    }

    #[test]
    fn test_empty_comparison() {
        let comparison = Comparison {
            num_cities: 0,
            size_class: SizeClass::Small,
            entries: vec![],
        };
        assert!(comparison.best_by_cost().is_none());
        assert!(comparison.get(AlgorithmKind::Glpa).is_none());
    }

    #[test]
    fn test_run_comparison_on_points() {
        let dm = DistanceMatrix::from_points(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.5, 2.0),
        ])
        .expect("valid");
        let clusters = ClusterAssignment::new(vec![0, 0, 1, 1, 2]);
        let config = AcoConfig::default().with_iterations(5).with_seed(3);
        let comparison = run_comparison(&dm, &clusters, config).expect("all succeed");

        let kinds: Vec<AlgorithmKind> = comparison.entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                AlgorithmKind::AcoGtsp,
                AlgorithmKind::DoubleMst,
                AlgorithmKind::Glpa
            ]
        );
        for (_, result) in &comparison.entries {
            assert!((result.cost - result.tour.cost(&dm)).abs() < 1e-10);
        }
    }
}
