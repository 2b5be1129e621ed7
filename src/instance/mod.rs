//! Random problem instances for benchmarking.
//!
//! Distances are integers drawn uniformly from `[1, 100)`, matching the
//! usual synthetic setup for comparing tour heuristics on complete graphs.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::ClusterAssignment;

const MIN_DISTANCE: u32 = 1;
const MAX_DISTANCE: u32 = 100;

/// Complete directed instance: every ordered pair drawn independently.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tour::instance::random_distances;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let dm = random_distances(5, &mut rng).unwrap();
/// assert_eq!(dm.size(), 5);
/// assert!(dm.get(2, 2).is_infinite());
/// ```
pub fn random_distances<R: Rng>(num_cities: usize, rng: &mut R) -> Result<DistanceMatrix> {
    let data = (0..num_cities * num_cities)
        .map(|_| f64::from(rng.random_range(MIN_DISTANCE..MAX_DISTANCE)))
        .collect();
    DistanceMatrix::from_data(num_cities, data)
}

/// Complete symmetric instance: the upper triangle is mirrored.
pub fn random_symmetric_distances<R: Rng>(
    num_cities: usize,
    rng: &mut R,
) -> Result<DistanceMatrix> {
    let n = num_cities;
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = f64::from(rng.random_range(MIN_DISTANCE..MAX_DISTANCE));
            data[i * n + j] = d;
            data[j * n + i] = d;
        }
    }
    DistanceMatrix::from_data(n, data)
}

/// Assigns cities to `clamp(n / 2, 2, n)` clusters, each used at least once.
pub fn random_clusters<R: Rng>(num_cities: usize, rng: &mut R) -> ClusterAssignment {
    let k = (num_cities / 2).max(2).min(num_cities);
    let mut ids: Vec<usize> = (0..num_cities)
        .map(|city| if city < k { city } else { rng.random_range(0..k) })
        .collect();
    ids.shuffle(rng);
    ClusterAssignment::new(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_distances_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let dm = random_distances(8, &mut rng).expect("valid");
        for i in 0..8 {
            for j in 0..8 {
                let d = dm.get(i, j);
                if i == j {
                    assert!(d.is_infinite());
                } else {
                    assert!((1.0..100.0).contains(&d));
                    assert_eq!(d.fract(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_symmetric_distances() {
        let mut rng = StdRng::seed_from_u64(7);
        let dm = random_symmetric_distances(10, &mut rng).expect("valid");
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_too_small() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_distances(1, &mut rng).is_err());
    }

    #[test]
    fn test_random_clusters_cover_every_id() {
        let mut rng = StdRng::seed_from_u64(3);
        let clusters = random_clusters(10, &mut rng);
        assert_eq!(clusters.len(), 10);
        assert_eq!(clusters.num_clusters(), 5);
        for id in 0..5 {
            assert!(!clusters.members(id).is_empty());
        }
    }

    #[test]
    fn test_random_clusters_small() {
        let mut rng = StdRng::seed_from_u64(3);
        let clusters = random_clusters(3, &mut rng);
        assert_eq!(clusters.num_clusters(), 2);
        let clusters = random_clusters(2, &mut rng);
        assert_eq!(clusters.num_clusters(), 2);
    }

    #[test]
    fn test_seeded_generation_reproducible() {
        let a = random_distances(6, &mut StdRng::seed_from_u64(11)).expect("valid");
        let b = random_distances(6, &mut StdRng::seed_from_u64(11)).expect("valid");
        assert_eq!(a, b);
    }
}
