//! Property tests over random instances.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tour::aco::{AcoConfig, AcoGtsp};
use u_tour::distance::DistanceMatrix;
use u_tour::double_mst::DoubleMst;
use u_tour::glpa::Glpa;
use u_tour::instance::{random_clusters, random_distances, random_symmetric_distances};

/// Kruskal with union-find, independent of the Prim implementation.
fn kruskal_weight(dm: &DistanceMatrix) -> f64 {
    let n = dm.size();
    let mut edges: Vec<(f64, usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .map(|(i, j)| (dm.undirected(i, j), i, j))
        .collect();
    edges.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut parent: Vec<usize> = (0..n).collect();
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    let mut total = 0.0;
    for (w, a, b) in edges {
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        if ra != rb {
            parent[ra] = rb;
            total += w;
        }
    }
    total
}

fn assert_closed_simple(cities: &[usize], n: usize) {
    assert!(cities.len() >= 2);
    assert_eq!(cities.first(), cities.last());
    let body = &cities[..cities.len() - 1];
    let mut seen = vec![false; n];
    for &c in body {
        assert!(c < n);
        assert!(!seen[c], "city {c} visited twice");
        seen[c] = true;
    }
}

fn distinct_points() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::hash_set((0u32..200, 0u32..200), 2..12).prop_map(|set| {
        set.into_iter()
            .map(|(x, y)| (f64::from(x), f64::from(y)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn double_mst_within_twice_mst_on_metric(points in distinct_points()) {
        let dm = DistanceMatrix::from_points(&points).unwrap();
        let result = DoubleMst::new(&dm).run().unwrap();
        let mst_weight = result.metric("mst_weight").unwrap();

        assert_closed_simple(result.tour.cities(), dm.size());
        prop_assert_eq!(result.tour.num_visited(), dm.size());
        prop_assert!((mst_weight - kruskal_weight(&dm)).abs() < 1e-6);
        prop_assert!(result.cost <= 2.0 * mst_weight + 1e-6);
        prop_assert!((result.cost - dm.path_cost(result.tour.cities())).abs() < 1e-9);
    }

    #[test]
    fn double_mst_weight_matches_kruskal(seed in any::<u64>(), n in 2usize..15) {
        let dm = random_symmetric_distances(n, &mut StdRng::seed_from_u64(seed)).unwrap();
        let result = DoubleMst::new(&dm).run().unwrap();
        prop_assert!((result.metric("mst_weight").unwrap() - kruskal_weight(&dm)).abs() < 1e-9);
    }

    #[test]
    fn glpa_finalizes_every_city_once(seed in any::<u64>(), n in 2usize..15, start in 0usize..15) {
        let dm = random_distances(n, &mut StdRng::seed_from_u64(seed)).unwrap();
        let start = start % n;
        let result = Glpa::new(&dm).run(start).unwrap();

        assert_closed_simple(result.tour.cities(), n);
        prop_assert_eq!(result.tour.start(), start);
        prop_assert_eq!(result.metric("iterations"), Some(result.tour.num_visited() as f64));
        prop_assert_eq!(result.tour.num_visited(), n);
        prop_assert!((result.cost - dm.path_cost(result.tour.cities())).abs() < 1e-9);
    }

    #[test]
    fn aco_visits_one_city_per_cluster(seed in any::<u64>(), n in 2usize..12) {
        let mut rng = StdRng::seed_from_u64(seed);
        let dm = random_distances(n, &mut rng).unwrap();
        let clusters = random_clusters(n, &mut rng);
        let config = AcoConfig::default().with_num_ants(3).with_iterations(4);

        let mut aco = AcoGtsp::new(&dm, config).unwrap();
        let result = aco.run_with_rng(&clusters, &mut rng).unwrap();

        assert_closed_simple(result.tour.cities(), n);
        let mut ids: Vec<usize> = result
            .tour
            .visited()
            .iter()
            .map(|&c| clusters.cluster_of(c))
            .collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
        prop_assert_eq!(ids.len(), clusters.num_clusters());
        prop_assert!((result.cost - dm.path_cost(result.tour.cities())).abs() < 1e-9);
        prop_assert!(aco.pheromones().min_value() >= 0.0);
    }

    #[test]
    fn aco_pheromones_non_negative_under_full_evaporation(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let dm = random_distances(6, &mut rng).unwrap();
        let clusters = random_clusters(6, &mut rng);
        let config = AcoConfig::default()
            .with_num_ants(4)
            .with_iterations(3)
            .with_evaporation_rate(0.99);

        let mut aco = AcoGtsp::new(&dm, config).unwrap();
        aco.run_with_rng(&clusters, &mut rng).unwrap();
        prop_assert!(aco.pheromones().min_value() >= 0.0);
    }
}
