//! City-to-cluster assignment for the generalized TSP.

use serde::{Deserialize, Serialize};

/// Maps each city index to a cluster id.
///
/// Cluster ids need not be contiguous: they are compacted internally to
/// dense indices `0..num_clusters()` in ascending id order.
///
/// # Examples
///
/// ```
/// use u_tour::models::ClusterAssignment;
///
/// let clusters = ClusterAssignment::new(vec![7, 3, 7, 9]);
/// assert_eq!(clusters.len(), 4);
/// assert_eq!(clusters.num_clusters(), 3);
/// assert_eq!(clusters.cluster_of(0), 7);
/// assert_eq!(clusters.dense_index(0), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct ClusterAssignment {
    ids: Vec<usize>,
    dense: Vec<usize>,
    num_clusters: usize,
}

impl ClusterAssignment {
    pub fn new(ids: Vec<usize>) -> Self {
        let mut distinct = ids.clone();
        distinct.sort_unstable();
        distinct.dedup();
        let dense = ids
            .iter()
            .map(|id| distinct.binary_search(id).unwrap_or_default())
            .collect();
        Self {
            ids,
            dense,
            num_clusters: distinct.len(),
        }
    }

    /// Number of cities covered by the assignment.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of distinct cluster ids present.
    pub fn num_clusters(&self) -> usize {
        self.num_clusters
    }

    /// Original cluster id of `city`.
    pub fn cluster_of(&self, city: usize) -> usize {
        self.ids[city]
    }

    /// Compacted cluster index of `city`, in `0..num_clusters()`.
    pub fn dense_index(&self, city: usize) -> usize {
        self.dense[city]
    }

    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// Cities belonging to the cluster with the given original id.
    pub fn members(&self, cluster_id: usize) -> Vec<usize> {
        self.ids
            .iter()
            .enumerate()
            .filter(|&(_, &id)| id == cluster_id)
            .map(|(city, _)| city)
            .collect()
    }
}

impl From<Vec<usize>> for ClusterAssignment {
    fn from(ids: Vec<usize>) -> Self {
        Self::new(ids)
    }
}

impl From<ClusterAssignment> for Vec<usize> {
    fn from(clusters: ClusterAssignment) -> Self {
        clusters.ids
    }
}
