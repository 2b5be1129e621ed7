//! Error type shared by every algorithm in the crate.

use thiserror::Error as ThisError;

/// Failures reported by matrix construction, validation, and the tour
/// construction algorithms.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum TourError {
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid cluster assignment: {0}")]
    InvalidClusters(String),
    #[error("invalid tour: {0}")]
    InvalidTour(String),
    /// Every candidate scored zero during roulette selection.
    #[error("infeasible selection: no legal next city from {current} after visiting {visited} cities")]
    InfeasibleSelection { current: usize, visited: usize },
    #[error("disconnected graph: reached {reached} of {total} cities")]
    DisconnectedGraph { reached: usize, total: usize },
    #[error("multigraph is not eulerian at vertex {vertex}")]
    NotEulerian { vertex: usize },
}

pub type Result<T> = std::result::Result<T, TourError>;

impl TourError {
    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_clusters(message: impl Into<String>) -> Self {
        Self::InvalidClusters(message.into())
    }

    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }
}
