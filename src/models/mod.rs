//! Domain model types shared by the tour construction algorithms.
//!
//! Provides the closed tour representation, the city-to-cluster assignment
//! used by the generalized TSP, and the uniform result record every
//! algorithm returns.

mod cluster;
mod result;
mod tour;

pub use cluster::ClusterAssignment;
pub use result::{AlgorithmResult, Metrics};
pub use tour::Tour;
