//! # u-tour
//!
//! Tour construction heuristics over a weighted, complete graph of cities,
//! all returning the same [`AlgorithmResult`](models::AlgorithmResult) so
//! they can be ranked by cost and time.
//!
//! ## Modules
//!
//! - [`distance`] — Validated dense distance matrix
//! - [`models`] — Tour, cluster assignment, and result types
//! - [`graph`] — Minimum spanning tree, Eulerian circuit, indexed priority queue
//! - [`aco`] — Ant Colony Optimization for the clustered (generalized) TSP
//! - [`double_mst`] — Double minimum-spanning-tree 2-approximation
//! - [`glpa`] — Priority-driven frontier search
//! - [`instance`] — Random instance generation
//! - [`comparison`] — Run all three algorithms and rank them

pub mod aco;
pub mod comparison;
pub mod distance;
pub mod double_mst;
pub mod error;
pub mod glpa;
pub mod graph;
pub mod instance;
pub mod models;

pub use error::{Result, TourError};
