//! Graph primitives shared by the tour construction algorithms.
//!
//! - [`minimum_spanning_tree`] — Dense Prim's algorithm, O(n²)
//! - [`eulerian_circuit`] — Hierholzer's algorithm on a multigraph edge list, O(V + E)
//! - [`IndexedMinQueue`] — Key-indexed min-heap with O(log n) update and removal

mod euler;
mod frontier;
mod mst;

pub use euler::eulerian_circuit;
pub use frontier::IndexedMinQueue;
pub use mst::{minimum_spanning_tree, SpanningTree};
