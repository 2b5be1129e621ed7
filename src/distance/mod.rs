//! Distance matrices.
//!
//! Provides the dense, validated distance matrix every algorithm borrows.

mod matrix;

pub use matrix::DistanceMatrix;
