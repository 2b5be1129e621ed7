//! Ant Colony Optimization for the clustered (generalized) TSP.
//!
//! Each iteration, every ant starts at a random city and repeatedly picks
//! an unvisited city from an uncovered cluster by roulette selection on
//! `tau^alpha * (1/d)^beta`, until one city per cluster has been visited.
//! After all ants finish, the pheromone matrix evaporates and each ant
//! deposits `1/cost` on the edges it traversed.
//!
//! With the `parallel` feature, ants of one iteration are built
//! concurrently using rayon; the pheromone matrix is read-only until they
//! have all finished.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Pintea, Pop & Chira (2007), "The Generalized Traveling Salesman
//!   Problem solved with Ant Algorithms"

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::AcoGtsp;
