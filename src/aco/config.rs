//! ACO configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// Configuration for the clustered-TSP ant colony.
///
/// # Defaults
///
/// ```
/// use u_tour::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 10);
/// assert_eq!(config.iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_beta(3.0)
///     .with_evaporation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Ants constructing a tour per iteration.
    pub num_ants: usize,

    /// Pheromone exponent. 0 ignores learned trails entirely.
    pub alpha: f64,

    /// Visibility (inverse distance) exponent. 0 ignores edge length.
    pub beta: f64,

    /// Fraction of every pheromone entry removed each iteration, in [0, 1].
    ///
    /// At 1.0 only edges deposited in the latest iteration keep pheromone;
    /// with `alpha > 0` every other edge scores zero and ants may fail with
    /// [`TourError::InfeasibleSelection`](crate::error::TourError::InfeasibleSelection).
    pub evaporation_rate: f64,

    /// Number of construction-and-reinforcement rounds.
    pub iterations: usize,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            iterations: 100,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            return Err(TourError::invalid_config("num_ants must be positive"));
        }
        if self.iterations == 0 {
            return Err(TourError::invalid_config("iterations must be positive"));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(TourError::invalid_config(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(TourError::invalid_config(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(TourError::invalid_config(format!(
                "evaporation_rate must be in [0, 1], got {}",
                self.evaporation_rate
            )));
        }
        Ok(())
    }
}
