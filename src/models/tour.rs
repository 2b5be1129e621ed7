//! Closed tour type.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};

/// An ordered, closed sequence of city indices.
///
/// The first city is repeated as the last element. Every other city appears
/// at most once.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let tour = Tour::close(vec![2, 0, 1]).unwrap();
/// assert_eq!(tour.cities(), &[2, 0, 1, 2]);
/// assert_eq!(tour.start(), 2);
/// assert_eq!(tour.num_visited(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TourRepr")]
pub struct Tour {
    cities: Vec<usize>,
}

/// Unvalidated wire form of [`Tour`].
#[derive(Deserialize)]
struct TourRepr {
    cities: Vec<usize>,
}

impl TryFrom<TourRepr> for Tour {
    type Error = TourError;

    fn try_from(repr: TourRepr) -> Result<Self> {
        Tour::new(repr.cities)
    }
}

impl Tour {
    /// Builds a tour from a visiting order, appending the start city.
    pub fn close(mut order: Vec<usize>) -> Result<Self> {
        let first = *order
            .first()
            .ok_or_else(|| TourError::invalid_tour("empty visiting order"))?;
        order.push(first);
        Self::new(order)
    }

    /// Wraps an already closed city sequence after validating it.
    pub fn new(cities: Vec<usize>) -> Result<Self> {
        if cities.len() < 2 {
            return Err(TourError::invalid_tour(format!(
                "need at least 2 entries, got {}",
                cities.len()
            )));
        }
        if cities.first() != cities.last() {
            return Err(TourError::invalid_tour("first and last city differ"));
        }
        let body = &cities[..cities.len() - 1];
        let mut seen = HashSet::with_capacity(body.len());
        for &c in body {
            if !seen.insert(c) {
                return Err(TourError::invalid_tour(format!("city {c} visited twice")));
            }
        }
        Ok(Self { cities })
    }

    /// Full closed sequence, including the repeated start city.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Visiting order without the closing repeat.
    pub fn visited(&self) -> &[usize] {
        &self.cities[..self.cities.len() - 1]
    }

    pub fn start(&self) -> usize {
        self.cities[0]
    }

    /// Number of distinct cities on the tour.
    pub fn num_visited(&self) -> usize {
        self.cities.len() - 1
    }

    /// Sum of consecutive edge weights.
    pub fn cost(&self, distances: &DistanceMatrix) -> f64 {
        distances.path_cost(&self.cities)
    }

    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }
}
