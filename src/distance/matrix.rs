//! Dense distance matrix.

use crate::error::{Result, TourError};

/// A dense n×n matrix of travel costs stored in row-major order.
///
/// The diagonal is always `+inf` (no self-loops). Off-diagonal entries are
/// non-negative; `+inf` marks a missing edge. Once built the matrix is
/// immutable and algorithms borrow it read-only.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!(dm.get(1, 1).is_infinite());
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// Fails if the data length doesn't match `size * size`, if there are
    /// fewer than two cities, or if any off-diagonal entry is NaN or negative.
    /// Diagonal entries are overwritten with `+inf`.
    pub fn from_data(size: usize, mut data: Vec<f64>) -> Result<Self> {
        if size < 2 {
            return Err(TourError::invalid_matrix(format!(
                "need at least 2 cities, got {size}"
            )));
        }
        if data.len() != size * size {
            return Err(TourError::invalid_matrix(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        for i in 0..size {
            for j in 0..size {
                if i == j {
                    continue;
                }
                let d = data[i * size + j];
                if d.is_nan() {
                    return Err(TourError::invalid_matrix(format!(
                        "distance ({i}, {j}) is NaN"
                    )));
                }
                if d < 0.0 {
                    return Err(TourError::invalid_matrix(format!(
                        "distance ({i}, {j}) is negative: {d}"
                    )));
                }
            }
            data[i * size + i] = f64::INFINITY;
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(TourError::invalid_matrix(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Computes a symmetric Euclidean distance matrix from planar points.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                let d = (dx * dx + dy * dy).sqrt();
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self::from_data(n, data)
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Weight of the undirected edge `{a, b}`, read from the upper triangle.
    pub fn undirected(&self, a: usize, b: usize) -> f64 {
        if a < b {
            self.get(a, b)
        } else {
            self.get(b, a)
        }
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two infinite entries count as equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Smallest off-diagonal entry.
    pub fn min_off_diagonal(&self) -> f64 {
        let mut min = f64::INFINITY;
        for i in 0..self.size {
            for j in 0..self.size {
                if i != j {
                    min = min.min(self.get(i, j));
                }
            }
        }
        min
    }

    /// Sum of consecutive edge weights along `path`.
    ///
    /// Returns 0 for paths with fewer than two cities.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
