//! Dense symmetric distance matrix.

use crate::error::{AcsError, AcsResult};
use crate::models::City;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Built once from city coordinates and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use acs_tsp::models::City;
/// use acs_tsp::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
///     City::new(2, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix of the given cities.
    ///
    /// Returns [`AcsError::TooFewCities`] for fewer than two cities and
    /// [`AcsError::CityIdMismatch`] if a city's id is not its position.
    pub fn from_cities(cities: &[City]) -> AcsResult<Self> {
        let n = cities.len();
        if n < 2 {
            return Err(AcsError::TooFewCities { count: n });
        }
        if let Some((index, city)) = cities.iter().enumerate().find(|(i, c)| c.id() != *i) {
            return Err(AcsError::CityIdMismatch {
                index,
                id: city.id(),
            });
        }
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Ok(Self { data, size: n })
    }

    /// Computes the distance matrix from parallel coordinate arrays.
    pub fn from_coordinates(xs: &[f64], ys: &[f64]) -> AcsResult<Self> {
        Self::from_cities(&City::from_coordinates(xs, ys)?)
    }

    /// Returns the distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every pair of distinct cities shares a location.
    pub fn is_fully_degenerate(&self) -> bool {
        self.data.iter().all(|&d| d == 0.0)
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
