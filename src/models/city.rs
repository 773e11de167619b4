//! City type and demo coordinate generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{AcsError, AcsResult};

/// A city in a TSP instance.
///
/// Cities are identified by their position `0..N-1` in the instance and carry
/// immutable planar coordinates.
///
/// # Examples
///
/// ```
/// use acs_tsp::models::City;
///
/// let a = City::new(0, 0.0, 0.0);
/// let b = City::new(1, 3.0, 4.0);
/// assert_eq!(b.id(), 1);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Builds cities from parallel coordinate arrays.
    ///
    /// Rejects arrays of different length, fewer than two cities, and
    /// non-finite coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use acs_tsp::models::City;
    ///
    /// let cities = City::from_coordinates(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    /// assert_eq!(cities.len(), 2);
    /// assert!(City::from_coordinates(&[0.0], &[0.0]).is_err());
    /// ```
    pub fn from_coordinates(xs: &[f64], ys: &[f64]) -> AcsResult<Vec<City>> {
        if xs.len() != ys.len() {
            return Err(AcsError::CoordinateLengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(AcsError::TooFewCities { count: xs.len() });
        }
        xs.iter()
            .zip(ys)
            .enumerate()
            .map(|(i, (&x, &y))| {
                if x.is_finite() && y.is_finite() {
                    Ok(City::new(i, x, y))
                } else {
                    Err(AcsError::NonFiniteCoordinate { index: i })
                }
            })
            .collect()
    }

    /// City index.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Generates `n` cities with coordinates drawn uniformly from `[min, max)`.
///
/// Used to produce demo input; the optimizer itself never calls it.
pub fn random_cities<R: Rng>(n: usize, min: f64, max: f64, rng: &mut R) -> Vec<City> {
    (0..n)
        .map(|i| {
            let x = rng.random_range(min..max);
            let y = rng.random_range(min..max);
            City::new(i, x, y)
        })
        .collect()
}
