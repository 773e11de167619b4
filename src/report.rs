//! Run report for external plotting.
//!
//! Bundles the instance coordinates with the optimizer output so a
//! visualizer can draw the convergence curve and the best tour without
//! re-running anything.

use serde::{Deserialize, Serialize};

use crate::error::AcsResult;
use crate::models::{AcsSolution, City};

/// Coordinates plus the solution of one run.
///
/// # Examples
///
/// ```
/// use acs_tsp::colony::{AcsConfig, AcsRunner};
/// use acs_tsp::models::City;
/// use acs_tsp::report::RunReport;
///
/// let cities = City::from_coordinates(&[0.0, 3.0], &[0.0, 4.0]).unwrap();
/// let config = AcsConfig::default().with_max_iterations(3).with_seed(1);
/// let solution = AcsRunner::run(&cities, &config).unwrap();
///
/// let report = RunReport::new(cities, solution);
/// assert_eq!(report.tour_path(), vec![(0.0, 0.0), (3.0, 4.0), (0.0, 0.0)]);
/// assert_eq!(report.convergence_points().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Instance cities.
    pub cities: Vec<City>,
    /// Optimizer output.
    pub solution: AcsSolution,
}

impl RunReport {
    /// Creates a report.
    pub fn new(cities: Vec<City>, solution: AcsSolution) -> Self {
        Self { cities, solution }
    }

    /// `(x, y)` polyline of the best tour, closing point included.
    pub fn tour_path(&self) -> Vec<(f64, f64)> {
        self.solution
            .best_tour
            .cities()
            .iter()
            .filter_map(|&id| self.cities.get(id))
            .map(|c| (c.x(), c.y()))
            .collect()
    }

    /// `(iteration, best-so-far length)` pairs for the convergence curve.
    pub fn convergence_points(&self) -> Vec<(usize, f64)> {
        self.solution
            .convergence
            .values()
            .iter()
            .copied()
            .enumerate()
            .collect()
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> AcsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a report previously written by [`RunReport::to_json`].
    pub fn from_json(json: &str) -> AcsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
