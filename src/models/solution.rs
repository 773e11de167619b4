//! Optimization result record.

use serde::{Deserialize, Serialize};

use super::{ConvergenceTrace, Tour};

/// Outcome of an ACS run.
///
/// `best_tour` is reported starting and ending at city 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcsSolution {
    /// Shortest tour found.
    pub best_tour: Tour,
    /// Length of `best_tour`.
    pub best_length: f64,
    /// Best-so-far length after each iteration.
    pub convergence: ConvergenceTrace,
    /// Initial pheromone level derived from the nearest-neighbor tour.
    pub tau0: f64,
}

impl AcsSolution {
    /// Number of iterations that were run.
    pub fn iterations(&self) -> usize {
        self.convergence.len()
    }
}
