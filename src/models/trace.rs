//! Convergence trace.

use serde::{Deserialize, Serialize};

/// Best-so-far tour length recorded at the end of every iteration.
///
/// Append-only. Because the best length only changes on strict improvement,
/// the recorded values never increase.
///
/// # Examples
///
/// ```
/// use acs_tsp::models::ConvergenceTrace;
///
/// let mut trace = ConvergenceTrace::new();
/// trace.record(10.0);
/// trace.record(8.5);
/// trace.record(8.5);
/// assert_eq!(trace.len(), 3);
/// assert_eq!(trace.last(), Some(8.5));
/// assert!(trace.is_non_increasing());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceTrace {
    values: Vec<f64>,
}

impl ConvergenceTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trace with room for `iterations` entries.
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            values: Vec::with_capacity(iterations),
        }
    }

    /// Appends the best-so-far length of one iteration.
    pub fn record(&mut self, best_length: f64) {
        self.values.push(best_length);
    }

    /// Recorded values, one per iteration.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of recorded iterations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent value.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns `true` if no recorded value exceeds its predecessor.
    pub fn is_non_increasing(&self) -> bool {
        self.values.windows(2).all(|w| w[1] <= w[0])
    }

    /// First iteration (0-based) whose value equals the final one.
    pub fn iteration_of_best(&self) -> Option<usize> {
        let last = self.last()?;
        self.values.iter().position(|&v| v == last)
    }
}
