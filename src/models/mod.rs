//! Domain model types for the traveling salesman problem.
//!
//! Provides cities with fixed coordinates, closed tours, the per-iteration
//! convergence trace, and the result record returned by the optimizer.

mod city;
mod solution;
mod tour;
mod trace;

pub use city::{random_cities, City};
pub use solution::AcsSolution;
pub use tour::Tour;
pub use trace::ConvergenceTrace;
