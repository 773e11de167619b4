//! Pheromone model.
//!
//! A symmetric matrix of pheromone intensities, mutated by the ACS local
//! update during construction and by the global update once per iteration.

mod matrix;

pub use matrix::{PheromoneMatrix, PHEROMONE_FLOOR};
