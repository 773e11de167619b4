//! Distance matrix.
//!
//! Provides the dense symmetric Euclidean distance matrix shared by every
//! stage of the solver.

mod matrix;

pub use matrix::DistanceMatrix;
