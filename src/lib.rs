//! # acs-tsp
//!
//! Ant Colony System (ACS) solver for the symmetric Euclidean traveling
//! salesman problem.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Tour, ConvergenceTrace, AcsSolution)
//! - [`distance`] — Euclidean distance matrix
//! - [`evaluation`] — Tour length and Hamiltonian-cycle checks
//! - [`constructive`] — Nearest-neighbor construction and pheromone seeding
//! - [`pheromone`] — Pheromone matrix with the ACS local and global rules
//! - [`colony`] — Selection rule, tour construction, and the optimization loop
//! - [`local_search`] — Optional 2-opt polishing
//! - [`report`] — Output bundle for external plotting
//! - [`error`] — Error type

pub mod colony;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod pheromone;
pub mod report;

pub use colony::{AcsConfig, AcsRunner};
pub use error::{AcsError, AcsResult};
