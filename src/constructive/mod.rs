//! Constructive heuristics.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor tour, O(n²)
//! - [`nearest_neighbor_seed`] — Nearest-neighbor tour from a random start,
//!   used to calibrate the initial pheromone level
//! - [`initial_pheromone`] — `tau0 = 1 / (L_nn * n)`

mod nearest_neighbor;

pub use nearest_neighbor::{initial_pheromone, nearest_neighbor_seed, nearest_neighbor_tour};
