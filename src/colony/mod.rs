//! Ant Colony System.
//!
//! - [`AcsConfig`] — Run parameters and reinforcement strategy
//! - [`select_next_city`] — Pseudo-random-proportional selection rule
//! - [`construct_tours`] — One construction pass of the whole population
//! - [`AcsRunner`] — Optimization loop
//!
//! # Reference
//!
//! Dorigo, M. & Gambardella, L.M. (1997). "Ant Colony System: a cooperative
//! learning approach to the traveling salesman problem", *IEEE Transactions on
//! Evolutionary Computation* 1(1), 53-66.

mod config;
mod construction;
mod runner;
mod selector;

pub use config::{AcsConfig, UpdateStrategy};
pub use construction::{construct_tours, ConstructionParams};
pub use runner::AcsRunner;
pub use selector::{desirability, select_next_city};
