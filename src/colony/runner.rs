//! ACS optimization loop.
//!
//! # Algorithm
//!
//! 1. Build the distance matrix and run nearest-neighbor once from a random
//!    city to obtain `tau0 = 1 / (L_nn * n)`; fill the pheromone matrix with it.
//! 2. Draw one start city per ant; ants keep their start for the whole run.
//! 3. Each iteration: construct one tour per ant (local updates included),
//!    optionally apply 2-opt, evaluate, keep the best tour on strict
//!    improvement, record the best-so-far length, and apply the global update
//!    to the tour chosen by [`UpdateStrategy`].
//!
//! # Reference
//!
//! Dorigo, M. & Gambardella, L.M. (1997). "Ant Colony System: a cooperative
//! learning approach to the traveling salesman problem", *IEEE Transactions on
//! Evolutionary Computation* 1(1), 53-66.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, trace};

use crate::constructive::{initial_pheromone, nearest_neighbor_seed};
use crate::distance::DistanceMatrix;
use crate::error::{AcsError, AcsResult};
use crate::evaluation::tour_length;
use crate::local_search::two_opt_improve;
use crate::models::{AcsSolution, City, ConvergenceTrace, Tour};
use crate::pheromone::PheromoneMatrix;

use super::config::{AcsConfig, UpdateStrategy};
use super::construction::{construct_tours, ConstructionParams};

/// Runs the Ant Colony System on a TSP instance.
///
/// # Examples
///
/// ```
/// use acs_tsp::colony::{AcsConfig, AcsRunner};
///
/// let xs = [0.0, 1.0, 1.0, 0.0];
/// let ys = [0.0, 0.0, 1.0, 1.0];
/// let config = AcsConfig::default()
///     .with_num_ants(10)
///     .with_max_iterations(50)
///     .with_seed(42);
///
/// let result = AcsRunner::solve(&xs, &ys, &config).unwrap();
/// assert!((result.best_length - 4.0).abs() < 1e-9);
/// assert_eq!(result.convergence.len(), 50);
/// ```
pub struct AcsRunner;

impl AcsRunner {
    /// Solves the instance given as parallel coordinate arrays.
    pub fn solve(xs: &[f64], ys: &[f64], config: &AcsConfig) -> AcsResult<AcsSolution> {
        config.validate()?;
        let cities = City::from_coordinates(xs, ys)?;
        Self::run(&cities, config)
    }

    /// Solves the instance, seeding the RNG from `config.seed` when set.
    pub fn run(cities: &[City], config: &AcsConfig) -> AcsResult<AcsSolution> {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self::run_with_rng(cities, config, &mut rng)
    }

    /// Solves the instance drawing every random number from `rng`.
    ///
    /// `config.seed` is ignored.
    #[instrument(skip_all, fields(cities = cities.len(), ants = config.num_ants))]
    pub fn run_with_rng<R: Rng>(
        cities: &[City],
        config: &AcsConfig,
        rng: &mut R,
    ) -> AcsResult<AcsSolution> {
        config.validate()?;
        let distances = DistanceMatrix::from_cities(cities)?;
        if distances.is_fully_degenerate() {
            return Err(AcsError::DegenerateGeometry);
        }
        let n = distances.size();

        let nn_length = nearest_neighbor_seed(&distances, rng);
        let tau0 = initial_pheromone(nn_length, n);
        let mut pheromone = PheromoneMatrix::new(n, tau0);
        info!(
            iterations = config.max_iterations,
            nn_length, tau0, "starting ant colony system"
        );

        let starts: Vec<usize> = (0..config.num_ants)
            .map(|_| rng.random_range(0..n))
            .collect();
        let params = ConstructionParams {
            beta: config.beta,
            q0: config.q0,
            rho: config.rho,
            tau0,
        };

        let mut best_tour: Option<Tour> = None;
        let mut best_length = f64::INFINITY;
        let mut convergence = ConvergenceTrace::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            let tours = construct_tours(&starts, &distances, &mut pheromone, &params, rng);
            let evaluated: Vec<(Tour, f64)> = tours
                .into_iter()
                .map(|tour| {
                    if config.local_search {
                        two_opt_improve(&tour, &distances)
                    } else {
                        let len = tour_length(tour.cities(), &distances);
                        (tour, len)
                    }
                })
                .collect();

            // first ant wins ties
            let mut iteration_best = 0;
            for (i, (_, len)) in evaluated.iter().enumerate() {
                if *len < evaluated[iteration_best].1 {
                    iteration_best = i;
                }
            }
            let (iter_tour, iter_length) = &evaluated[iteration_best];
            trace!(iteration, iteration_best = *iter_length, "iteration complete");

            if *iter_length < best_length {
                best_length = *iter_length;
                best_tour = Some(iter_tour.clone());
                debug!(iteration, best_length, "new best tour");
            }
            convergence.record(best_length);

            let (reinforced, reinforced_length) = match (config.update_strategy, &best_tour) {
                (UpdateStrategy::GlobalBest, Some(best)) => (best, best_length),
                _ => (iter_tour, *iter_length),
            };
            pheromone.global_update(config.alpha, reinforced.cities(), reinforced_length);
        }

        // only reachable with zero iterations or ants, which validate() rejects
        let best_tour = best_tour.ok_or(AcsError::InvalidParameter {
            name: "max_iterations",
            value: config.max_iterations as f64,
            expected: ">= 1",
        })?;
        info!(best_length, "ant colony system finished");
        Ok(AcsSolution {
            best_tour: best_tour.rotated_to(0),
            best_length,
            convergence,
            tau0,
        })
    }
}
