//! Tour construction for one ant population.
//!
//! Every construction step runs in two phases:
//!
//! 1. **Selection** — each ant picks its next city against the pheromone
//!    state as it stood at the start of the step.
//! 2. **Update** — the local rule is applied to every edge just traversed,
//!    one ant after another.
//!
//! After `n - 1` steps every ant returns to its own start city and the
//! closing edges are updated the same way.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::models::Tour;
use crate::pheromone::PheromoneMatrix;

use super::selector::select_next_city;

/// Parameters used while ants build their tours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructionParams {
    /// Heuristic weight.
    pub beta: f64,
    /// Exploitation probability.
    pub q0: f64,
    /// Local decay rate.
    pub rho: f64,
    /// Initial pheromone level the local rule decays toward.
    pub tau0: f64,
}

/// Builds one closed tour per entry in `starts`.
///
/// Applies the local pheromone update to `pheromone` after each step.
///
/// # Examples
///
/// ```
/// use acs_tsp::colony::{construct_tours, ConstructionParams};
/// use acs_tsp::distance::DistanceMatrix;
/// use acs_tsp::pheromone::PheromoneMatrix;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let dm = DistanceMatrix::from_coordinates(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
/// let params = ConstructionParams { beta: 2.0, q0: 0.9, rho: 0.1, tau0: 0.0625 };
/// let mut tau = PheromoneMatrix::new(4, params.tau0);
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
///
/// let tours = construct_tours(&[0, 2, 3], &dm, &mut tau, &params, &mut rng);
/// assert_eq!(tours.len(), 3);
/// assert_eq!(tours[1].start(), Some(2));
/// assert_eq!(tours[1].cities().len(), 5);
/// ```
pub fn construct_tours<R: Rng>(
    starts: &[usize],
    distances: &DistanceMatrix,
    pheromone: &mut PheromoneMatrix,
    params: &ConstructionParams,
    rng: &mut R,
) -> Vec<Tour> {
    let n = distances.size();
    let mut paths: Vec<Vec<usize>> = starts
        .iter()
        .map(|&s| {
            let mut path = Vec::with_capacity(n + 1);
            path.push(s);
            path
        })
        .collect();

    for _ in 1..n {
        let moves: Vec<Option<usize>> = paths
            .iter()
            .map(|path| select_next_city(path, distances, pheromone, params.beta, params.q0, rng))
            .collect();

        for (path, next) in paths.iter_mut().zip(moves) {
            debug_assert!(next.is_some(), "ant ran out of unvisited cities");
            if let Some(next) = next {
                path.push(next);
            }
        }
        apply_local_updates(&paths, pheromone, params);
    }

    for path in &mut paths {
        path.push(path[0]);
    }
    apply_local_updates(&paths, pheromone, params);

    paths.into_iter().map(Tour::new).collect()
}

/// Local rule on the last edge of every path.
fn apply_local_updates(
    paths: &[Vec<usize>],
    pheromone: &mut PheromoneMatrix,
    params: &ConstructionParams,
) {
    for path in paths {
        if let [.., from, to] = path.as_slice() {
            pheromone.local_update(*from, *to, params.rho, params.tau0);
        }
    }
}
