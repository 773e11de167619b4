//! Pseudo-random-proportional city selection.
//!
//! # Algorithm
//!
//! For the current city `r` and every unvisited city `s`:
//!
//! ```text
//! score(s) = tau(r, s) * (1 / d(r, s))^beta
//! ```
//!
//! Draw `q` uniformly from `[0, 1)`. If `q <= q0` the highest-scoring city is
//! taken (exploitation); otherwise a city is sampled with probability
//! proportional to its score (biased exploration).
//!
//! Cities at distance zero from the current city score `+inf` and are taken
//! before anything else.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::pheromone::PheromoneMatrix;

/// Desirability of moving from `from` to `to`.
///
/// Returns `f64::INFINITY` for coincident cities.
pub fn desirability(
    from: usize,
    to: usize,
    distances: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    beta: f64,
) -> f64 {
    let d = distances.get(from, to);
    if d == 0.0 {
        return f64::INFINITY;
    }
    pheromone.get(from, to) * (1.0 / d).powf(beta)
}

/// Picks the next city for an ant whose partial tour is `partial_tour`.
///
/// The last element of `partial_tour` is the ant's current city. Returns
/// `None` if every city has already been visited.
///
/// Ties in exploitation go to the lowest unvisited index. If rounding keeps
/// the roulette draw from crossing any cumulative bound, the last candidate
/// is returned.
///
/// # Examples
///
/// ```
/// use acs_tsp::colony::select_next_city;
/// use acs_tsp::distance::DistanceMatrix;
/// use acs_tsp::pheromone::PheromoneMatrix;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let dm = DistanceMatrix::from_coordinates(&[0.0, 1.0, 5.0], &[0.0; 3]).unwrap();
/// let tau = PheromoneMatrix::new(3, 1.0);
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
///
/// // q0 = 1: always the nearest city when pheromone is uniform
/// let next = select_next_city(&[0], &dm, &tau, 2.0, 1.0, &mut rng);
/// assert_eq!(next, Some(1));
/// ```
pub fn select_next_city<R: Rng>(
    partial_tour: &[usize],
    distances: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    beta: f64,
    q0: f64,
    rng: &mut R,
) -> Option<usize> {
    let n = distances.size();
    let current = *partial_tour.last()?;

    let mut visited = vec![false; n];
    for &c in partial_tour {
        visited[c] = true;
    }

    let mut candidates = Vec::with_capacity(n);
    let mut scores = Vec::with_capacity(n);
    for city in (0..n).filter(|&c| !visited[c]) {
        let score = desirability(current, city, distances, pheromone, beta);
        if score == f64::INFINITY {
            return Some(city);
        }
        candidates.push(city);
        scores.push(score);
    }
    if candidates.is_empty() {
        return None;
    }

    let index = if rng.random::<f64>() <= q0 {
        arg_max(&scores)
    } else {
        roulette(&scores, rng)
    };
    Some(candidates[index])
}

/// Index of the largest score; the first one wins ties.
fn arg_max(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}

/// Roulette-wheel sampling proportional to `scores`.
fn roulette<R: Rng>(scores: &[f64], rng: &mut R) -> usize {
    let total: f64 = scores.iter().sum();
    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, &s) in scores.iter().enumerate() {
        cumulative += s;
        if cumulative >= threshold {
            return i;
        }
    }
    scores.len() - 1
}
