//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: from the start city, always move to the nearest
//! unvisited city, then return to the start. Ties go to the lowest city index.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::evaluation::tour_length;
use crate::models::Tour;

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// # Arguments
///
/// * `distances` — Distance matrix
/// * `start` — City the tour starts and ends at
///
/// # Examples
///
/// ```
/// use acs_tsp::distance::DistanceMatrix;
/// use acs_tsp::constructive::nearest_neighbor_tour;
///
/// let dm = DistanceMatrix::from_coordinates(&[0.0, 1.0, 2.0, 3.0], &[0.0; 4]).unwrap();
/// let tour = nearest_neighbor_tour(&dm, 0);
/// assert_eq!(tour.cities(), &[0, 1, 2, 3, 0]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> Tour {
    let n = distances.size();
    let mut remaining: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    let mut cities = Vec::with_capacity(n + 1);
    cities.push(start);

    let mut current = start;
    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        // `remaining` stays sorted so equal distances resolve to the lowest index
        remaining.retain(|&c| c != next);
        cities.push(next);
        current = next;
    }
    cities.push(start);

    Tour::new(cities)
}

/// Length of a nearest-neighbor tour started at a uniformly random city.
///
/// Consumes exactly one draw from `rng`.
pub fn nearest_neighbor_seed<R: Rng>(distances: &DistanceMatrix, rng: &mut R) -> f64 {
    let start = rng.random_range(0..distances.size());
    let tour = nearest_neighbor_tour(distances, start);
    tour_length(tour.cities(), distances)
}

/// Classic ACS initial pheromone level: `1 / (heuristic_length * n)`.
pub fn initial_pheromone(heuristic_length: f64, n: usize) -> f64 {
    1.0 / (heuristic_length * n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::is_hamiltonian_cycle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn line() -> DistanceMatrix {
        DistanceMatrix::from_coordinates(&[0.0, 1.0, 2.0, 3.0], &[0.0; 4]).expect("valid")
    }

    #[test]
    fn test_nn_line_from_end() {
        let tour = nearest_neighbor_tour(&line(), 0);
        assert_eq!(tour.cities(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_nn_line_from_middle() {
        // From 2, cities 1 and 3 are equally near: lowest index wins.
        let tour = nearest_neighbor_tour(&line(), 2);
        assert_eq!(tour.cities(), &[2, 1, 0, 3, 2]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_coordinates(&[0.0, 10.0, 1.0], &[0.0; 3]).expect("valid");
        let tour = nearest_neighbor_tour(&dm, 0);
        assert_eq!(tour.cities(), &[0, 2, 1, 0]);
    }

    #[test]
    fn test_nn_two_cities() {
        let dm = DistanceMatrix::from_coordinates(&[0.0, 3.0], &[0.0, 4.0]).expect("valid");
        let tour = nearest_neighbor_tour(&dm, 1);
        assert_eq!(tour.cities(), &[1, 0, 1]);
        assert!((tour_length(tour.cities(), &dm) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_is_hamiltonian() {
        let dm = DistanceMatrix::from_coordinates(
            &[0.0, 5.0, 2.0, 8.0, 1.0, 7.0],
            &[0.0, 1.0, 6.0, 3.0, 9.0, 7.0],
        )
        .expect("valid");
        for start in 0..dm.size() {
            let tour = nearest_neighbor_tour(&dm, start);
            assert_eq!(tour.start(), Some(start));
            assert!(is_hamiltonian_cycle(tour.cities(), dm.size()));
        }
    }

    #[test]
    fn test_nn_seed_matches_some_start() {
        let dm = line();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let len = nearest_neighbor_seed(&dm, &mut rng);
        let candidates: Vec<f64> = (0..dm.size())
            .map(|s| tour_length(nearest_neighbor_tour(&dm, s).cities(), &dm))
            .collect();
        assert!(candidates.iter().any(|&c| (c - len).abs() < 1e-10));
    }

    #[test]
    fn test_initial_pheromone() {
        assert!((initial_pheromone(4.0, 4) - 0.0625).abs() < 1e-12);
    }
}
