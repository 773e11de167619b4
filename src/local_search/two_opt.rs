//! 2-opt improvement of a closed tour.
//!
//! # Algorithm
//!
//! For each pair of edges (a, b) and (c, d) on the tour, compute the change
//! in length from reconnecting them as (a, c) and (b, d):
//!
//! ```text
//! delta = d(a, c) + d(b, d) - d(a, b) - d(c, d)
//! ```
//!
//! If delta < 0, reverse the segment between them and accept the improvement.
//! Repeat until no further improvements are found (first-improvement strategy).
//! The start city stays fixed.
//!
//! # Complexity
//!
//! O(n²) per pass.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::evaluation::tour_length;
use crate::models::Tour;

/// Applies 2-opt to a closed tour and returns the improved tour with its length.
///
/// The result never has a greater length than the input and keeps the same
/// start city.
///
/// # Examples
///
/// ```
/// use acs_tsp::distance::DistanceMatrix;
/// use acs_tsp::local_search::two_opt_improve;
/// use acs_tsp::models::Tour;
///
/// // Unit square visited in a crossing order.
/// let dm = DistanceMatrix::from_coordinates(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
/// let (improved, len) = two_opt_improve(&Tour::new(vec![0, 2, 1, 3, 0]), &dm);
/// assert!((len - 4.0).abs() < 1e-10);
/// assert_eq!(improved.start(), Some(0));
/// ```
pub fn two_opt_improve(tour: &Tour, distances: &DistanceMatrix) -> (Tour, f64) {
    let mut current = tour.cities().to_vec();
    // Needs at least two interior cities to reverse anything.
    if current.len() < 4 {
        let len = tour_length(&current, distances);
        return (Tour::new(current), len);
    }

    let last = current.len() - 1;
    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..last - 1 {
            for j in i + 1..last {
                if two_opt_delta(&current, distances, i, j) < -1e-10 {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let len = tour_length(&current, distances);
    (Tour::new(current), len)
}

/// Change in length from reversing `tour[i..=j]`.
///
/// Before: ... - tour[i-1] - tour[i] - ... - tour[j] - tour[j+1] - ...
/// After:  ... - tour[i-1] - tour[j] - ... - tour[i] - tour[j+1] - ...
fn two_opt_delta(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let (a, b) = (tour[i - 1], tour[i]);
    let (c, d) = (tour[j], tour[j + 1]);
    distances.get(a, c) + distances.get(b, d) - distances.get(a, b) - distances.get(c, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::is_hamiltonian_cycle;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_coordinates(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0])
            .expect("valid")
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = square();
        let tour = Tour::new(vec![0, 1, 2, 3, 0]);
        let (improved, len) = two_opt_improve(&tour, &dm);
        assert_eq!(improved, tour);
        assert!((len - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_removes_crossing() {
        let dm = square();
        let tour = Tour::new(vec![1, 3, 2, 0, 1]);
        let before = tour_length(tour.cities(), &dm);
        let (improved, len) = two_opt_improve(&tour, &dm);
        assert!(before > 4.0 + 1e-10);
        assert!((len - 4.0).abs() < 1e-10);
        assert_eq!(improved.start(), Some(1));
        assert!(is_hamiltonian_cycle(improved.cities(), 4));
    }

    #[test]
    fn test_2opt_small_tours_unchanged() {
        let dm = square();
        let tour = Tour::new(vec![2, 0, 2]);
        let (improved, len) = two_opt_improve(&tour, &dm);
        assert_eq!(improved, tour);
        assert!((len - 2.0 * 2f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        let dm = DistanceMatrix::from_coordinates(
            &[5.0, 0.0, 10.0, 0.0, 10.0, 4.0],
            &[5.0, 0.0, 0.0, 10.0, 10.0, 2.0],
        )
        .expect("valid");
        let tour = Tour::new(vec![0, 1, 4, 2, 5, 3, 0]);
        let before = tour_length(tour.cities(), &dm);
        let (improved, len) = two_opt_improve(&tour, &dm);
        assert!(len <= before + 1e-10);
        assert!(is_hamiltonian_cycle(improved.cities(), 6));
        assert!((tour_length(improved.cities(), &dm) - len).abs() < 1e-10);
    }
}
