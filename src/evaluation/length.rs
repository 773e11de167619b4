//! Tour length and cycle checks.

use crate::distance::DistanceMatrix;

/// Sums the distances along a closed city sequence.
///
/// The sequence is expected to end at its start city; no closing edge is
/// added implicitly.
///
/// # Examples
///
/// ```
/// use acs_tsp::distance::DistanceMatrix;
/// use acs_tsp::evaluation::tour_length;
///
/// let dm = DistanceMatrix::from_coordinates(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
/// assert!((tour_length(&[0, 1, 2, 3, 0], &dm) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    tour.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}

/// Returns `true` if `tour` starts and ends at the same city and visits each
/// of the `n` cities exactly once in between.
pub fn is_hamiltonian_cycle(tour: &[usize], n: usize) -> bool {
    if tour.len() != n + 1 || tour.first() != tour.last() {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in &tour[..n] {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
