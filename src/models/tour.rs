//! Closed tour type.

use serde::{Deserialize, Serialize};

/// A closed tour: an ordered sequence of city indices whose last element
/// repeats the first.
///
/// A complete tour over `N` cities has `N + 1` entries and visits every city
/// exactly once before returning to its start. Partial tours built during
/// construction are plain `Vec<usize>`; a `Tour` is only formed once the
/// cycle is closed.
///
/// # Examples
///
/// ```
/// use acs_tsp::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1, 2]);
/// assert_eq!(tour.start(), Some(2));
/// assert_eq!(tour.num_cities(), 3);
/// assert_eq!(tour.edges().count(), 3);
/// assert_eq!(tour.rotated_to(0).cities(), &[0, 1, 2, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Wraps a closed city sequence.
    pub fn new(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    /// Returns the city sequence, including the closing city.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Start (and end) city, or `None` for an empty tour.
    pub fn start(&self) -> Option<usize> {
        self.cities.first().copied()
    }

    /// Number of distinct cities visited (sequence length minus the closing city).
    pub fn num_cities(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// Iterates over the traversed edges `(from, to)`, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cities.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns the same cycle started at `city`.
    ///
    /// Returns an unchanged copy if `city` is not on the tour.
    pub fn rotated_to(&self, city: usize) -> Tour {
        let n = self.num_cities();
        match self.cities[..n].iter().position(|&c| c == city) {
            Some(pos) => {
                let mut cities: Vec<usize> = self.cities[pos..n]
                    .iter()
                    .chain(&self.cities[..pos])
                    .copied()
                    .collect();
                cities.push(city);
                Tour::new(cities)
            }
            None => self.clone(),
        }
    }
}
