//! Dense symmetric pheromone matrix with the ACS update rules.
//!
//! # Update rules
//!
//! Local update, applied to every edge an ant traverses:
//!
//! ```text
//! tau(i, j) <- (1 - rho) * tau(i, j) + rho * tau0
//! ```
//!
//! Global update, applied once per iteration:
//!
//! ```text
//! tau(i, j) <- (1 - alpha) * tau(i, j)            for every edge
//! tau(i, j) <- tau(i, j) + 1 / L_best             for every edge on the reinforced tour
//! ```
//!
//! Both rules write `(i, j)` and `(j, i)` together, so the matrix stays
//! symmetric. Evaporation is floored at [`PHEROMONE_FLOOR`], so entries stay
//! strictly positive however long an edge goes unused.
//!
//! # Reference
//!
//! Dorigo, M. & Gambardella, L.M. (1997). "Ant Colony System: a cooperative
//! learning approach to the traveling salesman problem", *IEEE Transactions on
//! Evolutionary Computation* 1(1), 53-66.

/// Smallest value evaporation can leave on an edge.
pub const PHEROMONE_FLOOR: f64 = f64::MIN_POSITIVE;

/// Symmetric n×n pheromone matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use acs_tsp::pheromone::PheromoneMatrix;
///
/// let mut tau = PheromoneMatrix::new(3, 0.5);
/// tau.local_update(0, 1, 0.1, 0.5);
/// tau.global_update(0.1, &[0, 1, 2, 0], 4.0);
/// assert!(tau.is_symmetric(0.0));
/// assert!(tau.min_value() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates an n×n matrix with every entry set to `tau0`.
    pub fn new(size: usize, tau0: f64) -> Self {
        Self {
            data: vec![tau0; size * size],
            size,
        }
    }

    /// Resets every entry to `tau0`.
    pub fn initialize(&mut self, tau0: f64) {
        self.data.fill(tau0);
    }

    /// Pheromone on edge `(from, to)`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.size + j] = value;
        self.data[j * self.size + i] = value;
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// ACS local update on edge `(i, j)`, pulling it toward `tau0`.
    pub fn local_update(&mut self, i: usize, j: usize, rho: f64, tau0: f64) {
        let value = (1.0 - rho) * self.get(i, j) + rho * tau0;
        self.set_symmetric(i, j, value);
    }

    /// ACS global update: evaporates every edge, then deposits
    /// `1 / best_length` on each edge of `best_tour`.
    ///
    /// Evaporated values never drop below [`PHEROMONE_FLOOR`].
    ///
    /// `best_tour` is a closed city sequence; its closing edge is included.
    pub fn global_update(&mut self, alpha: f64, best_tour: &[usize], best_length: f64) {
        let keep = 1.0 - alpha;
        for v in &mut self.data {
            *v = (*v * keep).max(PHEROMONE_FLOOR);
        }
        let delta = 1.0 / best_length;
        for w in best_tour.windows(2) {
            let value = self.get(w[0], w[1]) + delta;
            self.set_symmetric(w[0], w[1], value);
        }
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Smallest entry in the matrix.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }
}
