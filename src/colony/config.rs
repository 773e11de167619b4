//! ACS run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{AcsError, AcsResult};

/// Which tour receives the global pheromone deposit each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// Shortest tour built during the current iteration.
    #[default]
    IterationBest,
    /// Shortest tour found so far in the run.
    GlobalBest,
}

/// Parameters of an Ant Colony System run.
///
/// Defaults: 20 ants, 50 iterations, `alpha = 0.1`, `beta = 2.0`,
/// `rho = 0.1`, `q0 = 0.9`, unseeded, iteration-best reinforcement,
/// no local search.
///
/// # Examples
///
/// ```
/// use acs_tsp::colony::{AcsConfig, UpdateStrategy};
///
/// let config = AcsConfig::default()
///     .with_num_ants(10)
///     .with_max_iterations(100)
///     .with_q0(0.8)
///     .with_seed(7)
///     .with_update_strategy(UpdateStrategy::GlobalBest);
/// assert!(config.validate().is_ok());
/// assert!(AcsConfig::default().with_alpha(1.5).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcsConfig {
    /// Number of ants per iteration.
    pub num_ants: usize,
    /// Number of iterations.
    pub max_iterations: usize,
    /// Global evaporation rate, in `(0, 1)`.
    pub alpha: f64,
    /// Weight of the distance heuristic relative to pheromone, `> 0`.
    pub beta: f64,
    /// Local decay rate, in `(0, 1)`.
    pub rho: f64,
    /// Probability of exploitation in the selection rule, in `[0, 1]`.
    pub q0: f64,
    /// RNG seed; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
    /// Tour reinforced by the global update.
    pub update_strategy: UpdateStrategy,
    /// Apply 2-opt to every constructed tour before evaluation.
    pub local_search: bool,
}

impl Default for AcsConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            max_iterations: 50,
            alpha: 0.1,
            beta: 2.0,
            rho: 0.1,
            q0: 0.9,
            seed: None,
            update_strategy: UpdateStrategy::IterationBest,
            local_search: false,
        }
    }
}

impl AcsConfig {
    /// Parses a configuration from JSON and validates it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> AcsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the number of ants.
    pub fn with_num_ants(mut self, num_ants: usize) -> Self {
        self.num_ants = num_ants;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the global evaporation rate.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic weight.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the local decay rate.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the exploitation probability.
    pub fn with_q0(mut self, q0: f64) -> Self {
        self.q0 = q0;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Chooses which tour the global update reinforces.
    pub fn with_update_strategy(mut self, strategy: UpdateStrategy) -> Self {
        self.update_strategy = strategy;
        self
    }

    /// Enables or disables 2-opt on constructed tours.
    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.local_search = enabled;
        self
    }

    /// Checks every parameter against its valid range.
    pub fn validate(&self) -> AcsResult<()> {
        if self.num_ants < 1 {
            return Err(invalid("num_ants", self.num_ants as f64, ">= 1"));
        }
        if self.max_iterations < 1 {
            return Err(invalid("max_iterations", self.max_iterations as f64, ">= 1"));
        }
        open_unit("alpha", self.alpha)?;
        open_unit("rho", self.rho)?;
        if !(self.q0 >= 0.0 && self.q0 <= 1.0) {
            return Err(invalid("q0", self.q0, "[0, 1]"));
        }
        if !(self.beta.is_finite() && self.beta > 0.0) {
            return Err(invalid("beta", self.beta, "finite and > 0"));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, value: f64, expected: &'static str) -> AcsError {
    AcsError::InvalidParameter {
        name,
        value,
        expected,
    }
}

fn open_unit(name: &'static str, value: f64) -> AcsResult<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(invalid(name, value, "(0, 1)"))
    }
}
