//! Demo: solve a random 30-city instance and print the run report as JSON.
//!
//! Set `RUST_LOG=acs_tsp=debug` to follow improvements as they happen.

use std::process::ExitCode;

use acs_tsp::colony::{AcsConfig, AcsRunner};
use acs_tsp::models::random_cities;
use acs_tsp::report::RunReport;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CITY_NUM: usize = 30;
const MIN_COORD: f64 = 0.0;
const MAX_COORD: f64 = 10.0;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = AcsConfig::default()
        .with_num_ants(20)
        .with_max_iterations(50)
        .with_alpha(0.1)
        .with_beta(2.0)
        .with_rho(0.1)
        .with_q0(0.9);

    let cities = random_cities(CITY_NUM, MIN_COORD, MAX_COORD, &mut rand::rng());
    let solution = match AcsRunner::run(&cities, &config) {
        Ok(solution) => solution,
        Err(e) => {
            error!("solver failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        best_length = solution.best_length,
        tour = ?solution.best_tour.cities(),
        "done"
    );

    match RunReport::new(cities, solution).to_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to serialize report: {e}");
            ExitCode::FAILURE
        }
    }
}
