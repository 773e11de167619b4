use acs_tsp::colony::{select_next_city, AcsConfig, AcsRunner, UpdateStrategy};
use acs_tsp::distance::DistanceMatrix;
use acs_tsp::evaluation::{is_hamiltonian_cycle, tour_length};
use acs_tsp::models::{random_cities, City};
use acs_tsp::pheromone::PheromoneMatrix;
use acs_tsp::AcsError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SQUARE_X: [f64; 4] = [0.0, 1.0, 1.0, 0.0];
const SQUARE_Y: [f64; 4] = [0.0, 0.0, 1.0, 1.0];

#[test]
fn test_unit_square_optimum() {
    for seed in 0..5 {
        let config = AcsConfig::default()
            .with_num_ants(10)
            .with_max_iterations(50)
            .with_seed(seed);
        let sol = AcsRunner::solve(&SQUARE_X, &SQUARE_Y, &config).expect("valid");
        assert!((sol.best_length - 4.0).abs() < 1e-9, "seed {seed}");
    }
}

#[test]
fn test_two_cities_only_tour() {
    let xs = [2.0, 5.0];
    let ys = [1.0, 5.0];
    for seed in 0..10 {
        let config = AcsConfig::default().with_seed(seed);
        let sol = AcsRunner::solve(&xs, &ys, &config).expect("valid");
        assert_eq!(sol.best_tour.cities(), &[0, 1, 0]);
        assert_eq!(sol.best_length, 10.0);
    }
}

#[test]
fn test_pure_exploitation_is_deterministic() {
    let dm = DistanceMatrix::from_coordinates(
        &[0.0, 4.0, 1.0, 7.0, 3.0],
        &[0.0, 2.0, 5.0, 1.0, 8.0],
    )
    .expect("valid");
    let mut tau = PheromoneMatrix::new(dm.size(), 0.02);
    tau.global_update(0.1, &[0, 3, 1, 2, 4, 0], 25.0);

    let mut rng_a = ChaCha8Rng::seed_from_u64(1);
    let mut rng_b = ChaCha8Rng::seed_from_u64(2);
    let partial = [2, 0];
    let a = select_next_city(&partial, &dm, &tau, 2.0, 1.0, &mut rng_a);
    let b = select_next_city(&partial, &dm, &tau, 2.0, 1.0, &mut rng_b);
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn test_pure_exploitation_run_visits_all() {
    let config = AcsConfig::default().with_q0(1.0).with_seed(8);
    let cities = random_cities(12, 0.0, 50.0, &mut ChaCha8Rng::seed_from_u64(8));
    let sol = AcsRunner::run(&cities, &config).expect("valid");
    assert!(is_hamiltonian_cycle(sol.best_tour.cities(), 12));
}

#[test]
fn test_coincident_cities_are_handled() {
    // Cities 1 and 3 share a location.
    let xs = [0.0, 3.0, 6.0, 3.0, 0.0];
    let ys = [0.0, 4.0, 0.0, 4.0, 5.0];
    let config = AcsConfig::default()
        .with_num_ants(6)
        .with_max_iterations(20)
        .with_seed(21);
    let sol = AcsRunner::solve(&xs, &ys, &config).expect("valid");
    assert!(sol.best_length.is_finite());
    assert!(is_hamiltonian_cycle(sol.best_tour.cities(), 5));

    let dm = DistanceMatrix::from_coordinates(&xs, &ys).expect("valid");
    assert!((tour_length(sol.best_tour.cities(), &dm) - sol.best_length).abs() < 1e-9);
}

#[test]
fn test_all_cities_coincident_rejected() {
    let err = AcsRunner::solve(&[4.0; 3], &[4.0; 3], &AcsConfig::default().with_seed(0))
        .expect_err("degenerate");
    assert!(matches!(err, AcsError::DegenerateGeometry));
}

#[test]
fn test_invalid_inputs_rejected() {
    let config = AcsConfig::default();
    assert!(matches!(
        AcsRunner::solve(&[1.0], &[1.0], &config),
        Err(AcsError::TooFewCities { count: 1 })
    ));
    assert!(matches!(
        AcsRunner::solve(&[1.0, 2.0], &[1.0], &config),
        Err(AcsError::CoordinateLengthMismatch { xs: 2, ys: 1 })
    ));
    assert!(matches!(
        AcsRunner::solve(&SQUARE_X, &SQUARE_Y, &config.clone().with_max_iterations(0)),
        Err(AcsError::InvalidParameter { name: "max_iterations", .. })
    ));
    assert!(matches!(
        AcsRunner::solve(&SQUARE_X, &SQUARE_Y, &config.clone().with_q0(-0.5)),
        Err(AcsError::InvalidParameter { name: "q0", .. })
    ));
}

#[test]
fn test_strategies_both_improve_on_random_instance() {
    let cities = random_cities(20, 0.0, 10.0, &mut ChaCha8Rng::seed_from_u64(123));
    for strategy in [UpdateStrategy::IterationBest, UpdateStrategy::GlobalBest] {
        let config = AcsConfig::default()
            .with_seed(123)
            .with_update_strategy(strategy);
        let sol = AcsRunner::run(&cities, &config).expect("valid");
        let first = sol.convergence.values()[0];
        assert!(sol.best_length <= first);
        assert!(sol.convergence.is_non_increasing());
        assert!(is_hamiltonian_cycle(sol.best_tour.cities(), 20));
    }
}

#[test]
fn test_cities_roundtrip_into_solver() {
    let cities: Vec<City> = (0..6)
        .map(|i| City::new(i, i as f64, (i * i) as f64 % 5.0))
        .collect();
    let config = AcsConfig::default().with_max_iterations(5).with_seed(2);
    let sol = AcsRunner::run(&cities, &config).expect("valid");
    assert_eq!(sol.iterations(), 5);
}
