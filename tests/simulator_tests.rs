mod common;

use common::{classic_spec, uniform_spec};
use reeltune::simulator::{simulate, simulate_many, SimulationOptions};

#[test]
fn test_uniform_machine_returns_exactly_its_bet() {
    let spec = uniform_spec();
    let result = simulate(&spec, &SimulationOptions::new("demo", 1000));

    assert_eq!(result.spins, 1000);
    assert_eq!(result.total_win, 5000.0);
    assert_eq!(result.metrics.rtp, 1.0);
    assert_eq!(result.metrics.hit_rate, 1.0);
    assert_eq!(result.metrics.volatility, 0.0);
}

#[test]
fn test_zero_spins() {
    let result = simulate(&classic_spec(), &SimulationOptions::new("demo", 0));
    assert_eq!(result.spins, 0);
    assert_eq!(result.total_win, 0.0);
    assert_eq!(result.metrics.rtp, 0.0);
    assert_eq!(result.metrics.hit_rate, 0.0);
    assert_eq!(result.metrics.volatility, 0.0);
}

#[test]
fn test_zero_bet_reports_zero_rtp() {
    let mut spec = uniform_spec();
    spec.bet.bet_per_line = 0.0;
    let result = simulate(&spec, &SimulationOptions::new("demo", 50));
    assert_eq!(result.metrics.rtp, 0.0);
}

#[test]
fn test_same_seed_same_metrics() {
    let spec = classic_spec();
    let a = simulate(&spec, &SimulationOptions::new("repro", 2000));
    let b = simulate(&spec, &SimulationOptions::new("repro", 2000));
    assert_eq!(a, b);
}

#[test]
fn test_simulate_many_matches_sequential_runs() {
    let spec = classic_spec();
    let seeds = ["a", "b", "c", "d"];
    let parallel = simulate_many(&spec, &seeds, 500);

    assert_eq!(parallel.len(), seeds.len());
    for (seed, result) in seeds.iter().zip(&parallel) {
        assert_eq!(*result, simulate(&spec, &SimulationOptions::new(*seed, 500)));
    }
}

#[test]
fn test_metrics_are_in_range() {
    let result = simulate(&classic_spec(), &SimulationOptions::new("range", 3000));
    assert!(result.metrics.rtp >= 0.0);
    assert!((0.0..=1.0).contains(&result.metrics.hit_rate));
    assert!(result.metrics.volatility >= 0.0);
}

#[test]
fn test_result_serializes_flat() {
    let result = simulate(&uniform_spec(), &SimulationOptions::new("demo", 10));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["rtp"], 1.0);
    assert_eq!(json["hitRate"], 1.0);
    assert_eq!(json["totalWin"], 50.0);
    assert_eq!(json["spins"], 10);
}
