mod common;

use common::{classic_spec, sorted_strips, SpecBuilder};
use reeltune::optimizer::{
    objective, optimize, IterationReport, OptimizationOptions, Optimizer, ProgressCallback,
};
use reeltune::simulator::{simulate, SimulationOptions};
use reeltune::spec::SymbolKind;
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};

fn options(iterations: usize) -> OptimizationOptions {
    OptimizationOptions {
        seed: "opt".to_string(),
        spins: 300,
        iterations,
        target_rtp: 0.9,
        target_vol: None,
        lambda: 0.2,
    }
}

fn baseline_score(opts: &OptimizationOptions) -> f64 {
    let base = simulate(&classic_spec(), &SimulationOptions::new(opts.seed.clone(), opts.spins));
    opts.score(base.metrics.rtp, base.metrics.volatility)
}

#[test]
fn test_objective() {
    assert_eq!(objective(0.9, 3.0, 0.95, None, 0.2), (0.9f64 - 0.95).abs());
    let with_vol = objective(0.9, 3.0, 0.95, Some(2.0), 0.5);
    assert!((with_vol - (0.05 + 0.5)).abs() < 1e-12);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(15)]
fn test_never_worse_than_input(#[case] iterations: usize) {
    let opts = options(iterations);
    let result = optimize(&classic_spec(), &opts);

    assert!(result.objective <= baseline_score(&opts));
    assert_eq!(result.iterations, iterations);
    assert_eq!(result.objective, opts.score(result.rtp, result.volatility));
}

#[test]
fn test_zero_iterations_returns_input() {
    let spec = classic_spec();
    let opts = options(0);
    let result = optimize(&spec, &opts);

    let base = simulate(&spec, &SimulationOptions::new("opt", 300));
    assert_eq!(result.best_spec, spec);
    assert_eq!(result.rtp, base.metrics.rtp);
    assert_eq!(result.volatility, base.metrics.volatility);
    assert_eq!(result.accepted, 0);
}

#[test]
fn test_deterministic_for_seed() {
    let spec = classic_spec();
    let a = optimize(&spec, &options(10));
    let b = optimize(&spec, &options(10));
    assert_eq!(a, b);
}

#[test]
fn test_input_is_untouched_and_strips_keep_their_symbols() {
    let spec = classic_spec();
    let before = spec.clone();
    let result = optimize(&spec, &options(12));

    assert_eq!(spec, before);
    assert_eq!(sorted_strips(&result.best_spec), sorted_strips(&spec));
    assert_eq!(result.best_spec.paytable, spec.paytable);
    assert_eq!(result.best_spec.paylines, spec.paylines);
    assert_eq!(result.best_spec.symbols, spec.symbols);
}

#[test]
fn test_single_symbol_strips_cannot_move() {
    let spec = SpecBuilder::new()
        .symbol("A", SymbolKind::Regular)
        .uniform_strips(&["A"])
        .pay("A", 5, 1.0)
        .line("mid", &[1, 1, 1, 1, 1])
        .build();

    let result = optimize(&spec, &options(5));
    assert_eq!(result.best_spec.reels.strips, spec.reels.strips);
    assert_eq!(result.iterations, 5);
}

struct StopAfter {
    limit: usize,
    seen: AtomicUsize,
}

impl ProgressCallback for StopAfter {
    fn on_progress(&self, report: &IterationReport) -> bool {
        assert!(report.best_score <= report.score);
        assert!(report.temperature > 0.0 && report.temperature <= 1.0);
        self.seen.fetch_add(1, Ordering::SeqCst) + 1 < self.limit
    }
}

#[test]
fn test_callback_can_stop_the_search() {
    let spec = classic_spec();
    let cb = StopAfter {
        limit: 3,
        seen: AtomicUsize::new(0),
    };
    let result = Optimizer::new(options(20)).run(&spec, cb);
    assert_eq!(result.iterations, 3);
}

struct Recorder {
    best: std::sync::Mutex<Vec<f64>>,
}

impl ProgressCallback for Recorder {
    fn on_progress(&self, report: &IterationReport) -> bool {
        self.best.lock().unwrap().push(report.best_score);
        true
    }
}

#[test]
fn test_best_score_is_monotone() {
    let recorder = Recorder {
        best: std::sync::Mutex::new(Vec::new()),
    };
    let optimizer = Optimizer::new(options(15));
    let result = optimizer.run(&classic_spec(), &recorder);

    let best = recorder.best.lock().unwrap();
    assert_eq!(best.len(), 15);
    assert!(best.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(*best.last().unwrap(), result.objective);
}

#[test]
fn test_volatility_target_changes_the_score() {
    let mut opts = options(0);
    let plain = optimize(&classic_spec(), &opts);
    opts.target_vol = Some(0.0);
    opts.lambda = 1.0;
    let with_vol = optimize(&classic_spec(), &opts);

    assert_eq!(plain.rtp, with_vol.rtp);
    assert!((with_vol.objective - (plain.objective + with_vol.volatility)).abs() < 1e-12);
}
