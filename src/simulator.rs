use crate::config::SimulateParams;
use crate::engine::Machine;
use crate::metrics::{Metrics, MetricsAccumulator};
use crate::rng::RandomSource;
use crate::spec::GameSpec;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOptions {
    pub seed: String,
    pub spins: usize,
}

impl SimulationOptions {
    pub fn new(seed: impl Into<String>, spins: usize) -> Self {
        Self {
            seed: seed.into(),
            spins,
        }
    }
}

impl From<&SimulateParams> for SimulationOptions {
    fn from(p: &SimulateParams) -> Self {
        Self::new(p.seed.clone(), p.spins)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    #[serde(flatten)]
    pub metrics: Metrics,
    pub total_win: f64,
    pub spins: usize,
}

/// Plays `spins` full spins at a full-line bet and reduces the wins as they
/// are played; memory use does not grow with `spins`.
pub fn simulate(spec: &GameSpec, opts: &SimulationOptions) -> SimulationResult {
    let machine = Machine::new(spec);
    run_on(&machine, &opts.seed, opts.spins)
}

/// Independent simulations, one per seed, run in parallel against a shared
/// compiled machine. Results come back in seed order and match what
/// sequential [`simulate`] calls return.
pub fn simulate_many<S: AsRef<str> + Sync>(
    spec: &GameSpec,
    seeds: &[S],
    spins: usize,
) -> Vec<SimulationResult> {
    let machine = Machine::new(spec);
    seeds
        .par_iter()
        .map(|seed| run_on(&machine, seed.as_ref(), spins))
        .collect()
}

fn run_on(machine: &Machine, seed: &str, spins: usize) -> SimulationResult {
    let start = Instant::now();
    let mut rng = RandomSource::new(seed);
    let mut scratch = machine.scratch();

    let mut acc = MetricsAccumulator::default();
    for _ in 0..spins {
        acc.push(machine.play(&mut rng, &mut scratch));
    }

    let metrics = acc.finish(machine.bet_per_spin);
    let total_win = acc.total();

    debug!(
        "Simulated {} spins (seed '{}') in {:.2?}: rtp={:.4} hit={:.4} vol={:.4}",
        spins,
        seed,
        start.elapsed(),
        metrics.rtp,
        metrics.hit_rate,
        metrics.volatility
    );

    SimulationResult {
        metrics,
        total_win,
        spins,
    }
}
