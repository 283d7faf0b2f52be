//! Entry points for callers that hold an already-decoded spec document (for
//! example a presentation layer) and want the same results the CLI prints.
//! Each call validates first and does no RNG or statistics work on a rejected
//! document.

use crate::engine::{self, SpinResult};
use crate::error::RtResult;
use crate::optimizer::{optimize, OptimizationOptions, OptimizeResult};
use crate::rng::RandomSource;
use crate::simulator::{simulate, simulate_many, SimulationOptions, SimulationResult};
use crate::spec::GameSpec;
use crate::validator;
use serde_json::Value;

/// Service: validate a document into a typed spec.
pub fn load_spec(doc: &Value) -> RtResult<GameSpec> {
    Ok(validator::validate(doc)?)
}

/// Service: one spin with a fresh source built from `seed`.
pub fn spin(doc: &Value, seed: &str) -> RtResult<SpinResult> {
    let spec = load_spec(doc)?;
    let mut rng = RandomSource::new(seed);
    Ok(engine::spin(&spec, &mut rng))
}

/// Service: scores a fixed grid of symbol ids (row-major).
pub fn evaluate(doc: &Value, grid: &[Vec<String>]) -> RtResult<SpinResult> {
    let spec = load_spec(doc)?;
    Ok(engine::evaluate_grid(&spec, grid))
}

pub fn run_simulation(doc: &Value, opts: &SimulationOptions) -> RtResult<SimulationResult> {
    let spec = load_spec(doc)?;
    Ok(simulate(&spec, opts))
}

/// Service: independent simulations in parallel, one per seed.
pub fn run_simulations(doc: &Value, seeds: &[String], spins: usize) -> RtResult<Vec<SimulationResult>> {
    let spec = load_spec(doc)?;
    Ok(simulate_many(&spec, seeds, spins))
}

pub fn run_optimization(doc: &Value, opts: &OptimizationOptions) -> RtResult<OptimizeResult> {
    let spec = load_spec(doc)?;
    Ok(optimize(&spec, opts))
}
