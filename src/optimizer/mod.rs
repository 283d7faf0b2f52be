pub mod mutation;
pub mod runner;

pub use self::runner::{
    optimize, IterationReport, NoProgress, OptimizationOptions, OptimizeResult, Optimizer,
    ProgressCallback,
};

use crate::consts::TEMPERATURE_FLOOR;

/// Distance from the targets; lower is better. The volatility term only
/// applies when a volatility target is set.
#[inline]
pub fn objective(rtp: f64, volatility: f64, target_rtp: f64, target_vol: Option<f64>, lambda: f64) -> f64 {
    let mut score = (rtp - target_rtp).abs();
    if let Some(tv) = target_vol {
        score += lambda * (volatility - tv).abs();
    }
    score
}

/// Linear decay from 1 at the first iteration, never below the floor.
#[inline]
pub fn temperature(iteration: usize, iterations: usize) -> f64 {
    if iterations == 0 {
        return 1.0;
    }
    (1.0 - iteration as f64 / iterations as f64).max(TEMPERATURE_FLOOR)
}
