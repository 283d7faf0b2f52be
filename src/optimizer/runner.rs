use super::mutation;
use super::{objective, temperature};
use crate::config::OptimizeParams;
use crate::rng::RandomSource;
use crate::simulator::{simulate, SimulationOptions};
use crate::spec::GameSpec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOptions {
    pub seed: String,
    pub spins: usize,
    pub iterations: usize,
    pub target_rtp: f64,
    pub target_vol: Option<f64>,
    pub lambda: f64,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&OptimizeParams::default())
    }
}

impl From<&OptimizeParams> for OptimizationOptions {
    fn from(p: &OptimizeParams) -> Self {
        Self {
            seed: p.seed.clone(),
            spins: p.spins,
            iterations: p.iterations,
            target_rtp: p.target_rtp,
            target_vol: p.target_vol,
            lambda: p.lambda,
        }
    }
}

impl OptimizationOptions {
    pub fn score(&self, rtp: f64, volatility: f64) -> f64 {
        objective(rtp, volatility, self.target_rtp, self.target_vol, self.lambda)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResult {
    pub best_spec: GameSpec,
    pub rtp: f64,
    pub volatility: f64,
    pub objective: f64,
    /// Rounds actually run (fewer than requested if a callback stopped early).
    pub iterations: usize,
    /// Rounds in which the search cursor moved to the candidate.
    pub accepted: usize,
}

/// What one optimization round produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReport {
    pub iteration: usize,
    pub temperature: f64,
    pub score: f64,
    pub best_score: f64,
    pub rtp: f64,
    pub volatility: f64,
    pub improved: bool,
    pub accepted: bool,
}

/// Receives a report after every round.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, report: &IterationReport) -> bool;
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &T {
    fn on_progress(&self, report: &IterationReport) -> bool {
        (**self).on_progress(report)
    }
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _report: &IterationReport) -> bool {
        true
    }
}

pub struct Optimizer {
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(options: OptimizationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    /// Local search over reel-strip orderings.
    ///
    /// The input spec is simulated first with the base seed and is the initial
    /// best, so the returned objective never exceeds its score. Each round
    /// clones the cursor, swaps two positions on one strip and simulates the
    /// candidate with seed `"{seed}-{round}"`. A candidate strictly below the
    /// best-ever score becomes the new best. The cursor moves to a candidate
    /// when its score is within the annealing margin of the best-ever score
    /// (not of the cursor's own score).
    pub fn run<CB: ProgressCallback>(&self, spec: &GameSpec, callback: CB) -> OptimizeResult {
        let opts = &self.options;
        let mut rng = RandomSource::new(&opts.seed);

        let baseline = simulate(spec, &SimulationOptions::new(opts.seed.clone(), opts.spins));
        let mut best_spec = spec.clone();
        let mut best_rtp = baseline.metrics.rtp;
        let mut best_vol = baseline.metrics.volatility;
        let mut best_score = opts.score(best_rtp, best_vol);

        info!(
            "Baseline: rtp={:.4} vol={:.4} objective={:.5}",
            best_rtp, best_vol, best_score
        );

        let mut current = spec.clone();
        let mut rounds = 0;
        let mut accepted_count = 0;

        for i in 0..opts.iterations {
            // 1. Perturb a deep copy of the cursor.
            let mut candidate = current.clone();
            if mutation::swap_random_positions(&mut candidate.reels.strips, &mut rng).is_none() {
                warn!("Round {}: picked a strip too short to swap", i);
            }

            // 2. Evaluate with a per-round seed.
            let sim = simulate(
                &candidate,
                &SimulationOptions::new(format!("{}-{}", opts.seed, i), opts.spins),
            );
            let rtp = sim.metrics.rtp;
            let vol = sim.metrics.volatility;

            // 3. Score.
            let score = opts.score(rtp, vol);

            // 4. Keep best, then decide whether the cursor moves.
            let improved = score < best_score;
            if improved {
                best_spec = candidate.clone();
                best_score = score;
                best_rtp = rtp;
                best_vol = vol;
                info!(
                    "Round {:3} | new best objective {:.5} (rtp={:.4} vol={:.4})",
                    i, score, rtp, vol
                );
            }

            let temp = temperature(i, opts.iterations);
            let accepted =
                score <= best_score || rng.next_f64() < (-(score - best_score) / temp).exp();
            if accepted {
                current = candidate;
                accepted_count += 1;
            }
            rounds += 1;

            debug!(
                "Round {:3} | T={:.3} | score={:.5} | best={:.5} | accepted={}",
                i, temp, score, best_score, accepted
            );

            let report = IterationReport {
                iteration: i,
                temperature: temp,
                score,
                best_score,
                rtp,
                volatility: vol,
                improved,
                accepted,
            };
            if !callback.on_progress(&report) {
                info!("Search stopped by callback after {} round(s)", rounds);
                break;
            }
        }

        OptimizeResult {
            best_spec,
            rtp: best_rtp,
            volatility: best_vol,
            objective: best_score,
            iterations: rounds,
            accepted: accepted_count,
        }
    }
}

/// Runs the optimizer to completion without progress reporting.
pub fn optimize(spec: &GameSpec, options: &OptimizationOptions) -> OptimizeResult {
    Optimizer::new(options.clone()).run(spec, NoProgress)
}
