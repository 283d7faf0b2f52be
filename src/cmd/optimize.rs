use super::SpecArgs;
use crate::reports::{self, OutputFormat};
use clap::Args;
use reeltune::config::OptimizeParams;
use reeltune::optimizer::{IterationReport, OptimizationOptions, Optimizer, ProgressCallback};
use reeltune::RtResult;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    #[command(flatten)]
    pub params: OptimizeParams,

    /// Wall-clock budget in seconds.
    #[arg(long)]
    pub max_time: Option<u64>,
}

struct CliLogger {
    start: Instant,
    max_time: Option<Duration>,
}

impl ProgressCallback for CliLogger {
    fn on_progress(&self, r: &IterationReport) -> bool {
        info!(
            "Round {:4} | T={:.2} | Score: {:.5} | Best: {:.5} | rtp={:.4} vol={:.3}{}",
            r.iteration,
            r.temperature,
            r.score,
            r.best_score,
            r.rtp,
            r.volatility,
            if r.improved { " ⭐" } else { "" }
        );
        if let Some(limit) = self.max_time {
            if self.start.elapsed() >= limit {
                warn!("⏱️  Time budget of {:?} reached", limit);
                return false;
            }
        }
        true
    }
}

pub fn run(args: &OptimizeArgs, params: &OptimizeParams, format: OutputFormat) -> RtResult<()> {
    let spec = super::load_spec(&args.spec.spec)?;
    let options = OptimizationOptions::from(params);

    info!(
        "🔧 Optimizing toward rtp={} vol={} ({} rounds x {} spins, seed '{}')",
        options.target_rtp,
        options
            .target_vol
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string()),
        options.iterations,
        options.spins,
        options.seed
    );

    let logger = CliLogger {
        start: Instant::now(),
        max_time: args.max_time.map(Duration::from_secs),
    };
    let result = Optimizer::new(options).run(&spec, logger);

    info!("\n=== 🏆 FINAL RESULT ===");
    info!("Objective: {:.5}", result.objective);

    match format {
        OutputFormat::Json => super::print_json(&result),
        OutputFormat::Table => {
            reports::print_optimization(&result);
            Ok(())
        }
    }
}
