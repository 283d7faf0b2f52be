use super::SpecArgs;
use crate::reports::{self, OutputFormat};
use clap::Args;
use reeltune::config::SimulateParams;
use reeltune::simulator::{simulate, simulate_many, SimulationOptions};
use reeltune::RtResult;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    #[command(flatten)]
    pub params: SimulateParams,

    /// Independent runs in parallel, seeded "{seed}-run{i}".
    #[arg(long, default_value_t = 1)]
    pub runs: usize,
}

pub fn run(args: &SimulateArgs, params: &SimulateParams, format: OutputFormat) -> RtResult<()> {
    let spec = super::load_spec(&args.spec.spec)?;
    let start = Instant::now();

    if args.runs <= 1 {
        info!("🎲 Simulating {} spins (seed '{}')", params.spins, params.seed);
        let result = simulate(&spec, &SimulationOptions::from(params));
        info!("🏁 Done in {:.2?}", start.elapsed());

        return match format {
            OutputFormat::Json => super::print_json(&result),
            OutputFormat::Table => {
                reports::print_simulations(&[(params.seed.clone(), result)]);
                Ok(())
            }
        };
    }

    let seeds: Vec<String> = (0..args.runs)
        .map(|i| format!("{}-run{}", params.seed, i))
        .collect();
    info!(
        "🔥 Simulating {} runs x {} spins in parallel",
        args.runs, params.spins
    );
    let results = simulate_many(&spec, &seeds, params.spins);
    info!("🏁 Done in {:.2?}", start.elapsed());

    match format {
        OutputFormat::Json => super::print_json(&results),
        OutputFormat::Table => {
            let rows: Vec<_> = seeds.into_iter().zip(results).collect();
            reports::print_simulations(&rows);
            Ok(())
        }
    }
}
