use super::SpecArgs;
use crate::reports::{self, OutputFormat};
use clap::Args;
use reeltune::config::SpinParams;
use reeltune::engine;
use reeltune::rng::RandomSource;
use reeltune::RtResult;

#[derive(Args, Debug, Clone)]
pub struct SpinArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    #[command(flatten)]
    pub params: SpinParams,
}

pub fn run(args: &SpinArgs, params: &SpinParams, format: OutputFormat) -> RtResult<()> {
    let spec = super::load_spec(&args.spec.spec)?;
    let mut rng = RandomSource::new(&params.seed);
    let result = engine::spin(&spec, &mut rng);

    match format {
        OutputFormat::Json => super::print_json(&result),
        OutputFormat::Table => {
            reports::print_spin(&result);
            Ok(())
        }
    }
}
