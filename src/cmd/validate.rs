use super::SpecArgs;
use crate::reports::{self, OutputFormat};
use clap::Args;
use reeltune::spec::read_document;
use reeltune::validator;
use reeltune::RtResult;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub spec: SpecArgs,
}

pub fn run(args: &ValidateArgs, format: OutputFormat) -> RtResult<()> {
    let doc = read_document(&args.spec.spec)?;

    match validator::validate(&doc) {
        Ok(spec) => {
            println!(
                "✅ Spec '{}' v{} is valid",
                spec.meta.name, spec.meta.version
            );
            if format == OutputFormat::Table {
                reports::print_spec_summary(&spec);
            }
            Ok(())
        }
        Err(schema) => {
            println!("❌ Spec is invalid ({} error(s)):", schema.errors.len());
            for e in &schema.errors {
                println!("  - {}", e);
            }
            Err(schema.into())
        }
    }
}
