pub mod optimize;
pub mod simulate;
pub mod spin;
pub mod validate;

use clap::Args;
use reeltune::spec::{read_document, GameSpec};
use reeltune::validator;
use reeltune::RtResult;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SpecArgs {
    /// Path to the game spec (JSON).
    #[arg(long)]
    pub spec: PathBuf,
}

/// Reads and validates a spec; a rejected spec never reaches the engine.
pub fn load_spec(path: &Path) -> RtResult<GameSpec> {
    info!("📂 Loading spec: {}", path.display());
    let doc = read_document(path)?;
    let spec = validator::validate(&doc)?;
    info!(
        "🎰 {} v{}: {}x{} reels, {} paylines",
        spec.meta.name,
        spec.meta.version,
        spec.reels.columns,
        spec.reels.rows,
        spec.paylines.len()
    );
    Ok(spec)
}

pub fn print_json<T: Serialize>(value: &T) -> RtResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
