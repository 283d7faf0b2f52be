use crate::consts::{
    DEFAULT_LAMBDA, DEFAULT_OPTIMIZE_ITERS, DEFAULT_OPTIMIZE_SPINS, DEFAULT_SEED,
    DEFAULT_SIMULATE_SPINS, DEFAULT_TARGET_RTP,
};
use crate::error::{ReelTuneError, RtResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinParams {
    #[arg(short, long, default_value = DEFAULT_SEED)]
    pub seed: String,
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateParams {
    #[arg(short, long, default_value = DEFAULT_SEED)]
    pub seed: String,
    #[arg(long, default_value_t = DEFAULT_SIMULATE_SPINS)]
    pub spins: usize,
}

impl Default for SimulateParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            spins: DEFAULT_SIMULATE_SPINS,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizeParams {
    #[arg(short, long, default_value = DEFAULT_SEED)]
    pub seed: String,
    #[arg(long, default_value_t = DEFAULT_OPTIMIZE_SPINS)]
    pub spins: usize,
    #[arg(long = "iters", default_value_t = DEFAULT_OPTIMIZE_ITERS)]
    #[serde(alias = "iters")]
    pub iterations: usize,
    #[arg(long = "targetRTP", default_value_t = DEFAULT_TARGET_RTP)]
    #[serde(rename = "targetRTP")]
    pub target_rtp: f64,
    #[arg(long = "targetVol")]
    #[serde(rename = "targetVol")]
    pub target_vol: Option<f64>,
    #[arg(long, default_value_t = DEFAULT_LAMBDA)]
    pub lambda: f64,
}

impl Default for OptimizeParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            spins: DEFAULT_OPTIMIZE_SPINS,
            iterations: DEFAULT_OPTIMIZE_ITERS,
            target_rtp: DEFAULT_TARGET_RTP,
            target_vol: None,
            lambda: DEFAULT_LAMBDA,
        }
    }
}

/// Run parameters kept in a JSON file (`--params`). Flags given explicitly on
/// the command line override the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunProfile {
    pub spin: SpinParams,
    pub simulate: SimulateParams,
    pub optimize: OptimizeParams,
}

impl RunProfile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RtResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ReelTuneError::Config(format!("{}: {}", path.display(), e)))
    }
}

macro_rules! update_if_present {
    ($self:ident, $cli:ident, $matches:ident, $field:ident) => {
        if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
            $self.$field = $cli.$field.clone();
        }
    };
}

impl SpinParams {
    pub fn merge_from_cli(&mut self, cli: &SpinParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, seed);
    }
}

impl SimulateParams {
    pub fn merge_from_cli(&mut self, cli: &SimulateParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, seed);
        update_if_present!(self, cli, matches, spins);
    }
}

impl OptimizeParams {
    pub fn merge_from_cli(&mut self, cli: &OptimizeParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, seed);
        update_if_present!(self, cli, matches, spins);
        update_if_present!(self, cli, matches, iterations);
        update_if_present!(self, cli, matches, target_rtp);
        update_if_present!(self, cli, matches, target_vol);
        update_if_present!(self, cli, matches, lambda);
    }
}
