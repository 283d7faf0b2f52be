mod grid;
mod tables;

use clap::ValueEnum;
use strum_macros::Display;

pub use grid::print_grid;
pub use tables::{print_optimization, print_simulations, print_spec_summary, print_spin};

/// How command results are written to stdout.
#[derive(ValueEnum, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Table,
}
