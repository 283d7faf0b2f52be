/// Compiled symbol index. Strips, grids and pay tables all work on these
/// instead of symbol-id strings.
pub type SymbolIdx = u16;

/// Placeholder for a cell that no strip symbol filled (empty strip, or a
/// payline row outside the grid). Never matches a paytable entry.
pub const BLANK: SymbolIdx = u16::MAX;

/// Largest symbol catalog a machine can index; `BLANK` itself is reserved.
pub const MAX_SYMBOLS: usize = BLANK as usize;

/// How a blank cell is rendered in results.
pub const BLANK_LABEL: &str = "";

/// Largest "of a kind" count a paytable entry may declare.
pub const MAX_OF_A_KIND: usize = 5;

/// Smallest run (or scatter count) that can pay.
pub const MIN_OF_A_KIND: usize = 2;

pub const ROWS_RANGE: std::ops::RangeInclusive<u64> = 3..=6;
pub const COLUMNS_RANGE: std::ops::RangeInclusive<u64> = 3..=7;

/// Annealing temperature never decays below this.
pub const TEMPERATURE_FLOOR: f64 = 0.01;

pub const DEFAULT_SEED: &str = "demo";
pub const DEFAULT_SIMULATE_SPINS: usize = 5000;
pub const DEFAULT_OPTIMIZE_SPINS: usize = 2000;
pub const DEFAULT_OPTIMIZE_ITERS: usize = 20;
pub const DEFAULT_TARGET_RTP: f64 = 0.95;
pub const DEFAULT_LAMBDA: f64 = 0.2;
