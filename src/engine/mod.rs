pub mod lines;
pub mod payout;
pub mod reels;
pub mod types;

pub use self::types::{Evaluation, Grid, LineWin, ScatterWin, SpinResult};

use crate::consts::{SymbolIdx, BLANK, BLANK_LABEL, MAX_OF_A_KIND, MAX_SYMBOLS};
use crate::rng::RandomSource;
use crate::spec::{GameSpec, SymbolKind};
use std::collections::HashMap;
use tracing::warn;

const PAY_STRIDE: usize = MAX_OF_A_KIND + 1;

/// A [`GameSpec`] compiled into flat lookup tables for the spin loop.
///
/// Symbol ids are interned to [`SymbolIdx`] values. Strip or paytable symbols
/// missing from the catalog are interned as regular symbols so an unvalidated
/// spec still compiles.
pub struct Machine {
    pub rows: usize,
    pub columns: usize,
    pub bet_per_line: f64,
    pub bet_per_spin: f64,

    // --- Symbol catalog ---
    pub names: Vec<String>,
    pub index: HashMap<String, SymbolIdx>,
    pub wild_mask: Vec<bool>,
    pub scatters: Vec<SymbolIdx>,

    // --- Reels & lines ---
    pub strips: Vec<Vec<SymbolIdx>>,
    pub line_ids: Vec<String>,
    pub patterns: Vec<Vec<usize>>,

    /// `pay_table[symbol * PAY_STRIDE + count]`, exact-count multipliers.
    pub pay_table: Vec<f64>,
}

/// Reusable buffers for repeated spins on one machine.
pub struct SpinScratch {
    pub grid: Grid,
    window: Vec<SymbolIdx>,
}

impl Machine {
    pub fn new(spec: &GameSpec) -> Self {
        let mut catalog = Catalog::default();
        for sym in &spec.symbols {
            catalog.declare(&sym.id, sym.kind);
        }

        let strips: Vec<Vec<SymbolIdx>> = spec
            .reels
            .strips
            .iter()
            .map(|strip| strip.iter().map(|id| catalog.intern(id)).collect())
            .collect();

        for (col, strip) in strips.iter().enumerate() {
            if strip.is_empty() {
                warn!("Reel {} has an empty strip; it will show blanks", col);
            }
        }
        if strips.len() < spec.reels.columns {
            warn!(
                "Only {} strips for {} columns; missing columns show blanks",
                strips.len(),
                spec.reels.columns
            );
        }

        let mut line_ids = Vec::with_capacity(spec.paylines.len());
        let mut patterns = Vec::with_capacity(spec.paylines.len());
        for line in &spec.paylines {
            if line.pattern.len() < spec.reels.columns {
                warn!(
                    "Payline '{}' covers {} of {} columns; the rest read row 0",
                    line.id,
                    line.pattern.len(),
                    spec.reels.columns
                );
            }
            line_ids.push(line.id.clone());
            patterns.push(line.pattern.clone());
        }

        // Intern paytable symbols before sizing the table.
        let pay_refs: Vec<(SymbolIdx, usize, f64)> = spec
            .paytable
            .iter()
            .map(|e| (catalog.intern(&e.symbol), e.of_a_kind, e.payout))
            .collect();

        let mut pay_table = vec![0.0; catalog.names.len() * PAY_STRIDE];
        let mut filled = vec![false; pay_table.len()];
        for (sym, count, payout) in pay_refs {
            if sym == BLANK || count >= PAY_STRIDE {
                continue;
            }
            let slot = sym as usize * PAY_STRIDE + count;
            // First entry for a (symbol, count) pair wins.
            if !filled[slot] {
                pay_table[slot] = payout;
                filled[slot] = true;
            }
        }

        let wild_mask = catalog.kinds.iter().map(|&k| k == SymbolKind::Wild).collect();
        let scatters = catalog
            .kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == SymbolKind::Scatter)
            .map(|(i, _)| i as SymbolIdx)
            .collect();

        Self {
            rows: spec.reels.rows,
            columns: spec.reels.columns,
            bet_per_line: spec.bet.bet_per_line,
            bet_per_spin: spec.bet_per_spin(),
            names: catalog.names,
            index: catalog.index,
            wild_mask,
            scatters,
            strips,
            line_ids,
            patterns,
            pay_table,
        }
    }

    #[inline(always)]
    pub fn is_wild(&self, sym: SymbolIdx) -> bool {
        self.wild_mask.get(sym as usize).copied().unwrap_or(false)
    }

    /// Exact-count multiplier, 0 when the paytable has no such entry.
    #[inline(always)]
    pub fn multiplier(&self, sym: SymbolIdx, count: usize) -> f64 {
        if sym == BLANK || count >= PAY_STRIDE {
            return 0.0;
        }
        self.pay_table
            .get(sym as usize * PAY_STRIDE + count)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn name(&self, sym: SymbolIdx) -> &str {
        self.names
            .get(sym as usize)
            .map(String::as_str)
            .unwrap_or(BLANK_LABEL)
    }

    pub fn symbol_index(&self, id: &str) -> Option<SymbolIdx> {
        self.index.get(id).copied()
    }

    pub fn scratch(&self) -> SpinScratch {
        SpinScratch {
            grid: Grid::new(self.rows, self.columns),
            window: vec![BLANK; self.rows],
        }
    }

    /// Samples a fresh grid. Each call advances `rng`.
    pub fn spin_grid(&self, rng: &mut RandomSource) -> Grid {
        let mut scratch = self.scratch();
        reels::fill_grid(&self.strips, rng, &mut scratch.grid, &mut scratch.window);
        scratch.grid
    }

    pub fn evaluate(&self, grid: &Grid) -> Evaluation {
        payout::evaluate_spin(self, grid)
    }

    /// Spin and score, reusing `scratch`. Returns the total win.
    #[inline]
    pub fn play(&self, rng: &mut RandomSource, scratch: &mut SpinScratch) -> f64 {
        reels::fill_grid(&self.strips, rng, &mut scratch.grid, &mut scratch.window);
        self.evaluate(&scratch.grid).total_win()
    }

    pub fn spin(&self, rng: &mut RandomSource) -> SpinResult {
        let grid = self.spin_grid(rng);
        let eval = self.evaluate(&grid);
        self.resolve(&grid, &eval)
    }

    /// Builds a grid from symbol ids. Unknown ids become blanks.
    pub fn grid_from_ids<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Grid {
        let indexed: Vec<Vec<SymbolIdx>> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|id| self.symbol_index(id.as_ref()).unwrap_or(BLANK))
                    .collect()
            })
            .collect();
        Grid::from_rows(&indexed)
    }

    /// Converts an index-level evaluation back to symbol ids.
    pub fn resolve(&self, grid: &Grid, eval: &Evaluation) -> SpinResult {
        let grid_ids = (0..grid.rows)
            .map(|r| {
                (0..grid.columns)
                    .map(|c| self.name(grid.get(r, c)).to_string())
                    .collect()
            })
            .collect();

        let line_wins = eval
            .line_wins
            .iter()
            .map(|w| LineWin {
                line_id: self.line_ids[w.line].clone(),
                of_a_kind: w.count,
                symbol: self.name(w.symbol).to_string(),
                payout: w.payout,
            })
            .collect();

        let scatter_wins = eval
            .scatter_wins
            .iter()
            .map(|w| ScatterWin {
                symbol: self.name(w.symbol).to_string(),
                count: w.count,
                payout: w.payout,
            })
            .collect();

        SpinResult {
            grid: grid_ids,
            line_wins,
            scatter_wins,
            total_win: eval.total_win(),
        }
    }
}

#[derive(Default)]
struct Catalog {
    names: Vec<String>,
    index: HashMap<String, SymbolIdx>,
    kinds: Vec<SymbolKind>,
    overflowed: bool,
}

impl Catalog {
    /// Returns `None` once the catalog is full.
    fn declare(&mut self, id: &str, kind: SymbolKind) -> Option<SymbolIdx> {
        if let Some(&idx) = self.index.get(id) {
            return Some(idx);
        }
        let Some(idx) = SymbolIdx::try_from(self.names.len())
            .ok()
            .filter(|&i| i != BLANK)
        else {
            if !self.overflowed {
                warn!(
                    "More than {} symbols; '{}' and later ids show as blanks",
                    MAX_SYMBOLS, id
                );
                self.overflowed = true;
            }
            return None;
        };
        self.names.push(id.to_string());
        self.index.insert(id.to_string(), idx);
        self.kinds.push(kind);
        Some(idx)
    }

    fn intern(&mut self, id: &str) -> SymbolIdx {
        self.declare(id, SymbolKind::Regular).unwrap_or(BLANK)
    }
}

/// Compiles `spec` and plays one spin.
pub fn spin(spec: &GameSpec, rng: &mut RandomSource) -> SpinResult {
    Machine::new(spec).spin(rng)
}

/// Scores a grid given as symbol ids (row-major) against `spec`.
pub fn evaluate_grid<S: AsRef<str>>(spec: &GameSpec, rows: &[Vec<S>]) -> SpinResult {
    let machine = Machine::new(spec);
    let grid = machine.grid_from_ids(rows);
    let eval = machine.evaluate(&grid);
    machine.resolve(&grid, &eval)
}
