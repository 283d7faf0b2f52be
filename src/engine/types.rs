use crate::consts::{SymbolIdx, BLANK};
use serde::{Deserialize, Serialize};

/// Row-major `rows × columns` matrix of compiled symbol indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<SymbolIdx>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![BLANK; rows * columns],
        }
    }

    /// Builds a grid from row-major rows. Short rows are padded with blanks.
    pub fn from_rows(rows: &[Vec<SymbolIdx>]) -> Self {
        let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut grid = Self::new(rows.len(), columns);
        for (r, row) in rows.iter().enumerate() {
            for (c, &sym) in row.iter().enumerate() {
                grid.set(r, c, sym);
            }
        }
        grid
    }

    /// Cells outside the grid read as [`BLANK`].
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> SymbolIdx {
        if row >= self.rows || col >= self.columns {
            return BLANK;
        }
        self.cells[row * self.columns + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, sym: SymbolIdx) {
        self.cells[row * self.columns + col] = sym;
    }
}

/// One winning payline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineWin {
    pub line_id: String,
    pub of_a_kind: usize,
    pub symbol: String,
    pub payout: f64,
}

/// One paying scatter symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterWin {
    pub symbol: String,
    pub count: usize,
    pub payout: f64,
}

/// Outcome of a single spin, with symbols resolved back to their ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinResult {
    /// Row-major symbol ids; blank cells are empty strings.
    pub grid: Vec<Vec<String>>,
    pub line_wins: Vec<LineWin>,
    pub scatter_wins: Vec<ScatterWin>,
    pub total_win: f64,
}

/// Index-level line win produced in the hot loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawLineWin {
    pub line: usize,
    pub symbol: SymbolIdx,
    pub count: usize,
    pub payout: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScatterWin {
    pub symbol: SymbolIdx,
    pub count: usize,
    pub payout: f64,
}

/// Everything the evaluator found on one grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub line_wins: Vec<RawLineWin>,
    pub scatter_wins: Vec<RawScatterWin>,
    pub line_total: f64,
    pub scatter_total: f64,
}

impl Evaluation {
    #[inline(always)]
    pub fn total_win(&self) -> f64 {
        self.line_total + self.scatter_total
    }
}
