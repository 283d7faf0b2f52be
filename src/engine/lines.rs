use super::types::Grid;
use crate::consts::SymbolIdx;

/// A left-aligned run on one payline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun<T> {
    /// The paying symbol, `None` when the line has no non-wild symbol.
    pub symbol: Option<T>,
    pub count: usize,
}

impl<T> LineRun<T> {
    pub fn none() -> Self {
        Self {
            symbol: None,
            count: 0,
        }
    }
}

/// Reads one symbol per column at the pattern's row.
///
/// A pattern shorter than the grid reads row 0 for the missing columns.
pub fn get_line_symbols(grid: &Grid, pattern: &[usize]) -> Vec<SymbolIdx> {
    let mut out = Vec::with_capacity(grid.columns);
    line_symbols_into(grid, pattern, &mut out);
    out
}

#[inline(always)]
pub fn line_symbols_into(grid: &Grid, pattern: &[usize], out: &mut Vec<SymbolIdx>) {
    out.clear();
    for col in 0..grid.columns {
        // Short pattern: tolerated, defaults to the top row.
        let row = pattern.get(col).copied().unwrap_or(0);
        out.push(grid.get(row, col));
    }
}

/// Finds the paying symbol (first non-wild from the left) and counts the
/// contiguous run of that symbol or wilds starting at column 0.
///
/// Leading wilds are absorbed into the symbol that follows them; a line made
/// only of wilds never pays.
pub fn count_left_to_right<T, F>(symbols: &[T], is_wild: F) -> LineRun<T>
where
    T: Copy + PartialEq,
    F: Fn(T) -> bool,
{
    let Some(&paying) = symbols.iter().find(|&&s| !is_wild(s)) else {
        return LineRun::none();
    };

    let count = symbols
        .iter()
        .take_while(|&&s| is_wild(s) || s == paying)
        .count();

    LineRun {
        symbol: Some(paying),
        count,
    }
}
