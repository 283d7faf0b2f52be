use super::types::Grid;
use crate::consts::{SymbolIdx, BLANK};
use crate::rng::RandomSource;

/// Draws one stop position and returns `rows` consecutive symbols from the
/// strip, wrapping around its end.
///
/// An empty strip yields `rows` blanks and consumes no randomness.
pub fn sample_window(strip: &[SymbolIdx], rows: usize, rng: &mut RandomSource) -> Vec<SymbolIdx> {
    let mut out = vec![BLANK; rows];
    sample_window_into(strip, rng, &mut out);
    out
}

/// Allocation-free form of [`sample_window`]; fills all of `out`.
#[inline(always)]
pub fn sample_window_into(strip: &[SymbolIdx], rng: &mut RandomSource, out: &mut [SymbolIdx]) {
    if strip.is_empty() {
        // Degenerate reel: nothing to show.
        out.fill(BLANK);
        return;
    }
    let len = strip.len();
    let start = rng.int(len);
    for (r, cell) in out.iter_mut().enumerate() {
        *cell = strip[(start + r) % len];
    }
}

/// Samples every column's strip and writes the windows into `grid`.
/// Columns without a strip stay blank.
pub fn fill_grid(strips: &[Vec<SymbolIdx>], rng: &mut RandomSource, grid: &mut Grid, window: &mut [SymbolIdx]) {
    for col in 0..grid.columns {
        let strip = strips.get(col).map(Vec::as_slice).unwrap_or(&[]);
        sample_window_into(strip, rng, window);
        for (row, &sym) in window.iter().enumerate() {
            grid.set(row, col, sym);
        }
    }
}
