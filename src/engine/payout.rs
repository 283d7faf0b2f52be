use super::lines::{count_left_to_right, line_symbols_into};
use super::types::{Evaluation, Grid, RawLineWin, RawScatterWin};
use super::Machine;
use crate::consts::{SymbolIdx, MIN_OF_A_KIND};

/// Scores every payline. Requires an exact `(symbol, count)` paytable entry;
/// a shorter entry never pays for a longer run.
pub fn evaluate_lines(machine: &Machine, grid: &Grid, eval: &mut Evaluation) {
    let mut symbols: Vec<SymbolIdx> = Vec::with_capacity(grid.columns);
    for (line, pattern) in machine.patterns.iter().enumerate() {
        line_symbols_into(grid, pattern, &mut symbols);
        let run = count_left_to_right(&symbols, |s| machine.is_wild(s));
        let Some(symbol) = run.symbol else {
            continue;
        };
        if run.count < MIN_OF_A_KIND {
            continue;
        }
        let multiplier = machine.multiplier(symbol, run.count);
        if multiplier > 0.0 {
            let payout = multiplier * machine.bet_per_line;
            eval.line_total += payout;
            eval.line_wins.push(RawLineWin {
                line,
                symbol,
                count: run.count,
                payout,
            });
        }
    }
}

/// Counts each scatter symbol anywhere on the grid and pays matching counts,
/// regardless of payline positions.
pub fn evaluate_scatters(machine: &Machine, grid: &Grid, eval: &mut Evaluation) {
    for &scatter in &machine.scatters {
        let count = grid.cells.iter().filter(|&&s| s == scatter).count();
        if count < MIN_OF_A_KIND {
            continue;
        }
        let multiplier = machine.multiplier(scatter, count);
        if multiplier > 0.0 {
            let payout = multiplier * machine.bet_per_line;
            eval.scatter_total += payout;
            eval.scatter_wins.push(RawScatterWin {
                symbol: scatter,
                count,
                payout,
            });
        }
    }
}

/// Lines and scatters are scored independently and summed.
pub fn evaluate_spin(machine: &Machine, grid: &Grid) -> Evaluation {
    let mut eval = Evaluation::default();
    evaluate_lines(machine, grid, &mut eval);
    evaluate_scatters(machine, grid, &mut eval);
    eval
}
