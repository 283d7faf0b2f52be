use super::print_grid;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use reeltune::engine::SpinResult;
use reeltune::optimizer::OptimizeResult;
use reeltune::simulator::SimulationResult;
use reeltune::spec::GameSpec;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_spin(result: &SpinResult) {
    print_grid("Grid:", &result.grid);

    if result.line_wins.is_empty() && result.scatter_wins.is_empty() {
        println!("\nNo wins.");
    } else {
        let mut table = new_table();
        table.add_row(vec![
            Cell::new("Win").add_attribute(Attribute::Bold),
            Cell::new("Symbol"),
            Cell::new("Count"),
            Cell::new("Payout").fg(Color::Green),
        ]);
        align_right(&mut table, 2..=3);

        for w in &result.line_wins {
            table.add_row(vec![
                Cell::new(format!("line {}", w.line_id)).add_attribute(Attribute::Bold),
                Cell::new(&w.symbol),
                Cell::new(w.of_a_kind),
                Cell::new(format!("{:.2}", w.payout)).fg(Color::Green),
            ]);
        }
        for w in &result.scatter_wins {
            table.add_row(vec![
                Cell::new("scatter").add_attribute(Attribute::Bold),
                Cell::new(&w.symbol),
                Cell::new(w.count),
                Cell::new(format!("{:.2}", w.payout)).fg(Color::Green),
            ]);
        }
        println!("\n{}", table);
    }

    println!("Total win: {:.2}", result.total_win);
}

pub fn print_simulations(results: &[(String, SimulationResult)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Seed").add_attribute(Attribute::Bold),
        Cell::new("Spins"),
        Cell::new("RTP").fg(Color::Cyan),
        Cell::new("Hit Rate"),
        Cell::new("Volatility"),
        Cell::new("Total Win"),
    ]);
    align_right(&mut table, 1..=5);

    for (seed, r) in results {
        table.add_row(vec![
            Cell::new(seed).add_attribute(Attribute::Bold),
            Cell::new(r.spins),
            Cell::new(format!("{:.2}%", r.metrics.rtp * 100.0)).fg(Color::Cyan),
            Cell::new(format!("{:.2}%", r.metrics.hit_rate * 100.0)),
            Cell::new(format!("{:.4}", r.metrics.volatility)),
            Cell::new(format!("{:.2}", r.total_win)),
        ]);
    }

    if results.len() > 1 {
        let n = results.len() as f64;
        let mean = |f: fn(&SimulationResult) -> f64| {
            results.iter().map(|(_, r)| f(r)).sum::<f64>() / n
        };
        table.add_row(vec![
            Cell::new("mean").add_attribute(Attribute::Bold),
            Cell::new(""),
            Cell::new(format!("{:.2}%", mean(|r| r.metrics.rtp) * 100.0))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}%", mean(|r| r.metrics.hit_rate) * 100.0)),
            Cell::new(format!("{:.4}", mean(|r| r.metrics.volatility))),
            Cell::new(""),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_optimization(result: &OptimizeResult) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Optimization").add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    align_right(&mut table, 1..=1);

    table.add_row(vec![
        Cell::new("RTP"),
        Cell::new(format!("{:.4}", result.rtp)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Volatility"),
        Cell::new(format!("{:.4}", result.volatility)),
    ]);
    table.add_row(vec![
        Cell::new("Objective").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.6}", result.objective)).fg(Color::Green),
    ]);
    table.add_row(vec![Cell::new("Rounds"), Cell::new(result.iterations)]);
    table.add_row(vec![Cell::new("Accepted"), Cell::new(result.accepted)]);
    println!("\n{}", table);

    let mut strips = new_table();
    strips.add_row(vec![
        Cell::new("Reel").add_attribute(Attribute::Bold),
        Cell::new("Strip"),
    ]);
    for (i, strip) in result.best_spec.reels.strips.iter().enumerate() {
        strips.add_row(vec![Cell::new(i + 1), Cell::new(strip.join(" "))]);
    }
    println!("{}", strips);
}

pub fn print_spec_summary(spec: &GameSpec) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Symbol").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Weight"),
        Cell::new("Pays (count: x)"),
    ]);
    align_right(&mut table, 2..=2);

    for sym in &spec.symbols {
        let pays: Vec<String> = spec
            .paytable
            .iter()
            .filter(|p| p.symbol == sym.id)
            .map(|p| format!("{}: {}", p.of_a_kind, p.payout))
            .collect();
        table.add_row(vec![
            Cell::new(&sym.id).add_attribute(Attribute::Bold),
            Cell::new(sym.kind.to_string()),
            Cell::new(format!("{}", sym.weight)),
            Cell::new(pays.join(", ")),
        ]);
    }
    println!("\n{}", table);

    println!(
        "{}x{} reels, {} paylines, bet {} {} x {} lines, target RTP {:.2}%",
        spec.reels.columns,
        spec.reels.rows,
        spec.paylines.len(),
        spec.bet.bet_per_line,
        spec.bet.currency,
        spec.bet.lines,
        spec.target_rtp * 100.0
    );
}
