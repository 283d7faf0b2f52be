use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};

pub fn print_grid(title: &str, rows: &[Vec<String>]) {
    println!("\n{}", title);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in rows {
        let cells: Vec<Cell> = row
            .iter()
            .map(|s| {
                let label = if s.is_empty() { "·" } else { s.as_str() };
                Cell::new(label).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
