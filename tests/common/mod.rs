#![allow(dead_code)]

use reeltune::spec::{
    BetConfig, GameSpec, PayEntry, Payline, ReelSet, SpecMeta, SymbolDef, SymbolKind,
};
use serde_json::Value;

/// Builder for GameSpec to keep tests short.
pub struct SpecBuilder {
    spec: GameSpec,
}

impl SpecBuilder {
    /// Empty 5x3 machine: no symbols, strips, pays or lines.
    pub fn new() -> Self {
        Self {
            spec: GameSpec {
                meta: SpecMeta {
                    name: "test".to_string(),
                    version: "1.0.0".to_string(),
                },
                reels: ReelSet {
                    columns: 5,
                    rows: 3,
                    strips: vec![],
                },
                symbols: vec![],
                paytable: vec![],
                paylines: vec![],
                bet: BetConfig {
                    currency: "EUR".to_string(),
                    bet_per_line: 1.0,
                    lines: 1,
                },
                jackpots: None,
                features: None,
                target_rtp: 0.95,
            },
        }
    }

    pub fn size(mut self, columns: usize, rows: usize) -> Self {
        self.spec.reels.columns = columns;
        self.spec.reels.rows = rows;
        self
    }

    pub fn symbol(mut self, id: &str, kind: SymbolKind) -> Self {
        self.spec.symbols.push(SymbolDef {
            id: id.to_string(),
            kind,
            weight: 1.0,
        });
        self
    }

    pub fn strip(mut self, ids: &[&str]) -> Self {
        self.spec
            .reels
            .strips
            .push(ids.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Same strip on every column.
    pub fn uniform_strips(mut self, ids: &[&str]) -> Self {
        self.spec.reels.strips = (0..self.spec.reels.columns)
            .map(|_| ids.iter().map(|s| s.to_string()).collect())
            .collect();
        self
    }

    pub fn pay(mut self, symbol: &str, of_a_kind: usize, payout: f64) -> Self {
        self.spec.paytable.push(PayEntry {
            symbol: symbol.to_string(),
            of_a_kind,
            payout,
        });
        self
    }

    pub fn line(mut self, id: &str, pattern: &[usize]) -> Self {
        self.spec.paylines.push(Payline {
            id: id.to_string(),
            pattern: pattern.to_vec(),
        });
        self
    }

    pub fn bet(mut self, bet_per_line: f64, lines: u32) -> Self {
        self.spec.bet.bet_per_line = bet_per_line;
        self.spec.bet.lines = lines;
        self
    }

    pub fn build(self) -> GameSpec {
        self.spec
    }
}

/// 5x3, every cell is `A`, five lines each paying 1 for five `A`.
/// Every spin wins exactly 5 at a bet of 5.
pub fn uniform_spec() -> GameSpec {
    SpecBuilder::new()
        .symbol("A", SymbolKind::Regular)
        .uniform_strips(&["A"])
        .pay("A", 5, 1.0)
        .line("top", &[0, 0, 0, 0, 0])
        .line("mid", &[1, 1, 1, 1, 1])
        .line("bot", &[2, 2, 2, 2, 2])
        .line("v", &[0, 1, 2, 1, 0])
        .line("hat", &[2, 1, 0, 1, 2])
        .bet(1.0, 5)
        .build()
}

/// Small classic machine with a wild, a scatter and mixed strips.
pub fn classic_spec() -> GameSpec {
    SpecBuilder::new()
        .symbol("A", SymbolKind::Regular)
        .symbol("K", SymbolKind::Regular)
        .symbol("Q", SymbolKind::Regular)
        .symbol("W", SymbolKind::Wild)
        .symbol("S", SymbolKind::Scatter)
        .strip(&["A", "K", "Q", "W", "A", "Q", "K", "S", "Q", "A"])
        .strip(&["K", "A", "Q", "A", "S", "K", "Q", "W", "Q", "K"])
        .strip(&["Q", "A", "K", "Q", "W", "A", "S", "Q", "K", "A"])
        .strip(&["A", "Q", "K", "S", "Q", "A", "K", "W", "A", "Q"])
        .strip(&["K", "Q", "A", "K", "Q", "S", "A", "Q", "W", "K"])
        .pay("A", 3, 5.0)
        .pay("A", 4, 10.0)
        .pay("A", 5, 50.0)
        .pay("K", 3, 2.0)
        .pay("K", 5, 20.0)
        .pay("Q", 3, 1.0)
        .pay("S", 3, 4.0)
        .line("top", &[0, 0, 0, 0, 0])
        .line("mid", &[1, 1, 1, 1, 1])
        .line("bot", &[2, 2, 2, 2, 2])
        .bet(1.0, 3)
        .build()
}

pub fn to_doc(spec: &GameSpec) -> Value {
    serde_json::to_value(spec).unwrap()
}

/// Parses a row-major grid written as space-separated ids; `_` is blank.
pub fn grid(rows: &[&str]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            r.split_whitespace()
                .map(|c| if c == "_" { String::new() } else { c.to_string() })
                .collect()
        })
        .collect()
}

pub fn sorted_strips(spec: &GameSpec) -> Vec<Vec<String>> {
    spec.reels
        .strips
        .iter()
        .map(|s| {
            let mut s = s.clone();
            s.sort();
            s
        })
        .collect()
}
