use crate::error::RtResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

/// Declarative description of a reel game.
///
/// Built from external data, validated once (see [`crate::validator`]) and then
/// treated as immutable. The optimizer only ever mutates clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSpec {
    pub meta: SpecMeta,
    pub reels: ReelSet,
    pub symbols: Vec<SymbolDef>,
    pub paytable: Vec<PayEntry>,
    pub paylines: Vec<Payline>,
    pub bet: BetConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jackpots: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Value>,
    #[serde(rename = "targetRTP")]
    pub target_rtp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SpecMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelSet {
    pub columns: usize,
    pub rows: usize,
    /// One ordered strip of symbol ids per column.
    pub strips: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SymbolKind {
    Regular,
    Wild,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolDef {
    pub id: String,
    pub kind: SymbolKind,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayEntry {
    pub symbol: String,
    pub of_a_kind: usize,
    /// Multiplier applied to the bet per line.
    pub payout: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payline {
    pub id: String,
    /// Row index per column.
    pub pattern: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetConfig {
    pub currency: String,
    pub bet_per_line: f64,
    pub lines: u32,
}

impl GameSpec {
    /// Reads a spec document from disk without validating it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RtResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Wager for one spin; the simulator always bets every line.
    #[inline]
    pub fn bet_per_spin(&self) -> f64 {
        self.bet.bet_per_line * self.bet.lines as f64
    }

    pub fn symbol(&self, id: &str) -> Option<&SymbolDef> {
        self.symbols.iter().find(|s| s.id == id)
    }
}

/// Reads a spec file as an untyped JSON document, ready for validation.
pub fn read_document<P: AsRef<Path>>(path: P) -> RtResult<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
