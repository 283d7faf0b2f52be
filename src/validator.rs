//! Shape and range checks for incoming spec documents.
//!
//! The validator never panics on malformed input. It walks the whole document,
//! records every violation under its field path, and only decodes into a
//! [`GameSpec`] when nothing was wrong.

use crate::consts::{COLUMNS_RANGE, MAX_OF_A_KIND, MAX_SYMBOLS, MIN_OF_A_KIND, ROWS_RANGE};
use crate::error::{FieldError, SchemaError};
use crate::spec::{GameSpec, SymbolKind};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::debug;

pub type ValidationResult = Result<GameSpec, SchemaError>;

/// Validates an arbitrary JSON document against the `GameSpec` shape and its
/// numeric invariants.
pub fn validate(doc: &Value) -> ValidationResult {
    let mut ck = Checker::default();
    check_document(&mut ck, doc);

    if !ck.errors.is_empty() {
        debug!("Spec rejected with {} error(s)", ck.errors.len());
        return Err(SchemaError { errors: ck.errors });
    }

    serde_json::from_value::<GameSpec>(doc.clone()).map_err(|e| SchemaError {
        errors: vec![FieldError::new("$", e.to_string())],
    })
}

/// Re-runs the document rules on an already-typed spec.
pub fn check(spec: &GameSpec) -> Result<(), SchemaError> {
    let doc = serde_json::to_value(spec).map_err(|e| SchemaError {
        errors: vec![FieldError::new("$", e.to_string())],
    })?;
    validate(&doc).map(|_| ())
}

#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn push(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(path, message));
    }

    fn required<'a>(&mut self, v: Option<&'a Value>, path: &str) -> Option<&'a Value> {
        if v.is_none() {
            self.push(path, "is required");
        }
        v
    }

    fn object<'a>(&mut self, v: Option<&'a Value>, path: &str) -> Option<&'a Map<String, Value>> {
        match self.required(v, path)? {
            Value::Object(m) => Some(m),
            other => {
                self.push(path, format!("expected object, found {}", type_name(other)));
                None
            }
        }
    }

    fn array<'a>(&mut self, v: Option<&'a Value>, path: &str) -> Option<&'a Vec<Value>> {
        match self.required(v, path)? {
            Value::Array(a) => Some(a),
            other => {
                self.push(path, format!("expected array, found {}", type_name(other)));
                None
            }
        }
    }

    fn string<'a>(&mut self, v: Option<&'a Value>, path: &str) -> Option<&'a str> {
        match self.required(v, path)? {
            Value::String(s) => Some(s.as_str()),
            other => {
                self.push(path, format!("expected string, found {}", type_name(other)));
                None
            }
        }
    }

    fn number(&mut self, v: Option<&Value>, path: &str) -> Option<f64> {
        match self.required(v, path)? {
            Value::Number(n) => n.as_f64().filter(|x| x.is_finite()).or_else(|| {
                self.push(path, "expected a finite number");
                None
            }),
            other => {
                self.push(path, format!("expected number, found {}", type_name(other)));
                None
            }
        }
    }

    fn integer(&mut self, v: Option<&Value>, path: &str) -> Option<u64> {
        match self.required(v, path)? {
            Value::Number(n) => n.as_u64().or_else(|| {
                self.push(path, format!("expected non-negative integer, found {}", n));
                None
            }),
            other => {
                self.push(path, format!("expected integer, found {}", type_name(other)));
                None
            }
        }
    }

    fn integer_in(
        &mut self,
        v: Option<&Value>,
        path: &str,
        range: std::ops::RangeInclusive<u64>,
    ) -> Option<u64> {
        let n = self.integer(v, path)?;
        if !range.contains(&n) {
            self.push(
                path,
                format!("must be between {} and {}, got {}", range.start(), range.end(), n),
            );
            return None;
        }
        Some(n)
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn check_document(ck: &mut Checker, doc: &Value) {
    let Some(root) = ck.object(Some(doc), "$") else {
        return;
    };

    check_meta(ck, root);
    let (columns, rows) = check_dimensions(ck, root);
    let declared = check_symbols(ck, root);
    check_strips(ck, root, columns, declared.as_ref());
    check_paytable(ck, root, declared.as_ref());
    check_paylines(ck, root, columns, rows);
    check_bet(ck, root);

    if let Some(rtp) = ck.number(root.get("targetRTP"), "targetRTP") {
        if !(rtp > 0.0 && rtp <= 1.0) {
            ck.push("targetRTP", format!("must be in (0, 1], got {}", rtp));
        }
    }
    // jackpots / features are opaque and optional.
}

fn check_meta(ck: &mut Checker, root: &Map<String, Value>) {
    let Some(meta) = ck.object(root.get("meta"), "meta") else {
        return;
    };
    if let Some(name) = ck.string(meta.get("name"), "meta.name") {
        if name.trim().is_empty() {
            ck.push("meta.name", "must not be empty");
        }
    }
    ck.string(meta.get("version"), "meta.version");
}

/// Returns `(columns, rows)` when they are present and in range.
fn check_dimensions(ck: &mut Checker, root: &Map<String, Value>) -> (Option<usize>, Option<usize>) {
    let Some(reels) = ck.object(root.get("reels"), "reels") else {
        return (None, None);
    };
    let columns = ck.integer_in(reels.get("columns"), "reels.columns", COLUMNS_RANGE);
    let rows = ck.integer_in(reels.get("rows"), "reels.rows", ROWS_RANGE);
    (columns.map(|c| c as usize), rows.map(|r| r as usize))
}

/// Returns the set of declared symbol ids, or `None` when the catalog itself
/// is unusable (cross-references are then not checked).
fn check_symbols(ck: &mut Checker, root: &Map<String, Value>) -> Option<HashSet<String>> {
    let symbols = ck.array(root.get("symbols"), "symbols")?;
    if symbols.is_empty() {
        ck.push("symbols", "must declare at least one symbol");
    } else if symbols.len() > MAX_SYMBOLS {
        ck.push(
            "symbols",
            format!("at most {} symbols are supported, got {}", MAX_SYMBOLS, symbols.len()),
        );
    }

    let mut ids = HashSet::new();
    let mut complete = true;
    for (i, sym) in symbols.iter().enumerate() {
        let path = format!("symbols[{}]", i);
        let Some(obj) = ck.object(Some(sym), &path) else {
            complete = false;
            continue;
        };

        let id_path = join(&path, "id");
        let id = ck.string(obj.get("id"), &id_path);
        complete &= id.is_some();
        if let Some(id) = id {
            if id.is_empty() {
                ck.push(&id_path, "must not be empty");
            } else if !ids.insert(id.to_string()) {
                ck.push(&id_path, format!("duplicate symbol id '{}'", id));
            }
        }

        let kind_path = join(&path, "kind");
        if let Some(kind) = ck.string(obj.get("kind"), &kind_path) {
            if SymbolKind::from_str(kind).is_err() {
                ck.push(
                    &kind_path,
                    format!("unknown kind '{}' (expected regular, wild or scatter)", kind),
                );
            }
        }

        let weight_path = join(&path, "weight");
        if let Some(w) = ck.number(obj.get("weight"), &weight_path) {
            if w <= 0.0 {
                ck.push(&weight_path, format!("must be > 0, got {}", w));
            }
        }
    }
    complete.then_some(ids)
}

fn check_strips(
    ck: &mut Checker,
    root: &Map<String, Value>,
    columns: Option<usize>,
    declared: Option<&HashSet<String>>,
) {
    let Some(Value::Object(reels)) = root.get("reels") else {
        return;
    };
    let Some(strips) = ck.array(reels.get("strips"), "reels.strips") else {
        return;
    };

    if let Some(cols) = columns {
        if strips.len() != cols {
            ck.push(
                "reels.strips",
                format!("expected {} strips (one per column), got {}", cols, strips.len()),
            );
        }
    }

    for (c, strip) in strips.iter().enumerate() {
        let path = format!("reels.strips[{}]", c);
        let Some(cells) = ck.array(Some(strip), &path) else {
            continue;
        };
        for (r, cell) in cells.iter().enumerate() {
            let cell_path = format!("{}[{}]", path, r);
            if let Some(id) = ck.string(Some(cell), &cell_path) {
                if let Some(ids) = declared {
                    if !ids.contains(id) {
                        ck.push(&cell_path, format!("unknown symbol '{}'", id));
                    }
                }
            }
        }
    }
}

fn check_paytable(ck: &mut Checker, root: &Map<String, Value>, declared: Option<&HashSet<String>>) {
    let Some(entries) = ck.array(root.get("paytable"), "paytable") else {
        return;
    };

    for (i, entry) in entries.iter().enumerate() {
        let path = format!("paytable[{}]", i);
        let Some(obj) = ck.object(Some(entry), &path) else {
            continue;
        };

        let sym_path = join(&path, "symbol");
        if let Some(sym) = ck.string(obj.get("symbol"), &sym_path) {
            if let Some(ids) = declared {
                if !ids.contains(sym) {
                    ck.push(&sym_path, format!("references undeclared symbol '{}'", sym));
                }
            }
        }

        ck.integer_in(
            obj.get("ofAKind"),
            &join(&path, "ofAKind"),
            MIN_OF_A_KIND as u64..=MAX_OF_A_KIND as u64,
        );

        let payout_path = join(&path, "payout");
        if let Some(p) = ck.number(obj.get("payout"), &payout_path) {
            if p < 0.0 {
                ck.push(&payout_path, format!("must be >= 0, got {}", p));
            }
        }
    }
}

fn check_paylines(
    ck: &mut Checker,
    root: &Map<String, Value>,
    columns: Option<usize>,
    rows: Option<usize>,
) {
    let Some(lines) = ck.array(root.get("paylines"), "paylines") else {
        return;
    };

    let mut ids = HashSet::new();
    for (i, line) in lines.iter().enumerate() {
        let path = format!("paylines[{}]", i);
        let Some(obj) = ck.object(Some(line), &path) else {
            continue;
        };

        let id_path = join(&path, "id");
        if let Some(id) = ck.string(obj.get("id"), &id_path) {
            if !ids.insert(id.to_string()) {
                ck.push(&id_path, format!("duplicate payline id '{}'", id));
            }
        }

        let pat_path = join(&path, "pattern");
        let Some(pattern) = ck.array(obj.get("pattern"), &pat_path) else {
            continue;
        };
        if let Some(cols) = columns {
            if pattern.len() != cols {
                ck.push(
                    &pat_path,
                    format!("expected {} entries (one per column), got {}", cols, pattern.len()),
                );
            }
        }
        for (c, row) in pattern.iter().enumerate() {
            let row_path = format!("{}[{}]", pat_path, c);
            if let Some(r) = ck.integer(Some(row), &row_path) {
                if let Some(max_rows) = rows {
                    if r as usize >= max_rows {
                        ck.push(
                            &row_path,
                            format!("row {} is outside the grid (rows = {})", r, max_rows),
                        );
                    }
                }
            }
        }
    }
}

fn check_bet(ck: &mut Checker, root: &Map<String, Value>) {
    let Some(bet) = ck.object(root.get("bet"), "bet") else {
        return;
    };
    ck.string(bet.get("currency"), "bet.currency");

    if let Some(b) = ck.number(bet.get("betPerLine"), "bet.betPerLine") {
        if b <= 0.0 {
            ck.push("bet.betPerLine", format!("must be > 0, got {}", b));
        }
    }
    if let Some(l) = ck.integer(bet.get("lines"), "bet.lines") {
        if l == 0 {
            ck.push("bet.lines", "must be at least 1, got 0");
        } else if l > u32::MAX as u64 {
            ck.push("bet.lines", format!("must be at most {}, got {}", u32::MAX, l));
        }
    }
}
