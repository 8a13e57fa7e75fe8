use regex::Regex;
use std::sync::LazyLock;

use crate::tokenizer::Table;

/// How many rows the inferrer inspects at most.
pub const SAMPLE_ROWS: usize = 20;

/// Share of non-empty sampled cells that must look numeric for a column to
/// count as numeric-looking. Tunable heuristic constant.
pub const NUMERIC_COLUMN_THRESHOLD: f64 = 0.6;

/// Minimum known-unit hit rate for a column to be assigned the unit role.
/// Tunable heuristic constant.
pub const UNIT_MATCH_THRESHOLD: f64 = 0.4;

/// Unit assumed when no unit column exists or a unit cell is empty.
pub const DEFAULT_UNIT: &str = "pc";

/// Short tokens accepted as units out of the box. Matching is
/// case-insensitive with one trailing `s` stripped, so `pcs`, `Sets` and
/// `UNITS` all match.
pub const DEFAULT_KNOWN_UNITS: &[&str] = &[
    "pc", "pcs", "set", "sets", "kg", "m", "length", "box", "ctn", "unit", "units",
];

static NUMERIC_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap());

/// Non-negative integer or decimal, nothing else.
pub fn is_numeric_cell(cell: &str) -> bool {
    NUMERIC_CELL.is_match(cell)
}

/// Lowercase and strip one trailing `s` so `Pcs` and `pc` compare equal.
pub fn normalize_unit(unit: &str) -> String {
    let lower = unit.trim().to_lowercase();
    lower.strip_suffix('s').unwrap_or(&lower).to_string()
}

pub fn is_known_unit(unit: &str, known_units: &[String]) -> bool {
    let normalized = normalize_unit(unit);
    known_units.iter().any(|k| normalize_unit(k) == normalized)
}

/// Semantic meaning of a positional column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Name,
    Quantity,
    Unit,
    UnitPrice,
    Remarks,
    Ignored,
}

/// Column index per role. One `Option` per role keeps the at-most-one
/// invariant by construction; unassigned columns are `Ignored`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMap {
    pub name: Option<usize>,
    pub quantity: Option<usize>,
    pub unit: Option<usize>,
    pub unit_price: Option<usize>,
    pub remarks: Option<usize>,
}

impl RoleMap {
    pub fn role_of(&self, col: usize) -> ColumnRole {
        if self.name == Some(col) {
            ColumnRole::Name
        } else if self.quantity == Some(col) {
            ColumnRole::Quantity
        } else if self.unit == Some(col) {
            ColumnRole::Unit
        } else if self.unit_price == Some(col) {
            ColumnRole::UnitPrice
        } else if self.remarks == Some(col) {
            ColumnRole::Remarks
        } else {
            ColumnRole::Ignored
        }
    }
}

/// Per-column value-shape statistics over the sampled rows.
struct ColumnProfile {
    index: usize,
    numeric_fraction: f64,
    unit_hit_rate: f64,
}

impl ColumnProfile {
    fn is_numeric(&self) -> bool {
        self.numeric_fraction >= NUMERIC_COLUMN_THRESHOLD
    }
}

/// Assign semantic roles to column positions.
///
/// Samples up to [`SAMPLE_ROWS`] rows matching the dominant column count;
/// rows of other lengths are noise for inference only. Rules run in
/// priority order, each claiming one column and removing it from the pool:
/// quantity, unit price, unit, name, remarks. Ties break toward the
/// left-most column.
pub fn infer_roles(table: &Table, dominant_cols: usize, known_units: &[String]) -> RoleMap {
    let mut map = RoleMap::default();
    if dominant_cols == 0 {
        return map;
    }

    let samples: Vec<_> = table
        .rows
        .iter()
        .filter(|r| r.cells.len() == dominant_cols)
        .take(SAMPLE_ROWS)
        .collect();
    if samples.is_empty() {
        return map;
    }

    let mut pool: Vec<ColumnProfile> = (0..dominant_cols)
        .map(|col| {
            let mut non_empty = 0usize;
            let mut numeric = 0usize;
            let mut unit_hits = 0usize;
            for row in &samples {
                let cell = row.cells[col].as_str();
                if cell.is_empty() {
                    continue;
                }
                non_empty += 1;
                if is_numeric_cell(cell) {
                    numeric += 1;
                }
                if is_known_unit(cell, known_units) {
                    unit_hits += 1;
                }
            }
            let fraction = |n: usize| {
                if non_empty == 0 {
                    0.0
                } else {
                    n as f64 / non_empty as f64
                }
            };
            ColumnProfile {
                index: col,
                numeric_fraction: fraction(numeric),
                unit_hit_rate: fraction(unit_hits),
            }
        })
        .collect();

    // 1. quantity: best numeric column. When numeric columns crowd the
    // table (more than total minus 2), take the left-most instead so name
    // and unit price still have room.
    let numeric_indices: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_numeric())
        .map(|(i, _)| i)
        .collect();
    if !numeric_indices.is_empty() {
        let pick = if numeric_indices.len() > dominant_cols.saturating_sub(2) {
            numeric_indices[0]
        } else {
            *numeric_indices
                .iter()
                .max_by(|&&a, &&b| {
                    pool[a]
                        .numeric_fraction
                        .partial_cmp(&pool[b].numeric_fraction)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(pool[b].index.cmp(&pool[a].index))
                })
                .unwrap()
        };
        map.quantity = Some(pool.remove(pick).index);
    }

    // 2. unit price: right-most remaining numeric column.
    if let Some(pick) = pool.iter().rposition(ColumnProfile::is_numeric) {
        map.unit_price = Some(pool.remove(pick).index);
    }

    // 3. unit: best known-token hit rate, if it clears the threshold.
    if let Some(pick) = pool
        .iter()
        .enumerate()
        .filter(|(_, p)| p.unit_hit_rate >= UNIT_MATCH_THRESHOLD)
        .max_by(|(_, a), (_, b)| {
            a.unit_hit_rate
                .partial_cmp(&b.unit_hit_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.index.cmp(&a.index))
        })
        .map(|(i, _)| i)
    {
        map.unit = Some(pool.remove(pick).index);
    }

    // 4. name: left-most remaining non-numeric column, falling back to the
    // left-most remaining column when everything left looks numeric.
    if let Some(pick) = pool
        .iter()
        .position(|p| !p.is_numeric())
        .or(if pool.is_empty() { None } else { Some(0) })
    {
        map.name = Some(pool.remove(pick).index);
    }

    // 5. remarks: right-most remaining column. Anything still in the pool
    // after this is ignored.
    if let Some(last) = pool.pop() {
        map.remarks = Some(last.index);
    }

    map
}
