use std::collections::BTreeMap;

use crate::tokenizer::Table;

/// Minimum share of rows the dominant column count must cover before the
/// table counts as single-format. Tunable heuristic constant.
pub const MAJORITY_THRESHOLD: f64 = 0.6;

/// Shape summary of a tokenized table.
#[derive(Debug, Clone)]
pub struct Structure {
    pub histogram: BTreeMap<usize, usize>,
    /// Most frequent row length; ties broken by the smaller length. 0 for
    /// an empty table.
    pub dominant_cols: usize,
    pub mixed_format: bool,
}

/// Measure row/column shape consistency.
///
/// The table is mixed-format when rows were split by different delimiters,
/// when more than one row length occurs at least twice, or when the
/// dominant length covers less than [`MAJORITY_THRESHOLD`] of all rows.
/// Mixed format never blocks processing; inference continues with the
/// dominant shape.
pub fn analyze(table: &Table) -> Structure {
    let histogram = table.column_count_histogram();

    let dominant_cols = histogram
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
        .map_or(0, |(cols, _)| *cols);

    let mixed_format = if table.rows.is_empty() {
        false
    } else {
        let first_delimiter = table.rows[0].delimiter;
        let delimiter_mix = table.rows.iter().any(|r| r.delimiter != first_delimiter);
        let repeated_lengths = histogram.values().filter(|&&n| n >= 2).count();
        let dominant_share = histogram.get(&dominant_cols).copied().unwrap_or(0) as f64
            / table.rows.len() as f64;

        delimiter_mix || repeated_lengths > 1 || dominant_share < MAJORITY_THRESHOLD
    };

    Structure {
        histogram,
        dominant_cols,
        mixed_format,
    }
}
