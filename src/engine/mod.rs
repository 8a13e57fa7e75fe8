pub mod confidence;
mod macros;
pub mod roles;
pub mod rows;
pub mod structure;

use tracing::debug;

use crate::config::Config;
use crate::emit;
use crate::tokenizer;
use crate::types::{ImportResult, ImportStats, RowResult, Warning, WarningKind};

/// Run the pipeline stages left to right over one pasted text blob.
///
/// Total function: malformed, empty, or oversized input degrades the
/// confidence score or skips rows, it never returns an error.
pub fn run(text: &str, config: &Config) -> ImportResult {
    let table = tokenizer::tokenize(text);
    debug!(rows = table.rows.len(), delimiter = ?table.delimiter, "tokenized paste");

    // Sanity bound: clipboard-sized input is expected; anything beyond the
    // cap is rejected wholesale instead of running heuristics over it.
    if table.rows.len() > config.max_rows {
        debug!(max_rows = config.max_rows, "row cap exceeded, rejecting");
        return ImportResult {
            items: vec![],
            warnings: vec![],
            confidence: 0,
            stats: ImportStats {
                row_count: table.rows.len(),
                col_count: 0,
                mixed_format: false,
                ignore_count: table.rows.len(),
            },
        };
    }

    let shape = structure::analyze(&table);
    debug!(
        dominant_cols = shape.dominant_cols,
        mixed_format = shape.mixed_format,
        "analyzed structure"
    );

    let mut warnings: Vec<Warning> = Vec::new();
    if shape.mixed_format {
        emit!(
            warnings,
            None,
            WarningKind::MixedFormat,
            "inconsistent delimiters or column counts, using the dominant shape of {} columns",
            shape.dominant_cols
        );
    }

    let role_map = roles::infer_roles(&table, shape.dominant_cols, &config.known_units);
    debug!(?role_map, "inferred column roles");

    let row_results: Vec<RowResult> = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| rows::build_row(row, &role_map, &config.known_units, i))
        .collect();

    let confidence = confidence::score(&row_results, table.rows.len(), shape.mixed_format);

    let mut items = Vec::new();
    let mut ignore_count = 0;
    for result in row_results {
        match result.item {
            Some(item) => items.push(item),
            None => ignore_count += 1,
        }
        warnings.extend(result.warnings);
    }
    debug!(confidence, items = items.len(), ignore_count, "scored import");

    ImportResult {
        items,
        warnings,
        confidence,
        stats: ImportStats {
            row_count: table.rows.len(),
            col_count: shape.dominant_cols,
            mixed_format: shape.mixed_format,
            ignore_count,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(text: &str) -> ImportResult {
        run(text, &Config::default())
    }

    #[test]
    fn test_clean_tab_paste() {
        let result = import("Bolt M6\t100\tpcs\t0.5\nNut M6\t200\tpcs\t0.3\n");
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.confidence, 100);
        assert!(result.warnings.is_empty());
        assert!(!result.stats.mixed_format);
        assert_eq!(result.stats.row_count, 2);
        assert_eq!(result.stats.col_count, 4);
        assert_eq!(result.stats.ignore_count, 0);
        assert_eq!(result.items[0].amount, 50.0);
        assert_eq!(result.items[1].amount, 60.0);
    }

    #[test]
    fn test_missing_unit_scenario() {
        // Second row has an empty unit cell: defaults to "pc" with one
        // missing-unit warning, both rows still included.
        let result = import("Bolt M6\t100\tpcs\t0.5\nNut M6\t100\t\t0.3");
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[1].unit, "pc");
        assert_eq!(result.count_of(WarningKind::MissingUnit), 1);
        assert_eq!(result.row_warnings(1).count(), 1);
        // mean(100, 95) rounds to 98
        assert_eq!(result.confidence, 98);
    }

    #[test]
    fn test_all_empty_cells_row_alone() {
        let result = import("\t\t\t");
        assert!(result.items.is_empty());
        assert_eq!(result.stats.ignore_count, 1);
        assert_eq!(result.stats.row_count, 1);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn test_skipped_row_among_clean_rows() {
        let result = import("A1\t1\tpc\t2\n\t1\tpc\t2\nB2\t1\tpc\t2\n");
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.stats.ignore_count, 1);
        assert!(result.items.iter().all(|i| !i.part_name.is_empty()));
        // 100 - 30 * 1/3 = 90
        assert_eq!(result.confidence, 90);
    }

    #[test]
    fn test_mixed_format_costs_exactly_20() {
        let clean = "AA\t1\tpc\t2\nBB\t1\tpc\t2\n";
        // Two five-column rows make a second repeated length; their extra
        // trailing cell is ignored by the inferred roles.
        let mixed = "AA\t1\tpc\t2\nBB\t1\tpc\t2\nCC\t1\tpc\t2\tx\nDD\t1\tpc\t2\ty\n";
        let clean_result = import(clean);
        let mixed_result = import(mixed);
        assert!(!clean_result.stats.mixed_format);
        assert!(mixed_result.stats.mixed_format);
        assert_eq!(mixed_result.count_of(WarningKind::MixedFormat), 1);
        assert_eq!(mixed_result.items.len(), 4);
        assert_eq!(
            clean_result.confidence - mixed_result.confidence,
            20,
            "mixed format should cost exactly the flat penalty"
        );
    }

    #[test]
    fn test_mixed_format_warning_has_no_row() {
        let result = import("A1,1,pc,2\nfree typed line\nB2,2,pc,3\n");
        let w = result
            .warnings
            .iter()
            .find(|w| w.kind == WarningKind::MixedFormat)
            .unwrap();
        assert_eq!(w.row, None);
    }

    #[test]
    fn test_comma_fallback_paste() {
        let result = import("Bolt,2,pc,1.5\nNut,3,pc,0.8\n");
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.confidence, 100);
        assert_eq!(result.items[0].amount, 3.0);
    }

    #[test]
    fn test_empty_input() {
        let result = import("");
        assert!(result.items.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.confidence, 0);
        assert_eq!(result.stats.row_count, 0);
    }

    #[test]
    fn test_idempotent() {
        let text = "Bolt M6\t100\tpcs\t0.5\nNut M6\t100\t\t0.3\nbad row\n";
        let a = serde_json::to_string(&import(text)).unwrap();
        let b = serde_json::to_string(&import(text)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_cap_rejects_oversized_paste() {
        let mut text = String::new();
        for i in 0..5001 {
            text.push_str(&format!("part {i}\t1\tpc\t1\n"));
        }
        let result = import(&text);
        assert!(result.items.is_empty());
        assert_eq!(result.confidence, 0);
        assert_eq!(result.stats.row_count, 5001);
        assert_eq!(result.stats.ignore_count, 5001);
    }

    #[test]
    fn test_included_plus_ignored_covers_all_rows() {
        let result = import("Bolt\t10\tpc\t0.5\nnot a row\n");
        assert_eq!(
            result.items.len() + result.stats.ignore_count,
            result.stats.row_count
        );
    }

    #[test]
    fn test_custom_known_units() {
        let mut config = Config::default();
        config.known_units.push("bag".to_string());
        let result = run("Flour\t10\tbag\t2.5\nSugar\t5\tbags\t3.0\n", &config);
        assert_eq!(result.count_of(WarningKind::SuspiciousUnit), 0);
        assert_eq!(result.items[0].unit, "bag");
        assert_eq!(result.confidence, 100);
    }
}
