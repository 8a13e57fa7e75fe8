use owo_colors::OwoColorize;
use std::collections::BTreeMap;

use crate::types::{ImportResult, WarningKind};

pub fn render(result: &ImportResult, threshold: u8) {
    println!();
    println!("  {}", "\u{2501}".repeat(56).dimmed());

    let decision = super::decision(result, threshold);
    let confidence = if result.auto_insertable(threshold) {
        format!("confidence {}", result.confidence).green().bold().to_string()
    } else {
        format!("confidence {}", result.confidence).yellow().bold().to_string()
    };
    println!("  {} (threshold {}) \u{2192} {}", confidence, threshold, decision.bold());

    let stats = &result.stats;
    let mut shape = format!(
        "{} rows, {} columns, {} skipped",
        stats.row_count, stats.col_count, stats.ignore_count
    );
    if stats.mixed_format {
        shape.push_str(", mixed format");
    }
    println!("  {}", shape.dimmed());
    println!("  {}", "\u{2501}".repeat(56).dimmed());

    if !result.items.is_empty() {
        println!();
        for item in &result.items {
            let remarks = item.remarks.as_deref().unwrap_or("");
            println!(
                "  {:<28} {:>9} {:<6} {:>9.2} {:>11.2}  {}",
                item.part_name,
                item.quantity,
                item.unit,
                item.unit_price,
                item.amount,
                remarks.dimmed()
            );
        }
    }

    if result.warnings.is_empty() {
        println!();
        println!("  {}", "no warnings".green());
        println!();
        return;
    }

    let mut by_kind: BTreeMap<String, Vec<_>> = BTreeMap::new();
    for w in &result.warnings {
        by_kind.entry(w.kind.to_string()).or_default().push(w);
    }

    for (kind, warnings) in &by_kind {
        let count = warnings.len();
        let icon = if warnings[0].kind == WarningKind::MixedFormat {
            "\u{2717}".red().to_string()
        } else {
            "\u{26a0}".yellow().to_string()
        };
        println!();
        println!(
            "  {} {} {}",
            icon,
            kind.yellow().bold(),
            format!("({count})").dimmed()
        );
        for w in warnings {
            match w.row {
                // 1-based in display, 0-based everywhere else
                Some(row) => println!("      row {:<4} {}", row + 1, w.message),
                None => println!("      {}", w.message),
            }
        }
    }

    println!();
}
