use serde::Serialize;

use crate::types::{ImportResult, ImportStats, LineItem, Warning};

#[derive(Serialize)]
struct JsonOutput<'a> {
    confidence: u8,
    decision: &'static str,
    stats: &'a ImportStats,
    items: &'a [LineItem],
    warnings: &'a [Warning],
}

fn build_output<'a>(result: &'a ImportResult, threshold: u8) -> JsonOutput<'a> {
    JsonOutput {
        confidence: result.confidence,
        decision: super::decision(result, threshold),
        stats: &result.stats,
        items: &result.items,
        warnings: &result.warnings,
    }
}

pub fn render(result: &ImportResult, threshold: u8) {
    let output = build_output(result, threshold);
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
