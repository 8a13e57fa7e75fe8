pub mod csv;
pub mod json;
pub mod text;

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::types::ImportResult;

pub fn render(result: &ImportResult, threshold: u8, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => text::render(result, threshold),
        OutputFormat::Json => json::render(result, threshold),
        OutputFormat::Csv => csv::render(result)?,
    }
    Ok(())
}

/// The caller-side policy the engine deliberately does not make: compare
/// confidence against the configured threshold.
pub(crate) fn decision(result: &ImportResult, threshold: u8) -> &'static str {
    if result.auto_insertable(threshold) {
        "auto-insert"
    } else {
        "preview-required"
    }
}
