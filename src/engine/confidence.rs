use crate::types::RowResult;

/// Score points removed from the mean when the table is mixed-format.
pub const MIXED_FORMAT_PENALTY: f64 = 20.0;

/// Score points removed at a 100% skip ratio, scaled linearly.
pub const IGNORE_RATIO_PENALTY: f64 = 30.0;

fn row_score(result: &RowResult) -> f64 {
    let penalty: u32 = result.warnings.iter().map(|w| w.kind.penalty()).sum();
    (100u32.saturating_sub(penalty)) as f64
}

/// Combine per-row signals and structural signals into one 0-100 score.
///
/// Mean of the included rows' scores, minus a flat mixed-format penalty,
/// minus a penalty proportional to the skipped-row ratio. Zero included
/// rows means zero confidence regardless of the formula.
pub fn score(rows: &[RowResult], row_count: usize, mixed_format: bool) -> u8 {
    let included: Vec<f64> = rows
        .iter()
        .filter(|r| r.included)
        .map(row_score)
        .collect();
    if included.is_empty() {
        return 0;
    }

    let mean = included.iter().sum::<f64>() / included.len() as f64;
    let ignore_count = row_count - included.len();
    let ignore_penalty =
        IGNORE_RATIO_PENALTY * ignore_count as f64 / row_count.max(1) as f64;
    let mixed_penalty = if mixed_format { MIXED_FORMAT_PENALTY } else { 0.0 };

    (mean - mixed_penalty - ignore_penalty).round().clamp(0.0, 100.0) as u8
}
