//! Quick-import inference engine for pasted tabular text.
//!
//! Takes a raw clipboard blob (tab- or comma-separated, possibly malformed),
//! infers which column means what, and produces validated quotation line
//! items together with a 0-100 confidence score and a warning list. The
//! pipeline never fails: ambiguity degrades confidence or skips individual
//! rows instead of raising errors.

pub mod cli;
pub mod config;
pub mod engine;
pub mod merge;
pub mod tokenizer;
pub mod types;

use config::Config;
use types::ImportResult;

/// Run the full pipeline on one pasted text blob.
///
/// This is the library entry point: tokenize, analyze structure, infer
/// column roles, build and validate rows, aggregate confidence. Pure
/// function of its inputs; safe to call concurrently.
pub fn import(text: &str, config: &Config) -> ImportResult {
    engine::run(text, config)
}
