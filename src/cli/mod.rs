pub mod explain;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tabimport",
    version,
    about = "Turn pasted tabular text into validated quotation line items"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import pasted tabular text from a file, or stdin with "-"
    Import {
        /// Input file containing the pasted text ("-" reads stdin)
        input: PathBuf,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Auto-insert confidence threshold (overrides config)
        #[arg(short, long)]
        threshold: Option<u8>,

        /// Exit with code 1 when confidence is below the threshold
        #[arg(long)]
        fail_below_threshold: bool,
    },
    /// Create a default .tabimportrc.toml
    Init,
    /// Explain a warning kind and its confidence penalty (omit to list all)
    Explain {
        /// Warning name (e.g., missing-unit, mixed-format, tiny-price)
        warning: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
