use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::engine::roles::DEFAULT_KNOWN_UNITS;

pub const CONFIG_FILE_NAME: &str = ".tabimportrc.toml";

/// Engine and CLI configuration.
///
/// Loaded from `.tabimportrc.toml` when present; every field has a default
/// so an absent file is not an error. The heuristics themselves never fail;
/// a malformed config file is the one hard error the binary can hit.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub format: OutputFormat,
    /// Tokens accepted as units (case-insensitive, trailing `s` ignored).
    pub known_units: Vec<String>,
    /// Confidence at or above which a result may be inserted without
    /// preview. Caller policy, not an engine invariant.
    pub auto_insert_threshold: u8,
    /// Pastes with more rows than this are rejected with zero confidence.
    pub max_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            known_units: DEFAULT_KNOWN_UNITS.iter().map(|s| s.to_string()).collect(),
            auto_insert_threshold: 80,
            max_rows: 5000,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>, search_dir: &Path) -> Result<Self> {
        let path = config_path.map(Path::to_path_buf).or_else(|| {
            let default = search_dir.join(CONFIG_FILE_NAME);
            default.exists().then_some(default)
        });

        match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content).map_err(|e| anyhow::anyhow!("Config parse error: {e}"))
            }
            None => Ok(Config::default()),
        }
    }

    pub const fn default_toml() -> &'static str {
        r#"# tabimport configuration

# Tokens accepted as units. Matching is case-insensitive and ignores one
# trailing "s", so "pcs" and "Sets" match "pc" and "set".
known_units = ["pc", "pcs", "set", "sets", "kg", "m", "length", "box", "ctn", "unit", "units"]

# Confidence score (0-100) at or above which an import may be inserted
# without preview.
auto_insert_threshold = 80

# Pastes with more rows than this are rejected with zero confidence.
max_rows = 5000
"#
    }
}
