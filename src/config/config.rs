use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SplicerError, SplicerResult};
use crate::error_handling::with_file_context;
use crate::splice::LineMode;

pub const DEFAULT_CONFIG_FILE: &str = "splicer.toml";

/// Splice settings as written in a config file. Every field is optional so
/// command-line flags can fill the gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpliceConfig {
    pub target: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub lines: Option<LinesConfig>,
    pub markers: Option<MarkersConfig>,
    pub mode: Option<LineMode>,
    pub trailer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinesConfig {
    pub start: usize,
    pub end: usize,
    /// Treat start/end as one-based inclusive line numbers
    #[serde(default)]
    pub line_numbers: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkersConfig {
    pub start: String,
    pub end: String,
}

impl SpliceConfig {
    pub fn load(path: &Path) -> SplicerResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let content = with_file_context(|| std::fs::read_to_string(path), path)?;

        match ext {
            "json" => Ok(serde_json::from_str(&content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            "toml" => Ok(toml::from_str(&content)?),
            _ => Err(SplicerError::invalid_argument(format!(
                "Unsupported config format: {}",
                ext
            ))),
        }
    }

    pub fn default_config_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }
}
