use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "cylenian.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CylenianConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Clock settings.
    #[serde(default)]
    pub clock: ClockToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// Pins `today` to a fixed Gregorian date when set.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ClockToml {
    pub today: Option<String>,
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// read if present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<CylenianConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                debug!("no config file, using defaults");
                return Ok(CylenianConfig::default());
            }
            default
        }
    };
    debug!(path = %path.display(), "reading config");
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
