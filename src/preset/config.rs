use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use findlink::models::{DEFAULT_LINKS_FILE, DEFAULT_TARGET};
use findlink::OutputFormat;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub links: PathBuf,
    /// "lon,lat"
    pub target: String,
    pub format: OutputFormat,
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            links: PathBuf::from(DEFAULT_LINKS_FILE),
            target: DEFAULT_TARGET.to_string(),
            format: OutputFormat::Text,
            parallel: false,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
