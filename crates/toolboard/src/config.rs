//! Configuration file structure (toolboard.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use toolboard_data::DEFAULT_MAX_TOOLS;

pub const CONFIG_FILE: &str = "toolboard.toml";

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub scrape: ScrapeSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct BuildSettings {
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_output")]
    pub output: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ScrapeSettings {
    #[serde(default = "default_max_tools")]
    pub max_tools: usize,
    /// Rewrite news.json and llms.json on every scrape
    #[serde(default = "default_true")]
    pub fixtures: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            template: default_template(),
            output: default_output(),
        }
    }
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            max_tools: default_max_tools(),
            fixtures: true,
        }
    }
}

fn default_data_dir() -> String {
    "scraped_data".to_string()
}
fn default_template() -> String {
    "template.html".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_max_tools() -> usize {
    DEFAULT_MAX_TOOLS
}
fn default_true() -> bool {
    true
}

impl ConfigFile {
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data.dir)
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}
