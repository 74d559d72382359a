//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

/// How reports are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path this configuration was loaded from (or will be saved to)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// TOML lexicon extending the built-in French dictionary
    pub lexicon_path: Option<PathBuf>,

    /// Rows shown in the "top confusions" table
    pub top_confusions: usize,

    /// Default output format for `analyze` and `compare`
    pub format: OutputFormat,

    /// trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            config_path: Self::default_config_path(),
            lexicon_path: None,
            top_confusions: 10,
            format: OutputFormat::Text,
            log_level: "info".to_string(),
        }
    }
}

impl ReportConfig {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_config_path())
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config_path = path.as_ref().to_path_buf();

        if !config_path.exists() {
            return Ok(Self {
                config_path,
                ..Self::default()
            });
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;

        let mut config: ReportConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;

        config.config_path = config_path;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&self.config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Maximum log level from `log_level`
    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .with_context(|| format!("Invalid log_level {:?} in configuration", self.log_level))
    }

    /// `<config dir>/rsb-phonetics/config.toml`
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rsb-phonetics")
            .join("config.toml")
    }
}
