use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Environment variable naming a YAML config file
pub const CONFIG_ENV: &str = "CHROMAKIT_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix hex output with `#`
    #[serde(default = "default_show_hash")]
    pub show_hash: bool,

    /// Output format for command results
    #[serde(default)]
    pub output: OutputFormat,

    /// Number of tints (and shades) in a generated palette
    #[serde(default = "default_palette_steps")]
    pub palette_steps: u32,
}

fn default_show_hash() -> bool {
    true
}

fn default_palette_steps() -> u32 {
    chroma_model::DEFAULT_STEPS
}

/// How command results are printed
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl AppConfig {
    /// Parse configuration from YAML text.
    ///
    /// `path` is only used for error messages.
    pub fn from_yaml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.palette_steps == 0 {
            return Err(ConfigError::Invalid {
                field: "palette_steps",
                reason: "must be at least 1",
            });
        }

        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml_str(&content, path)?;
        tracing::info!(
            path = %path.display(),
            output = ?config.output,
            palette_steps = config.palette_steps,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// A path given on the command line must load. A path from the
    /// environment is best effort: failures are logged and defaults used.
    /// Without either, defaults apply.
    pub fn resolve(cli_path: Option<&Path>, env_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = cli_path {
            return Self::from_path(path);
        }

        match env_path {
            Some(path) => match Self::from_path(path) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!(%e, "Failed to load config from {CONFIG_ENV}, using defaults");
                    Ok(Self::default())
                }
            },
            None => Ok(Self::default()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_hash: default_show_hash(),
            output: OutputFormat::default(),
            palette_steps: default_palette_steps(),
        }
    }
}
