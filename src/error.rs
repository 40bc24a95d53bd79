use std::path::PathBuf;

use chroma_model::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unrecognised color notation: {0:?} (expected #rrggbb, rgb(...) or hsl(...))")]
    UnknownNotation(String),

    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid setting {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
