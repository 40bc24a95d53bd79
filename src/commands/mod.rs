//! Command implementations behind the CLI.
//!
//! Each command returns a serializable report so the binary only decides how
//! to print it.

pub mod convert;
pub mod palette;

pub use convert::{convert, detect_notation, ConvertReport, Notation};
pub use palette::{palette, PaletteReport};

use serde::Serialize;

use crate::error::CliError;
use crate::models::OutputFormat;

/// A command result that can be printed as text or JSON.
pub trait Report: Serialize {
    /// Human-readable rendering.
    fn to_text(&self) -> String;

    fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
