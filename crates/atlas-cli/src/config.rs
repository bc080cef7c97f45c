//! Environment-driven configuration.

use std::str::FromStr;

use crate::{Error, Result};

/// Default center-to-corner size used by the pixel commands.
pub const DEFAULT_HEX_SIZE: f64 = 32.0;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(Error::Config(format!(
                "ATLAS_OUTPUT must be `json` or `text`, got {:?}",
                other
            ))),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Distance from a cell center to a corner, in pixels
    pub hex_size: f64,

    /// Output format
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            hex_size: DEFAULT_HEX_SIZE,
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// - `ATLAS_HEX_SIZE`: positive pixel size (default 32)
    /// - `ATLAS_OUTPUT`: `json` or `text` (default json)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hex_size = match lookup("ATLAS_HEX_SIZE") {
            Some(raw) => parse_hex_size(&raw)?,
            None => DEFAULT_HEX_SIZE,
        };

        let output = match lookup("ATLAS_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self { hex_size, output })
    }
}

fn parse_hex_size(raw: &str) -> Result<f64> {
    let size: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("ATLAS_HEX_SIZE is not a number: {:?}", raw)))?;

    if !size.is_finite() || size <= 0.0 {
        return Err(Error::Config(format!(
            "ATLAS_HEX_SIZE must be positive and finite, got {}",
            size
        )));
    }
    Ok(size)
}
