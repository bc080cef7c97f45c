//! Command results and their rendering.

use atlas_hex::{HexCoord, OffsetCoord, Pixel};
use serde::Serialize;

use crate::{OutputFormat, Result};

/// Result of a command, serialized as bare JSON values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Distance(u64),
    Cell(HexCoord),
    Cells(Vec<HexCoord>),
    Offset(OffsetCoord),
    Pixel(Pixel),
    Pixels(Vec<Pixel>),
    Path(String),
    Valid(bool),
}

impl Report {
    /// Whether the command's answer should exit with success.
    pub fn is_success(&self) -> bool {
        !matches!(self, Report::Valid(false))
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Report::Distance(d) => d.to_string(),
            Report::Cell(hex) => hex.to_string(),
            Report::Cells(cells) => lines(cells.iter().map(HexCoord::to_string)),
            Report::Offset(offset) => format!("{} {}", offset.col, offset.row),
            Report::Pixel(p) => format!("{} {}", p.x, p.y),
            Report::Pixels(points) => lines(points.iter().map(|p| format!("{} {}", p.x, p.y))),
            Report::Path(path) => path.clone(),
            Report::Valid(valid) => valid.to_string(),
        }
    }
}

fn lines(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join("\n")
}
