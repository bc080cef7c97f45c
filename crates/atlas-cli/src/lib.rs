//! Atlas CLI
//!
//! Command-line access to the hex grid, for map-editor tooling and for
//! checking coordinates pulled out of the node store.

mod command;
mod config;
mod error;
mod report;

pub use command::{Command, USAGE};
pub use config::{CliConfig, OutputFormat, DEFAULT_HEX_SIZE};
pub use error::{Error, Result};
pub use report::Report;

use atlas_hex::{hex_corners, hex_path};

/// Run a parsed command against the grid.
///
/// Returns `None` for `help`, which has no report.
pub fn execute(command: &Command, config: &CliConfig) -> Result<Option<Report>> {
    tracing::debug!(?command, hex_size = config.hex_size, "Executing command");

    let report = match *command {
        Command::Distance(a, b) => Report::Distance(a.distance(&b)),
        Command::Neighbors(hex) => Report::Cells(hex.neighbors().to_vec()),
        Command::Line(a, b) => Report::Cells(a.line_to(b)),
        Command::Ring(center, radius) => Report::Cells(center.ring(radius)?.collect()),
        Command::Spiral(center, radius) => Report::Cells(center.spiral(radius)?.collect()),
        Command::ToOffset(hex) => Report::Offset(hex.to_offset()),
        Command::FromOffset(offset) => Report::Cell(offset.to_cube()),
        Command::ToPixel(hex) => Report::Pixel(hex.to_pixel(config.hex_size)),
        Command::FromPixel(pixel) => {
            Report::Cell(atlas_hex::pixel_to_hex(pixel, config.hex_size))
        }
        Command::Corners => Report::Pixels(hex_corners(config.hex_size).to_vec()),
        Command::Path => Report::Path(hex_path(config.hex_size)),
        Command::Validate(hex) => {
            let valid = hex.is_valid();
            if !valid {
                tracing::warn!(
                    q = hex.q,
                    r = hex.r,
                    s = hex.s,
                    sum = %hex.axis_sum(),
                    "Coordinate breaks q + r + s = 0"
                );
            }
            Report::Valid(valid)
        }
        Command::Help => return Ok(None),
    };

    if let Report::Cells(cells) = &report {
        tracing::info!("Produced {} cells", cells.len());
    }
    Ok(Some(report))
}

/// Parse, execute and render. Returns the text to print and whether the
/// process should exit successfully.
pub fn run<S: AsRef<str>>(args: &[S], config: &CliConfig) -> Result<(String, bool)> {
    let command = Command::parse(args)?;
    match execute(&command, config)? {
        Some(report) => Ok((report.render(config.output)?, report.is_success())),
        None => Ok((USAGE.to_string(), true)),
    }
}
