//! Command parsing.
//!
//! Arguments are positional: `atlas-hex <command> [args...]`.

use std::str::FromStr;

use atlas_hex::{HexCoord, OffsetCoord, Pixel};

use crate::{Error, Result};

pub const USAGE: &str = "\
atlas-hex - Hex grid geometry for campaign maps

Usage:
  atlas-hex distance <q1> <r1> <q2> <r2>   Hex distance between two cells
  atlas-hex neighbors <q> <r>              The six neighbors of a cell
  atlas-hex line <q1> <r1> <q2> <r2>       Cells on the line between two cells
  atlas-hex ring <q> <r> <radius>          Cells at exactly <radius> steps
  atlas-hex spiral <q> <r> <radius>        Cells within <radius> steps, center first
  atlas-hex to-offset <q> <r>              Odd-q column/row of a cell
  atlas-hex from-offset <col> <row>        Cell at an odd-q column/row
  atlas-hex to-pixel <q> <r>               Pixel center of a cell
  atlas-hex from-pixel <x> <y>             Cell under a pixel
  atlas-hex corners                        Corner points of a cell outline
  atlas-hex path                           SVG path of a cell outline
  atlas-hex validate <q> <r> <s>           Check that q + r + s = 0

Environment:
  ATLAS_HEX_SIZE  Center-to-corner size for pixel commands (default: 32)
  ATLAS_OUTPUT    Output format, json or text (default: json)
  RUST_LOG        Log filter (default: atlas_cli=warn)";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Distance(HexCoord, HexCoord),
    Neighbors(HexCoord),
    Line(HexCoord, HexCoord),
    Ring(HexCoord, i64),
    Spiral(HexCoord, i64),
    ToOffset(HexCoord),
    FromOffset(OffsetCoord),
    ToPixel(HexCoord),
    FromPixel(Pixel),
    Corners,
    Path,
    /// Raw axes, deliberately not normalized.
    Validate(HexCoord),
    Help,
}

impl Command {
    /// Parse arguments following the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            return Err(Error::Usage("missing command".to_string()));
        };
        let args = Args {
            command: name.as_ref(),
            values: rest,
        };

        let command = match args.command {
            "distance" => Command::Distance(args.hex(0, "q1", "r1")?, args.hex(2, "q2", "r2")?),
            "neighbors" => Command::Neighbors(args.hex(0, "q", "r")?),
            "line" => Command::Line(args.hex(0, "q1", "r1")?, args.hex(2, "q2", "r2")?),
            "ring" => Command::Ring(args.hex(0, "q", "r")?, args.value(2, "radius")?),
            "spiral" => Command::Spiral(args.hex(0, "q", "r")?, args.value(2, "radius")?),
            "to-offset" => Command::ToOffset(args.hex(0, "q", "r")?),
            "from-offset" => {
                Command::FromOffset(OffsetCoord::new(args.value(0, "col")?, args.value(1, "row")?))
            }
            "to-pixel" => Command::ToPixel(args.hex(0, "q", "r")?),
            "from-pixel" => Command::FromPixel(Pixel::new(args.value(0, "x")?, args.value(1, "y")?)),
            "corners" => Command::Corners,
            "path" => Command::Path,
            "validate" => Command::Validate(HexCoord {
                q: args.value(0, "q")?,
                r: args.value(1, "r")?,
                s: args.value(2, "s")?,
            }),
            "-h" | "--help" | "help" => Command::Help,
            other => return Err(Error::Usage(format!("unknown command: {}", other))),
        };
        Ok(command)
    }
}

struct Args<'a, S> {
    command: &'a str,
    values: &'a [S],
}

impl<S: AsRef<str>> Args<'_, S> {
    fn value<T: FromStr>(&self, index: usize, name: &'static str) -> Result<T> {
        let raw: &str = self.values.get(index).map(|v| v.as_ref()).ok_or_else(|| {
            Error::Usage(format!("{} requires a <{}> argument", self.command, name))
        })?;
        raw.parse().map_err(|_| Error::InvalidArgument {
            name,
            value: raw.to_string(),
        })
    }

    fn hex(&self, index: usize, q: &'static str, r: &'static str) -> Result<HexCoord> {
        Ok(HexCoord::new(self.value(index, q)?, self.value(index + 1, r)?))
    }
}
