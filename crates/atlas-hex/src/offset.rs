//! Odd-q offset coordinates.
//!
//! Columns map directly to q; odd columns are shoved down by half a row.

use crate::HexCoord;

/// Column/row address in an odd-q layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetCoord {
    pub col: i64,
    pub row: i64,
}

impl OffsetCoord {
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }

    /// Cube coordinate for this column/row.
    pub const fn to_cube(self) -> HexCoord {
        let q = self.col;
        let r = self.row - (self.col - (self.col & 1)) / 2;
        HexCoord::new(q, r)
    }
}

impl HexCoord {
    /// Column/row address of this cell in an odd-q layout.
    pub const fn to_offset(self) -> OffsetCoord {
        OffsetCoord {
            col: self.q,
            row: self.r + (self.q - (self.q & 1)) / 2,
        }
    }
}

impl From<OffsetCoord> for HexCoord {
    fn from(offset: OffsetCoord) -> Self {
        offset.to_cube()
    }
}

impl From<HexCoord> for OffsetCoord {
    fn from(hex: HexCoord) -> Self {
        hex.to_offset()
    }
}

pub fn offset_to_cube(offset: OffsetCoord) -> HexCoord {
    offset.to_cube()
}

pub fn cube_to_offset(hex: HexCoord) -> OffsetCoord {
    hex.to_offset()
}
