//! Fractional cube coordinates and snapping back to the grid.
//!
//! Interpolation and pixel inversion land between cells. Those results live
//! in [`FractionalHex`], and [`FractionalHex::round`] is the only way back to
//! a [`HexCoord`].

use crate::HexCoord;

/// A point in cube space with real-valued axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    /// Create a fractional point from two axes; `s` is derived as `-q - r`.
    pub fn new(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Whether the axes sum to zero after rounding to the nearest integer.
    pub fn is_valid(&self) -> bool {
        (self.q + self.r + self.s).round() == 0.0
    }

    /// Componentwise linear interpolation: `a + (b - a) * t`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self {
            q: a.q + (b.q - a.q) * t,
            r: a.r + (b.r - a.r) * t,
            s: a.s + (b.s - a.s) * t,
        }
    }

    /// Snap to the nearest valid cell.
    ///
    /// Each axis is rounded on its own, then the axis that moved furthest is
    /// recomputed from the other two. Ties go to q first, then r, then s.
    pub fn round(self) -> HexCoord {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let mut s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        } else {
            s = -q - r;
        }

        HexCoord {
            q: q as i64,
            r: r as i64,
            s: s as i64,
        }
    }
}

impl From<HexCoord> for FractionalHex {
    fn from(hex: HexCoord) -> Self {
        Self {
            q: hex.q as f64,
            r: hex.r as f64,
            s: hex.s as f64,
        }
    }
}

/// Interpolate between two cells, producing a point between them.
pub fn lerp(a: HexCoord, b: HexCoord, t: f64) -> FractionalHex {
    FractionalHex::lerp(a.into(), b.into(), t)
}

/// Snap a fractional point to the nearest cell.
pub fn round(hex: FractionalHex) -> HexCoord {
    hex.round()
}
