//! Cube coordinates for a hexagonal grid.
//!
//! A cell is addressed by three axes (q, r, s) that always sum to zero.
//! Map nodes persist all three axes as separate fields, so the third axis is
//! stored explicitly here rather than derived on demand.

use std::ops::{Add, Mul, Neg, Sub};

use crate::{Error, Result};

/// A single cell in cube coordinates.
///
/// Invariant for a valid cell: `q + r + s == 0`. The fields are public so
/// callers can build arbitrary (even invalid) values; [`HexCoord::new`]
/// always produces a valid one and [`HexCoord::is_valid`] checks the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub q: i64,
    pub r: i64,
    pub s: i64,
}

impl HexCoord {
    /// Origin of the grid.
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// Create a cell from two axes; `s` is derived as `-q - r`.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Create a cell from all three axes, rejecting a triple that does not
    /// sum to zero.
    ///
    /// Intended for coordinates loaded from storage, where each axis lives
    /// in its own column and may have been written independently.
    pub fn from_axes(q: i64, r: i64, s: i64) -> Result<Self> {
        let hex = Self { q, r, s };
        if hex.is_valid() {
            Ok(hex)
        } else {
            Err(Error::BrokenInvariant { q, r, s })
        }
    }

    /// Whether `q + r + s == 0`.
    pub const fn is_valid(&self) -> bool {
        self.axis_sum() == 0
    }

    /// `q + r + s`, widened so corrupted triples near the `i64` limits
    /// cannot wrap around to zero.
    pub const fn axis_sum(&self) -> i128 {
        self.q as i128 + self.r as i128 + self.s as i128
    }

    /// Scale every axis by `k`.
    pub const fn scale(self, k: i64) -> Self {
        Self {
            q: self.q * k,
            r: self.r * k,
            s: self.s * k,
        }
    }

    /// Distance from the origin: `(|q| + |r| + |s|) / 2`.
    pub const fn length(&self) -> u64 {
        (self.q.unsigned_abs() + self.r.unsigned_abs() + self.s.unsigned_abs()) / 2
    }

    /// Minimum number of neighbor steps between two cells.
    pub fn distance(&self, other: &Self) -> u64 {
        (*self - *other).length()
    }
}

impl Add for HexCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
            s: self.s + other.s,
        }
    }
}

impl Sub for HexCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
            s: self.s - other.s,
        }
    }
}

impl Mul<i64> for HexCoord {
    type Output = Self;

    #[inline]
    fn mul(self, k: i64) -> Self {
        self.scale(k)
    }
}

impl Neg for HexCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
            s: -self.s,
        }
    }
}

impl From<(i64, i64)> for HexCoord {
    fn from((q, r): (i64, i64)) -> Self {
        Self::new(q, r)
    }
}

impl TryFrom<[i64; 3]> for HexCoord {
    type Error = Error;

    fn try_from([q, r, s]: [i64; 3]) -> Result<Self> {
        Self::from_axes(q, r, s)
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// Hex distance between two cells.
pub fn distance(a: HexCoord, b: HexCoord) -> u64 {
    a.distance(&b)
}
