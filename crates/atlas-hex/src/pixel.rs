//! Projection between grid cells and 2D rendering space.
//!
//! `size` is the distance from a cell's center to any of its corners. The
//! projection puts q along the x axis:
//!
//! ```text
//! x = size * 3/2 * q
//! y = size * (sqrt(3)/2 * q + sqrt(3) * r)
//! ```

use crate::{FractionalHex, HexCoord};

/// A point in rendering space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Pixel {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl HexCoord {
    /// Center of this cell in rendering space.
    #[inline]
    pub fn to_pixel(self, size: f64) -> Pixel {
        let sqrt3 = 3.0_f64.sqrt();
        let q = self.q as f64;
        let r = self.r as f64;

        Pixel {
            x: size * 1.5 * q,
            y: size * (sqrt3 / 2.0) * q + size * sqrt3 * r,
        }
    }

    /// The cell containing `pixel`.
    pub fn from_pixel(pixel: Pixel, size: f64) -> Self {
        let sqrt3 = 3.0_f64.sqrt();
        let q = (2.0 / 3.0 * pixel.x) / size;
        let r = (-1.0 / 3.0 * pixel.x + sqrt3 / 3.0 * pixel.y) / size;
        FractionalHex::new(q, r).round()
    }
}

pub fn hex_to_pixel(hex: HexCoord, size: f64) -> Pixel {
    hex.to_pixel(size)
}

pub fn pixel_to_hex(pixel: Pixel, size: f64) -> HexCoord {
    HexCoord::from_pixel(pixel, size)
}

/// Outline of a cell centered on the origin.
///
/// Corner `i` sits at `60° * i - 30°`, so the first corner is
/// `(size * cos 30°, -size / 2)`.
pub fn hex_corners(size: f64) -> [Pixel; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        Pixel {
            x: size * angle.cos(),
            y: size * angle.sin(),
        }
    })
}

/// Outline of `hex`, translated to its pixel center.
pub fn hex_corners_at(hex: HexCoord, size: f64) -> [Pixel; 6] {
    let center = hex.to_pixel(size);
    hex_corners(size).map(|corner| center + corner)
}

/// SVG path data for a cell outline: `M x0 y0 L x1 y1 ... L x5 y5 Z`.
pub fn hex_path(size: f64) -> String {
    let points: Vec<String> = hex_corners(size)
        .iter()
        .map(|corner| format!("{} {}", corner.x, corner.y))
        .collect();
    format!("M {} Z", points.join(" L "))
}
