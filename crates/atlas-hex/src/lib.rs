//! Atlas Hex Grid
//!
//! Cube-coordinate hexagonal grid geometry for the campaign map editor.
//!
//! # Coordinate System
//!
//! Every cell is addressed by three axes (q, r, s) with `q + r + s = 0`.
//! Integer cells ([`HexCoord`]) are the only values the map stores; anything
//! between cells is a [`FractionalHex`] and has to be rounded back.
//!
//! # Operations
//!
//! - Algebra: `+`, `-`, `* k`, negation, validation
//! - Distance, interpolation and rounding
//! - Traversal: neighbors, lines, rings and spirals
//! - Odd-q offset conversion ([`OffsetCoord`])
//! - Pixel projection and hexagon outlines ([`Pixel`])
//!
//! Everything here is a pure function of its inputs.

mod error;
mod fractional;
mod hex;
mod offset;
mod pixel;
mod traversal;

pub use error::{Error, Result};
pub use fractional::{lerp, round, FractionalHex};
pub use hex::{distance, HexCoord};
pub use offset::{cube_to_offset, offset_to_cube, OffsetCoord};
pub use pixel::{hex_corners, hex_corners_at, hex_path, hex_to_pixel, pixel_to_hex, Pixel};
pub use traversal::{
    cells_in_ring, cells_in_spiral, checked_cells_in_ring, checked_cells_in_spiral, direction,
    line_draw, neighbor, ring, spiral, Ring, Spiral, DIRECTIONS,
};

/// Number of neighbors every cell has.
pub const NEIGHBOR_COUNT: usize = 6;

const _: () = assert!(DIRECTIONS.len() == NEIGHBOR_COUNT);
