//! Error types for atlas-hex.

use thiserror::Error;

/// Result type for atlas-hex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hex grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Ring and spiral enumeration need a radius of zero or more.
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(i64),

    /// The radius covers more cells than can be counted.
    #[error("radius {0} covers more cells than fit in usize")]
    RadiusTooLarge(i64),

    /// The three axes of a cube coordinate do not sum to zero.
    #[error("cube coordinate ({q}, {r}, {s}) does not satisfy q + r + s = 0")]
    BrokenInvariant { q: i64, r: i64, s: i64 },
}
