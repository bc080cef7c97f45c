//! Neighbors, lines, rings and spirals.
//!
//! # Ring Structure
//!
//! - Ring 0: empty (the center alone is not a ring)
//! - Ring n > 0: 6n cells, walked as six straight edges of length n
//!
//! A spiral is the center followed by rings 1..=n, so it covers
//! `1 + 3n(n+1)` cells.

use crate::{lerp, Error, HexCoord, Result};

/// The six unit steps in cube space, in fixed order.
pub const DIRECTIONS: [HexCoord; 6] = [
    HexCoord { q: 1, r: 0, s: -1 },
    HexCoord { q: 1, r: -1, s: 0 },
    HexCoord { q: 0, r: -1, s: 1 },
    HexCoord { q: -1, r: 0, s: 1 },
    HexCoord { q: -1, r: 1, s: 0 },
    HexCoord { q: 0, r: 1, s: -1 },
];

/// Direction the ring walk starts from, relative to the center.
const RING_START_DIRECTION: i64 = 4;

/// Unit step for direction `index`, wrapping modulo 6 (so `-1` is `5`).
#[inline]
pub const fn direction(index: i64) -> HexCoord {
    DIRECTIONS[index.rem_euclid(6) as usize]
}

/// Number of cells in ring `radius`.
#[inline]
pub const fn cells_in_ring(radius: u64) -> u64 {
    6 * radius
}

/// Number of cells in a spiral of `radius`, center included.
///
/// Formula: 1 + 3n(n+1)
#[inline]
pub const fn cells_in_spiral(radius: u64) -> u64 {
    1 + 3 * radius * (radius + 1)
}

/// [`cells_in_ring`], or `None` when the count does not fit in `usize`.
pub fn checked_cells_in_ring(radius: u64) -> Option<usize> {
    radius
        .checked_mul(6)
        .and_then(|n| usize::try_from(n).ok())
}

/// [`cells_in_spiral`], or `None` when the count does not fit in `usize`.
pub fn checked_cells_in_spiral(radius: u64) -> Option<usize> {
    radius
        .checked_add(1)
        .and_then(|n| n.checked_mul(radius))
        .and_then(|n| n.checked_mul(3))
        .and_then(|n| n.checked_add(1))
        .and_then(|n| usize::try_from(n).ok())
}

/// Radius as a step count, provided every cell can be counted by `usize`.
fn check_radius(radius: i64, count: fn(u64) -> Option<usize>) -> Result<u64> {
    let steps = u64::try_from(radius).map_err(|_| Error::NegativeRadius(radius))?;
    count(steps)
        .map(|_| steps)
        .ok_or(Error::RadiusTooLarge(radius))
}

impl HexCoord {
    /// The cell one step away in direction `index`.
    #[inline]
    pub const fn neighbor(self, index: i64) -> Self {
        let d = direction(index);
        Self {
            q: self.q + d.q,
            r: self.r + d.r,
            s: self.s + d.s,
        }
    }

    /// All six neighbors, in direction order.
    pub fn neighbors(self) -> [Self; 6] {
        DIRECTIONS.map(|d| self + d)
    }

    /// Cells on the straight line from `self` to `other`, both included.
    pub fn line_to(self, other: Self) -> Vec<Self> {
        let n = self.distance(&other);
        let steps = n.max(1) as f64;
        (0..=n)
            .map(|i| lerp(self, other, i as f64 / steps).round())
            .collect()
    }

    /// Cells at exactly `radius` steps from `self`.
    pub fn ring(self, radius: i64) -> Result<Ring> {
        Ring::new(self, radius)
    }

    /// `self` followed by every ring from 1 to `radius`.
    pub fn spiral(self, radius: i64) -> Result<Spiral> {
        Spiral::new(self, radius)
    }
}

/// Cell one step from `hex` in direction `index`.
pub fn neighbor(hex: HexCoord, index: i64) -> HexCoord {
    hex.neighbor(index)
}

/// Discrete straight line from `a` to `b`, `distance(a, b) + 1` cells long.
pub fn line_draw(a: HexCoord, b: HexCoord) -> Vec<HexCoord> {
    a.line_to(b)
}

/// Ring of cells around `center`. Fails on a negative or uncountable radius.
pub fn ring(center: HexCoord, radius: i64) -> Result<Ring> {
    Ring::new(center, radius)
}

/// Filled hexagonal area around `center`. Fails on a negative or uncountable radius.
pub fn spiral(center: HexCoord, radius: i64) -> Result<Spiral> {
    Spiral::new(center, radius)
}

/// Iterator over the cells of one ring.
#[derive(Debug, Clone)]
pub struct Ring {
    current: HexCoord,
    radius: u64,
    side: usize,
    step: u64,
}

impl Ring {
    /// Start a ring walk of `radius` around `center`.
    pub fn new(center: HexCoord, radius: i64) -> Result<Self> {
        let radius_steps = check_radius(radius, checked_cells_in_ring)?;
        Ok(Self {
            current: center + direction(RING_START_DIRECTION) * radius,
            radius: radius_steps,
            side: 0,
            step: 0,
        })
    }

    fn remaining(&self) -> u64 {
        if self.radius == 0 {
            return 0;
        }
        cells_in_ring(self.radius) - (self.side as u64 * self.radius + self.step)
    }
}

impl Iterator for Ring {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.radius == 0 || self.side >= DIRECTIONS.len() {
            return None;
        }

        let cell = self.current;
        self.current = self.current + DIRECTIONS[self.side];
        self.step += 1;
        if self.step == self.radius {
            self.step = 0;
            self.side += 1;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ring {}

/// Iterator over a center cell and its rings in increasing radius order.
#[derive(Debug, Clone)]
pub struct Spiral {
    center: HexCoord,
    radius: u64,
    center_done: bool,
    ring_radius: u64,
    ring: Option<Ring>,
}

impl Spiral {
    /// Start a spiral of `radius` around `center`.
    pub fn new(center: HexCoord, radius: i64) -> Result<Self> {
        let radius = check_radius(radius, checked_cells_in_spiral)?;
        Ok(Self {
            center,
            radius,
            center_done: false,
            ring_radius: 0,
            ring: None,
        })
    }

    fn remaining(&self) -> u64 {
        if !self.center_done {
            return cells_in_spiral(self.radius);
        }
        let in_current = self.ring.as_ref().map_or(0, Ring::remaining);
        let after_current = cells_in_spiral(self.radius) - cells_in_spiral(self.ring_radius);
        in_current + after_current
    }
}

impl Iterator for Spiral {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.center_done {
            self.center_done = true;
            return Some(self.center);
        }

        loop {
            if let Some(cell) = self.ring.as_mut().and_then(Iterator::next) {
                return Some(cell);
            }
            if self.ring_radius >= self.radius {
                self.ring = None;
                return None;
            }
            self.ring_radius += 1;
            self.ring = Some(Ring {
                current: self.center + direction(RING_START_DIRECTION) * self.ring_radius as i64,
                radius: self.ring_radius,
                side: 0,
                step: 0,
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Spiral {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_wraps_both_ways() {
        assert_eq!(direction(0), DIRECTIONS[0]);
        assert_eq!(direction(6), DIRECTIONS[0]);
        assert_eq!(direction(-1), direction(5));
        assert_eq!(direction(-7), direction(5));
        assert_eq!(direction(13), DIRECTIONS[1]);
    }

    #[test]
    fn directions_are_unit_steps() {
        for dir in DIRECTIONS {
            assert!(dir.is_valid());
            assert_eq!(dir.length(), 1);
        }
    }

    #[test]
    fn six_neighbors() {
        let center = HexCoord::new(3, -2);
        let neighbors = center.neighbors();

        for (i, n) in neighbors.iter().enumerate() {
            assert_eq!(*n, neighbor(center, i as i64));
            assert_eq!(center.distance(n), 1);
        }

        let mut sorted: Vec<_> = neighbors.iter().collect();
        sorted.sort_by_key(|c| (c.q, c.r));
        sorted.dedup();
        assert_eq!(sorted.len(), 6);
    }

    #[test]
    fn ring_counts() {
        assert_eq!(cells_in_ring(0), 0);
        assert_eq!(cells_in_ring(1), 6);
        assert_eq!(cells_in_ring(10), 60);
        assert_eq!(cells_in_spiral(0), 1);
        assert_eq!(cells_in_spiral(1), 7);
        assert_eq!(cells_in_spiral(2), 19);
        assert_eq!(cells_in_spiral(3), 37);
    }

    #[test]
    fn ring_one_walk_order() {
        let cells: Vec<_> = ring(HexCoord::ORIGIN, 1).unwrap().collect();
        assert_eq!(
            cells,
            vec![
                HexCoord::new(-1, 1),
                HexCoord::new(0, 1),
                HexCoord::new(1, 0),
                HexCoord::new(1, -1),
                HexCoord::new(0, -1),
                HexCoord::new(-1, 0),
            ]
        );
    }

    #[test]
    fn ring_zero_is_empty() {
        let ring = HexCoord::new(5, 5).ring(0).unwrap();
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.count(), 0);
    }

    #[test]
    fn ring_cells_are_at_radius() {
        let center = HexCoord::new(-2, 7);
        for radius in 1..=5 {
            let cells: Vec<_> = center.ring(radius).unwrap().collect();
            assert_eq!(cells.len() as u64, cells_in_ring(radius as u64));
            for cell in cells {
                assert_eq!(center.distance(&cell), radius as u64);
            }
        }
    }

    #[test]
    fn ring_len_tracks_progress() {
        let mut ring = HexCoord::ORIGIN.ring(2).unwrap();
        assert_eq!(ring.len(), 12);
        ring.next();
        ring.next();
        ring.next();
        assert_eq!(ring.len(), 9);
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert_eq!(ring(HexCoord::ORIGIN, -1).unwrap_err(), Error::NegativeRadius(-1));
        assert_eq!(spiral(HexCoord::ORIGIN, -3).unwrap_err(), Error::NegativeRadius(-3));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn spiral_radius_limit() {
        // Largest radius whose 1 + 3r(r+1) cells still fit in 64 bits.
        let max = 2_479_700_524;

        let spiral = HexCoord::ORIGIN.spiral(max).unwrap();
        assert_eq!(spiral.len(), 18_446_744_073_616_725_301);
        assert_eq!(
            HexCoord::ORIGIN.spiral(max + 1).unwrap_err(),
            Error::RadiusTooLarge(max + 1)
        );
        assert_eq!(
            super::spiral(HexCoord::ORIGIN, 3_000_000_000).unwrap_err(),
            Error::RadiusTooLarge(3_000_000_000)
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn ring_radius_limit() {
        let max = (u64::MAX / 6) as i64;

        assert_eq!(HexCoord::ORIGIN.ring(max).unwrap().len() as u64, cells_in_ring(max as u64));
        assert_eq!(
            HexCoord::ORIGIN.ring(max + 1).unwrap_err(),
            Error::RadiusTooLarge(max + 1)
        );
        // A spiral-sized radius is still a perfectly countable ring.
        assert_eq!(HexCoord::ORIGIN.ring(3_000_000_000).unwrap().len(), 18_000_000_000);
    }

    #[test]
    fn checked_counts_match() {
        for radius in [0, 1, 2, 3, 10, 1000] {
            assert_eq!(checked_cells_in_ring(radius), Some(cells_in_ring(radius) as usize));
            assert_eq!(checked_cells_in_spiral(radius), Some(cells_in_spiral(radius) as usize));
        }
        assert_eq!(checked_cells_in_spiral(u64::MAX), None);
        assert_eq!(checked_cells_in_ring(u64::MAX), None);
    }

    #[test]
    fn spiral_zero_is_center_only() {
        let center = HexCoord::new(1, 1);
        let cells: Vec<_> = center.spiral(0).unwrap().collect();
        assert_eq!(cells, vec![center]);
    }

    #[test]
    fn spiral_is_center_then_rings() {
        let center = HexCoord::new(4, -1);
        let cells: Vec<_> = center.spiral(3).unwrap().collect();

        let mut expected = vec![center];
        for radius in 1..=3 {
            expected.extend(center.ring(radius).unwrap());
        }
        assert_eq!(cells, expected);
        assert_eq!(cells.len() as u64, cells_in_spiral(3));
    }

    #[test]
    fn spiral_len_tracks_progress() {
        let mut spiral = HexCoord::ORIGIN.spiral(2).unwrap();
        assert_eq!(spiral.len(), 19);
        spiral.next();
        assert_eq!(spiral.len(), 18);
        for _ in 0..6 {
            spiral.next();
        }
        assert_eq!(spiral.len(), 12);
        assert_eq!(spiral.count(), 12);
    }

    #[test]
    fn line_to_self_is_single_cell() {
        let a = HexCoord::new(2, 2);
        assert_eq!(line_draw(a, a), vec![a]);
    }

    #[test]
    fn line_along_axis() {
        let line = line_draw(HexCoord::ORIGIN, HexCoord::new(3, 0));
        assert_eq!(
            line,
            vec![
                HexCoord::new(0, 0),
                HexCoord::new(1, 0),
                HexCoord::new(2, 0),
                HexCoord::new(3, 0),
            ]
        );
    }

    #[test]
    fn line_endpoints_and_length() {
        let a = HexCoord::new(-3, 1);
        let b = HexCoord::new(4, -5);
        let line = a.line_to(b);

        assert_eq!(line.len() as u64, a.distance(&b) + 1);
        assert_eq!(line.first(), Some(&a));
        assert_eq!(line.last(), Some(&b));
    }
}
