use std::ops::{Add, Sub};

/// A position on the grid. The grid spans the whole `i32` range on both axes
/// and has no positions beyond it: nothing wraps around.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! coord {
    ($x:expr, $y:expr) => {
        $crate::Coord { x: $x, y: $y }
    };
}

const OFFSETS: [i32; 3] = [-1, 0, 1];

impl Coord {
    pub const ORIGIN: Coord = coord!(0, 0);

    pub fn new(x: i32, y: i32) -> Self {
        coord!(x, y)
    }

    /// component-wise sum, clamped to the edge of the grid.
    pub fn plus(self, other: Coord) -> Self {
        self + other
    }

    /// component-wise sum, `None` past the edge of the grid.
    pub fn checked_plus(self, other: Coord) -> Option<Self> {
        Some(coord!(self.x.checked_add(other.x)?, self.y.checked_add(other.y)?))
    }

    /// the 3x3 block centered on this position, row by row.
    /// positions past the edge of the grid are left out.
    pub fn neighborhood_and_self(self) -> impl Iterator<Item = Coord> {
        OFFSETS
            .into_iter()
            .flat_map(|dy| OFFSETS.into_iter().map(move |dx| coord!(dx, dy)))
            .filter_map(move |offset| self.checked_plus(offset))
    }

    /// the surrounding positions, same order as `neighborhood_and_self` with the center removed.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        self.neighborhood_and_self().filter(move |&c| c != self)
    }
}

impl Add for Coord {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        coord!(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Coord {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        coord!(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        coord!(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus() {
        assert_eq!(coord!(1, 2).plus(coord!(-3, 4)), coord!(-2, 6));
        assert_eq!(coord!(1, 2) - coord!(1, 2), Coord::ORIGIN);
    }

    #[test]
    fn sums_stop_at_the_edge() {
        assert_eq!(coord!(i32::MAX, 0) + coord!(1, 1), coord!(i32::MAX, 1));
        assert_eq!(coord!(0, i32::MIN) - coord!(1, 1), coord!(-1, i32::MIN));
        assert_eq!(coord!(i32::MAX, 0).checked_plus(coord!(1, 0)), None);
        assert_eq!(coord!(5, 0).checked_plus(coord!(1, 0)), Some(coord!(6, 0)));
    }

    #[test]
    fn neighborhood() {
        let center = coord!(5, -5);
        let block: Vec<_> = center.neighborhood_and_self().collect();
        assert_eq!(block.len(), 9);
        assert_eq!(block[0], coord!(4, -6));
        assert_eq!(block[4], center);
        assert_eq!(block[8], coord!(6, -4));

        let mut sorted = block.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 9);

        // recomputed on every call
        assert!(block.into_iter().eq(center.neighborhood_and_self()));
    }

    #[test]
    fn neighbors() {
        let center = coord!(0, 0);
        let around: Vec<_> = center.neighbors().collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&center));
        assert!(around
            .iter()
            .all(|c| (c.x - center.x).abs() <= 1 && (c.y - center.y).abs() <= 1));
        assert_eq!(around[0], coord!(-1, -1));
        assert_eq!(around[3], coord!(-1, 0));
        assert_eq!(around[4], coord!(1, 0));
        assert_eq!(around[7], coord!(1, 1));
    }

    #[test]
    fn neighbors_at_the_edge() {
        assert_eq!(coord!(i32::MAX, 0).neighbors().count(), 5);
        assert_eq!(coord!(i32::MIN, i32::MIN).neighbors().count(), 3);
        assert_eq!(coord!(i32::MIN, i32::MAX).neighborhood_and_self().count(), 4);
        assert!(coord!(i32::MAX, i32::MAX)
            .neighbors()
            .all(|c| c.x >= i32::MAX - 1 && c.y >= i32::MAX - 1));
    }

    #[test]
    fn ordering() {
        assert!(coord!(0, 5) < coord!(1, -5));
        assert!(coord!(1, -5) < coord!(1, 0));
    }
}
