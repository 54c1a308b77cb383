use std::ops::{Add, Sub};

/// Integer grid coordinate, (row, col), equality by component.
///
/// Coordinates may go out of range transiently (e.g. a neighbor offset past
/// a world edge) before being folded back by [`wrap`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Integer delta between two positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionOffset {
    pub row: i32,
    pub col: i32,
}

impl PositionOffset {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add<PositionOffset> for Position {
    type Output = Position;

    fn add(self, offset: PositionOffset) -> Position {
        Position::new(self.row + offset.row, self.col + offset.col)
    }
}

impl Sub<PositionOffset> for Position {
    type Output = Position;

    fn sub(self, offset: PositionOffset) -> Position {
        Position::new(self.row - offset.row, self.col - offset.col)
    }
}

impl Sub for Position {
    type Output = PositionOffset;

    fn sub(self, other: Position) -> PositionOffset {
        PositionOffset::new(self.row - other.row, self.col - other.col)
    }
}

/// Fold an index back into `[0, dim)` by exactly one toroidal correction.
///
/// Callers guarantee the index is off by at most one full dimension, which
/// holds for any neighbor offset whose radius does not exceed `dim`.
#[inline]
pub fn wrap(index: i32, dim: i32) -> i32 {
    debug_assert!(dim > 0);
    if index < 0 {
        index + dim
    } else if index >= dim {
        index - dim
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_offset_arithmetic_round_trips() {
        let a = Position::new(3, 7);
        let b = Position::new(1, -2);
        let d = a - b;
        assert_eq!(d, PositionOffset::new(2, 9));
        assert_eq!(b + d, a);
        assert_eq!(a - d, b);
    }

    #[test]
    fn wrap_matches_modulo_for_single_step() {
        for dim in [1, 2, 3, 5, 128] {
            for index in -dim..(2 * dim) {
                assert_eq!(wrap(index, dim), (index + dim) % dim, "index {index} dim {dim}");
            }
        }
    }

    #[test]
    fn wrap_leaves_in_range_indices_untouched() {
        for index in 0..10 {
            assert_eq!(wrap(index, 10), index);
        }
    }
}
