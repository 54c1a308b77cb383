use crate::position::{wrap, Position};

/// Dense row-major 2-D container, fixed size at construction.
///
/// Out-of-range access is a programming error and panics; there is no
/// recoverable error path here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        Self {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols, "grid access out of range");
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.cells[self.index(row, col)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }

    pub fn at(&self, pos: Position) -> &T {
        assert!(pos.row >= 0 && pos.col >= 0, "grid access out of range");
        self.get(pos.row as usize, pos.col as usize)
    }

    pub fn at_mut(&mut self, pos: Position) -> &mut T {
        assert!(pos.row >= 0 && pos.col >= 0, "grid access out of range");
        self.get_mut(pos.row as usize, pos.col as usize)
    }
}

impl<T: Copy + Default> Grid<T> {
    /// Extract the `N`×`N` Moore neighborhood centered on (`row`, `col`),
    /// row-major, as cell copies. `N` must be odd; the radius is `N / 2`.
    ///
    /// Positions whose radius box stays inside the grid copy directly; only
    /// queries near an edge pay for wraparound, and each coordinate wraps
    /// exactly once (the radius must not exceed a full dimension).
    pub fn neighborhood<const N: usize>(&self, row: usize, col: usize) -> [[T; N]; N] {
        assert!(N % 2 == 1, "neighborhood width must be odd");
        let radius = N / 2;
        debug_assert!(radius < self.rows && radius < self.cols);
        let _ = self.index(row, col);

        let mut out = [[T::default(); N]; N];
        if self.needs_wraparound(row, col, radius) {
            for (r, out_row) in out.iter_mut().enumerate() {
                let src_row = wrap(row as i32 - radius as i32 + r as i32, self.rows as i32) as usize;
                for (c, slot) in out_row.iter_mut().enumerate() {
                    let src_col =
                        wrap(col as i32 - radius as i32 + c as i32, self.cols as i32) as usize;
                    *slot = *self.get(src_row, src_col);
                }
            }
        } else {
            for (r, out_row) in out.iter_mut().enumerate() {
                let src_row = row - radius + r;
                for (c, slot) in out_row.iter_mut().enumerate() {
                    *slot = *self.get(src_row, col - radius + c);
                }
            }
        }
        out
    }

    #[inline]
    fn needs_wraparound(&self, row: usize, col: usize, radius: usize) -> bool {
        row < radius || col < radius || row >= self.rows - radius || col >= self.cols - radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(rows: usize, cols: usize) -> Grid<u32> {
        let mut grid = Grid::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                *grid.get_mut(row, col) = (row * cols + col) as u32;
            }
        }
        grid
    }

    #[test]
    fn interior_neighborhood_is_row_major_and_centered() {
        let grid = numbered(5, 5);
        let n = grid.neighborhood::<3>(2, 2);
        assert_eq!(n, [[6, 7, 8], [11, 12, 13], [16, 17, 18]]);
        assert_eq!(n[1][1], *grid.get(2, 2));
    }

    #[test]
    fn edge_neighborhood_wraps_to_opposite_side() {
        let grid = numbered(4, 4);
        let n = grid.neighborhood::<3>(0, 0);
        // Row above (0,0) is row 3; column left of (0,0) is column 3.
        assert_eq!(n[0], [15, 12, 13]);
        assert_eq!(n[1], [3, 0, 1]);
        assert_eq!(n[2], [7, 4, 5]);
    }

    #[test]
    fn neighborhood_agrees_with_manual_modulo_everywhere() {
        let grid = numbered(4, 5);
        for row in 0..4usize {
            for col in 0..5usize {
                let n = grid.neighborhood::<3>(row, col);
                for dr in 0..3usize {
                    for dc in 0..3usize {
                        let src_row = (row + 4 + dr - 1) % 4;
                        let src_col = (col + 5 + dc - 1) % 5;
                        assert_eq!(n[dr][dc], *grid.get(src_row, src_col));
                    }
                }
            }
        }
    }

    #[test]
    fn at_and_get_address_the_same_cell() {
        let mut grid = numbered(3, 3);
        *grid.at_mut(Position::new(1, 2)) = 99;
        assert_eq!(*grid.get(1, 2), 99);
        assert_eq!(*grid.at(Position::new(1, 2)), 99);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_access_panics() {
        let grid = numbered(3, 3);
        grid.get(3, 0);
    }
}
