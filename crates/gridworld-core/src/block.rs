use crate::position::Position;

/// One block of the partitioned world: a contiguous dense cell array.
/// Edge blocks may be smaller than the nominal block size.
#[derive(Clone, Debug)]
pub struct Block<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Block<T> {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Block<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols, "block access out of range");
        row * self.cols + col
    }

    pub fn cell(&self, row: usize, col: usize) -> &T {
        &self.cells[self.index(row, col)]
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut T {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }
}

/// The full grid partitioned into row-major blocks of bounded size.
///
/// Global cell coordinates resolve to a block by integer division against
/// the nominal block dimensions, then to a cell inside it by the remainder.
/// The union of all blocks' cells is exactly the grid. A cell strictly
/// inside its block (one cell of margin) has its whole Moore neighborhood
/// inside the same block, so it never needs wraparound-aware lookup.
#[derive(Clone, Debug)]
pub struct BlockMap<T> {
    rows: usize,
    cols: usize,
    nominal_block_rows: usize,
    nominal_block_cols: usize,
    block_rows: usize,
    block_cols: usize,
    blocks: Vec<Block<T>>,
}

impl<T: Clone + Default> BlockMap<T> {
    pub fn new(rows: usize, cols: usize, nominal_block_rows: usize, nominal_block_cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "block map dimensions must be positive");
        assert!(
            nominal_block_rows > 0 && nominal_block_cols > 0,
            "nominal block dimensions must be positive"
        );
        let block_rows = rows.div_ceil(nominal_block_rows);
        let block_cols = cols.div_ceil(nominal_block_cols);
        let mut blocks = Vec::with_capacity(block_rows * block_cols);
        for block_row in 0..block_rows {
            for block_col in 0..block_cols {
                let rows_here = (rows - block_row * nominal_block_rows).min(nominal_block_rows);
                let cols_here = (cols - block_col * nominal_block_cols).min(nominal_block_cols);
                blocks.push(Block::new(rows_here, cols_here));
            }
        }
        Self {
            rows,
            cols,
            nominal_block_rows,
            nominal_block_cols,
            block_rows,
            block_cols,
            blocks,
        }
    }
}

impl<T> BlockMap<T> {
    /// Grid height in cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in cells.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Partition height in blocks.
    pub fn block_rows(&self) -> usize {
        self.block_rows
    }

    /// Partition width in blocks.
    pub fn block_cols(&self) -> usize {
        self.block_cols
    }

    pub fn block(&self, block_row: usize, block_col: usize) -> &Block<T> {
        assert!(
            block_row < self.block_rows && block_col < self.block_cols,
            "block index out of range"
        );
        &self.blocks[block_row * self.block_cols + block_col]
    }

    /// Global position of a block's top-left cell.
    pub fn block_origin(&self, block_row: usize, block_col: usize) -> Position {
        assert!(
            block_row < self.block_rows && block_col < self.block_cols,
            "block index out of range"
        );
        Position::new(
            (block_row * self.nominal_block_rows) as i32,
            (block_col * self.nominal_block_cols) as i32,
        )
    }

    #[inline]
    fn locate(&self, pos: Position) -> (usize, usize, usize) {
        assert!(
            pos.row >= 0
                && pos.col >= 0
                && (pos.row as usize) < self.rows
                && (pos.col as usize) < self.cols,
            "cell access out of range"
        );
        let row = pos.row as usize;
        let col = pos.col as usize;
        let block_row = row / self.nominal_block_rows;
        let block_col = col / self.nominal_block_cols;
        let cell_row = row - block_row * self.nominal_block_rows;
        let cell_col = col - block_col * self.nominal_block_cols;
        (block_row * self.block_cols + block_col, cell_row, cell_col)
    }

    pub fn cell(&self, pos: Position) -> &T {
        let (block_idx, cell_row, cell_col) = self.locate(pos);
        self.blocks[block_idx].cell(cell_row, cell_col)
    }

    pub fn cell_mut(&mut self, pos: Position) -> &mut T {
        let (block_idx, cell_row, cell_col) = self.locate(pos);
        self.blocks[block_idx].cell_mut(cell_row, cell_col)
    }
}
