//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Pieces are tested and stamped through their bitmaps. Bitmap rows above the
//! top edge (negative y) are allowed and simply ignored.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
pub const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by a single line clear (sorted bottom to top).
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Check if a row has no filled cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_none()))
            .unwrap_or(false)
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Whether `shape` placed with its top-left corner at `pos` fits.
    ///
    /// Every filled bitmap cell must land inside the columns and above the
    /// floor. Cells above the top edge are allowed; cells on the board must
    /// be empty.
    pub fn fits(&self, shape: &Shape, pos: Position) -> bool {
        shape.cells().all(|(dx, dy)| {
            let x = pos.x as i16 + dx as i16;
            let y = pos.y as i16 + dy as i16;
            if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
                return false;
            }
            y < 0 || self.is_valid(x as i8, y as i8)
        })
    }

    /// Write the filled cells of `shape` at `pos` with `kind`.
    ///
    /// Only the piece's own in-bounds cells are written; everything else on
    /// the board is left untouched.
    pub fn stamp(&mut self, shape: &Shape, pos: Position, kind: PieceKind) {
        for (dx, dy) in shape.cells() {
            let x = pos.x.saturating_add(dx);
            let y = pos.y.saturating_add(dy);
            self.set(x, y, Some(kind));
        }
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Uses a two-pointer algorithm with zero-allocation
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Fresh empty rows on top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a 2D row array (for snapshots)
    pub fn write_rows(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of [`clear_lines`]: the compacted board and which rows went away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub board: Board,
    pub cleared_rows: ClearedRows,
}

impl LineClear {
    pub fn lines_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}

/// Remove every full row, letting the rows above fall into the gap.
///
/// Returns a new board; the input is not modified. Surviving rows keep their
/// relative order and the board keeps exactly `BOARD_HEIGHT` rows.
pub fn clear_lines(board: &Board) -> LineClear {
    let mut next = board.clone();
    let cleared_rows = next.clear_full_rows();
    LineClear {
        board: next,
        cleared_rows,
    }
}
