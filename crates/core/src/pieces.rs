//! Pieces module - tetromino bitmaps and rotation
//!
//! Each kind has a square bitmap: 2x2 for O, 4x4 for I, 3x3 for the rest.
//! Rotation is a plain 90° clockwise transform of the bitmap around its own
//! square. There are no wall kicks: callers test the rotated bitmap at the
//! unchanged position and drop it if it does not fit.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::types::PieceKind;

/// Largest bitmap side length (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square piece bitmap, stored in a fixed 4x4 array.
///
/// Only the top-left `size x size` region is meaningful; the rest is always
/// `false`, so derived equality compares bitmaps exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a bitmap from `N` rows of `N` cells (non-zero = filled).
    ///
    /// # Panics
    ///
    /// Panics if `N` is larger than [`MAX_SHAPE_SIZE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let shape = Shape::from_rows([[1, 1], [1, 0]]);
    /// assert_eq!(shape.size(), 2);
    /// assert_eq!(shape.cells().count(), 3);
    /// ```
    pub fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N <= MAX_SHAPE_SIZE, "shape size {} exceeds {}", N, MAX_SHAPE_SIZE);
        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                out[y][x] = v != 0;
            }
        }
        Self {
            size: N as u8,
            rows: out,
        }
    }

    /// Spawn bitmap for a piece kind
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows([
                [0, 0, 0, 0],
                [1, 1, 1, 1],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            PieceKind::O => Self::from_rows([[1, 1], [1, 1]]),
            PieceKind::T => Self::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
            PieceKind::S => Self::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
            PieceKind::Z => Self::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
            PieceKind::J => Self::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
            PieceKind::L => Self::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        }
    }

    /// Side length of the bitmap
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether bitmap cell (x, y) is filled. Out of range reads as empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.rows[y][x]
    }

    /// Iterate the bitmap rows, each trimmed to `size` cells
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        let n = self.size as usize;
        self.rows[..n].iter().map(move |row| &row[..n])
    }

    /// Offsets `(dx, dy)` of every filled cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.rows[y][x].then_some((x as i8, y as i8)))
        })
    }

    /// The bitmap turned 90° clockwise: `rotated[x][n-1-y] = shape[y][x]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);
    /// assert_eq!(t.rotated_cw(), Shape::from_rows([[0, 1, 0], [0, 1, 1], [0, 1, 0]]));
    /// ```
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                out[x][n - 1 - y] = self.rows[y][x];
            }
        }
        Self {
            size: self.size,
            rows: out,
        }
    }
}

/// Serialized as rows of 0/1, the bitmap layout renderers expect.
impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size as usize))?;
        for row in self.rows() {
            seq.serialize_element(&BitRow(row))?;
        }
        seq.end()
    }
}

struct BitRow<'a>(&'a [bool]);

impl Serialize for BitRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|&filled| u8::from(filled)))
    }
}
