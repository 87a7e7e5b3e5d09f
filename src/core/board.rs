//! The tile grid.
//!
//! A `Board` is an N×N grid stored row-major. `0` is an empty cell and every
//! other value is a tile: a power of two no smaller than 2. Construction from
//! caller-supplied rows is validated, so a `Board` always satisfies both
//! invariants.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::{Axis, Order};
use super::error::EngineError;

/// One row or column, read in travel order.
pub type Line = SmallVec<[u32; 4]>;

/// Square grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Default side length.
    pub const SIZE: usize = 4;

    /// Largest tile value. Two of these never merge.
    pub const MAX_TILE: u32 = 1 << 31;

    /// Create an empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a board from rows, rejecting non-square shapes and non-tile values.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, EngineError> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidBoardState("board has no rows".into()));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(EngineError::InvalidBoardState(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    size
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(EngineError::InvalidBoardState(format!(
                        "cell ({}, {}) holds {}, which is neither 0 nor a power of two >= 2",
                        r, c, value
                    )));
                }
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    /// If either coordinate is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.index(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(is_tile_value(value));
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    /// Copy out the grid as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Coordinates of every empty cell, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// True if the board holds no tiles at all.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// True if any cell equals `value`.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        self.cells.contains(&value)
    }

    /// True if two horizontally or vertically adjacent tiles could merge.
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for r in 0..n {
            for c in 0..n {
                let v = self.get(r, c);
                if c + 1 < n && can_merge(v, self.get(r, c + 1)) {
                    return true;
                }
                if r + 1 < n && can_merge(v, self.get(r + 1, c)) {
                    return true;
                }
            }
        }
        false
    }

    /// True if the board is full and nothing can merge.
    #[must_use]
    pub fn has_no_moves(&self) -> bool {
        !self.contains(0) && !self.has_adjacent_pair()
    }

    /// Read line `index` along `axis` in the given order.
    #[must_use]
    pub fn line(&self, axis: Axis, index: usize, order: Order) -> Line {
        (0..self.size)
            .map(|k| self.get_on_line(axis, index, order, k))
            .collect()
    }

    /// Write `line` back along `axis`, undoing `order`.
    pub(crate) fn write_line(&mut self, axis: Axis, index: usize, order: Order, line: &[u32]) {
        debug_assert_eq!(line.len(), self.size);
        for (k, &value) in line.iter().enumerate() {
            let (r, c) = self.line_coords(axis, index, order, k);
            self.set(r, c, value);
        }
    }

    fn get_on_line(&self, axis: Axis, index: usize, order: Order, k: usize) -> u32 {
        let (r, c) = self.line_coords(axis, index, order, k);
        self.get(r, c)
    }

    fn line_coords(&self, axis: Axis, index: usize, order: Order, k: usize) -> (usize, usize) {
        let pos = match order {
            Order::Forward => k,
            Order::Reverse => self.size - 1 - k,
        };
        match axis {
            Axis::Row => (index, pos),
            Axis::Column => (pos, index),
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) out of range");
        row * self.size + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::SIZE)
    }
}

impl TryFrom<Vec<Vec<u32>>> for Board {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<u32>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().max(2).to_string().len() + 2;
        let rule: String = std::iter::once("+".to_string())
            .chain((0..self.size).map(|_| format!("{}+", "-".repeat(width))))
            .collect();

        writeln!(f, "{rule}")?;
        for row in self.rows() {
            write!(f, "|")?;
            for &val in row {
                if val == 0 {
                    write!(f, "{:width$}|", "")?;
                } else {
                    write!(f, "{:^width$}|", val)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// True for 0 and for powers of two in `2..=MAX_TILE`.
#[inline]
#[must_use]
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// True if two cells hold the same mergeable tile.
#[inline]
#[must_use]
pub fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < Board::MAX_TILE
}
