//! Bounded 2D character grid with bounds-checked access.
//!
//! The grid is the immutable search surface: rows of equal length, at most
//! 64×64, case-folded at construction and shared read-only across the
//! concurrent direction scans.

use crate::error::{GridScanError, Result};
use crate::scan::direction::Direction;

/// Maximum number of rows or columns a grid may have.
pub const MAX_DIMENSION: usize = 64;

/// An immutable rows × cols character matrix.
///
/// Cells are stored row-major in a flat arena; all characters are folded to
/// lowercase when the grid is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from ordered rows.
    ///
    /// Fails with `InvalidInput` when the row collection is empty, any row's
    /// length differs from the first row's, or either dimension exceeds
    /// [`MAX_DIMENSION`].
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.is_empty() {
            return Err(GridScanError::invalid_input("grid requires at least one row"));
        }
        if rows.len() > MAX_DIMENSION {
            return Err(GridScanError::invalid_input(format!(
                "grid has {} rows but the maximum is {MAX_DIMENSION}",
                rows.len()
            )));
        }

        let folded: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.as_ref().to_lowercase().chars().collect())
            .collect();

        let cols = folded[0].len();
        if cols == 0 {
            return Err(GridScanError::invalid_input("grid rows must not be empty"));
        }
        if cols > MAX_DIMENSION {
            return Err(GridScanError::invalid_input(format!(
                "grid has {cols} columns but the maximum is {MAX_DIMENSION}"
            )));
        }
        for (i, row) in folded.iter().enumerate() {
            if row.len() != cols {
                return Err(GridScanError::invalid_input(format!(
                    "row {i} has length {} but row 0 has length {cols}",
                    row.len()
                )));
            }
        }

        let mut cells = Vec::with_capacity(folded.len() * cols);
        for row in &folded {
            cells.extend_from_slice(row);
        }

        Ok(Grid {
            cells,
            rows: folded.len(),
            cols,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn is_valid(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Bounds-checked cell read.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        if self.is_valid(row, col) {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// The full run of characters from `(row, col)` to the grid boundary in
    /// the given direction.
    ///
    /// Empty when the start position is out of bounds.
    pub fn run_from(&self, row: usize, col: usize, direction: Direction) -> Vec<char> {
        let (dr, dc) = direction.delta();
        let mut run = Vec::new();
        let (mut r, mut c) = (row, col);
        while self.is_valid(r, c) {
            run.push(self.cells[r * self.cols + c]);
            r += dr;
            c += dc;
        }
        run
    }
}
