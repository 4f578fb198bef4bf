//! Fixed 3x3 grid primitive and the positions that address it.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use tracing::instrument;

/// A cell on the 3x3 board.
///
/// Positions are a closed set, so a grid can never be indexed out of range.
/// Use [`Position::from_row_col`] to convert raw coordinates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns the position at `(row, col)`, or `None` when either is outside `0..3`.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Creates a position from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts the position to its row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A fixed 3x3 container of cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: [[T; 3]; 3],
}

impl<T> Grid<T> {
    /// Fills all nine slots by calling `generator` once per slot, in row-major order.
    pub fn generate(mut generator: impl FnMut() -> T) -> Self {
        Self::from_fn(|_| generator())
    }

    /// Fills each slot from its position.
    pub fn from_fn(mut f: impl FnMut(Position) -> T) -> Self {
        Self {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| f(Position::ALL[row * 3 + col]))
            }),
        }
    }

    /// Wraps an existing row-major array.
    pub fn from_rows(cells: [[T; 3]; 3]) -> Self {
        Self { cells }
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> &[[T; 3]; 3] {
        &self.cells
    }

    /// Iterates `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        Position::ALL.into_iter().map(move |pos| (pos, &self[pos]))
    }

    /// Builds a new grid by applying `f` to every cell.
    pub fn map<U>(&self, mut f: impl FnMut(Position, &T) -> U) -> Grid<U> {
        Grid::from_fn(|pos| f(pos, &self[pos]))
    }
}

impl<T: Default> Default for Grid<T> {
    fn default() -> Self {
        Self::generate(T::default)
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        &self.cells[pos.row()][pos.col()]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        &mut self.cells[pos.row()][pos.col()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip_for_every_position() {
        for pos in Position::ALL {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_generate_calls_generator_nine_times() {
        let mut calls = 0;
        let grid = Grid::generate(|| {
            calls += 1;
            calls
        });
        assert_eq!(calls, 9);
        assert_eq!(grid[Position::TopLeft], 1);
        assert_eq!(grid[Position::BottomRight], 9);
    }

    #[test]
    fn test_index_mut_targets_single_cell() {
        let mut grid: Grid<bool> = Grid::default();
        grid[Position::MiddleRight] = true;
        assert_eq!(grid.rows()[1], [false, false, true]);
        assert_eq!(grid.iter().filter(|(_, v)| **v).count(), 1);
    }

    #[test]
    fn test_map_sees_position_and_value() {
        let grid = Grid::from_fn(|pos| pos.to_index());
        let doubled = grid.map(|pos, v| (pos, v * 2));
        assert_eq!(doubled[Position::BottomCenter], (Position::BottomCenter, 14));
    }
}
