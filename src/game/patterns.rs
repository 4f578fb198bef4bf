//! The eight winning lines and the test that matches a player grid against them.

use super::grid::{Grid, Position};
use super::player::PlayerGrid;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight fixed winning lines.
///
/// Table order (rows, then columns, then diagonals) decides which line is
/// reported when a grid completes more than one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum WinPattern {
    /// Row 0.
    #[display("top row")]
    TopRow,
    /// Row 1.
    #[display("middle row")]
    MiddleRow,
    /// Row 2.
    #[display("bottom row")]
    BottomRow,
    /// Column 0.
    #[display("left column")]
    LeftColumn,
    /// Column 1.
    #[display("center column")]
    CenterColumn,
    /// Column 2.
    #[display("right column")]
    RightColumn,
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl WinPattern {
    /// The three positions forming this line.
    pub fn positions(self) -> [Position; 3] {
        use crate::game::grid::Position::*;

        match self {
            WinPattern::TopRow => [TopLeft, TopCenter, TopRight],
            WinPattern::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinPattern::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinPattern::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinPattern::CenterColumn => [TopCenter, Center, BottomCenter],
            WinPattern::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinPattern::MainDiagonal => [TopLeft, Center, BottomRight],
            WinPattern::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }

    /// The line as a 3x3 template.
    pub fn template(self) -> Grid<bool> {
        Grid::from_fn(|pos| self.contains(pos))
    }

    /// Whether every cell of the line is claimed in `grid`.
    ///
    /// Extra claimed cells outside the line do not prevent a match.
    pub fn is_matched_by(self, grid: &PlayerGrid) -> bool {
        self.template()
            .iter()
            .all(|(pos, &on_line)| !on_line || grid[pos])
    }

    /// First line in table order that `grid` completes.
    #[instrument(skip(grid))]
    pub fn first_match(grid: &PlayerGrid) -> Option<Self> {
        Self::iter().find(|pattern| pattern.is_matched_by(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(positions: &[Position]) -> PlayerGrid {
        Grid::from_fn(|pos| positions.contains(&pos))
    }

    #[test]
    fn test_eight_patterns_of_three_cells() {
        assert_eq!(WinPattern::iter().count(), 8);
        for pattern in WinPattern::iter() {
            let cells = pattern.template().iter().filter(|(_, on)| **on).count();
            assert_eq!(cells, 3, "{pattern} should mark exactly three cells");
        }
    }

    #[test]
    fn test_top_row_template() {
        assert_eq!(
            WinPattern::TopRow.template(),
            Grid::from_rows([[true, true, true], [false; 3], [false; 3]])
        );
    }

    #[test]
    fn test_each_pattern_matches_itself() {
        for pattern in WinPattern::iter() {
            assert_eq!(WinPattern::first_match(&pattern.template()), Some(pattern));
        }
    }

    #[test]
    fn test_extra_cells_do_not_block_match() {
        use crate::game::grid::Position::*;
        let grid = grid_of(&[TopLeft, Center, BottomRight, MiddleLeft]);
        assert_eq!(WinPattern::first_match(&grid), Some(WinPattern::MainDiagonal));
    }

    #[test]
    fn test_incomplete_line_does_not_match() {
        use crate::game::grid::Position::*;
        let grid = grid_of(&[TopLeft, TopCenter, Center]);
        assert_eq!(WinPattern::first_match(&grid), None);
    }
}
