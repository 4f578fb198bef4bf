//! Merges both player grids into the board that gets rendered.

use super::grid::{Grid, Position};
use super::player::PlayerGrid;
use super::sign::Sign;
use derive_new::new;
use tracing::{debug, instrument};

/// A rendered cell, derived from the two player grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct BoardCell {
    /// Where the cell sits.
    pub position: Position,
    /// What it shows.
    pub sign: Sign,
    /// Whether a click here claims the cell. True exactly for empty cells.
    pub clickable: bool,
}

/// The merged 3x3 board.
pub type Board = Grid<BoardCell>;

/// Derives the board from both player grids.
///
/// Resolution is per cell: a Cross claim wins over a Zero claim on the same
/// cell, so a corrupted pair of grids still renders one sign per cell.
#[instrument(skip_all)]
pub fn derive_board(cross: &PlayerGrid, zero: &PlayerGrid) -> Board {
    let board = Grid::from_fn(|pos| {
        let sign = if cross[pos] {
            Sign::Cross
        } else if zero[pos] {
            Sign::Zero
        } else {
            Sign::Empty
        };
        BoardCell::new(pos, sign, sign == Sign::Empty)
    });
    debug!(
        empty = board.iter().filter(|(_, cell)| cell.clickable).count(),
        "Board derived"
    );
    board
}

/// Whether every cell is claimed.
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|(_, cell)| cell.sign != Sign::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grids_give_clickable_board() {
        let none = Grid::generate(|| false);
        let board = derive_board(&none, &none);
        assert!(board.iter().all(|(_, c)| c.sign == Sign::Empty && c.clickable));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_claimed_cells_lose_click_handler() {
        let mut cross = Grid::generate(|| false);
        let mut zero = Grid::generate(|| false);
        cross[Position::TopLeft] = true;
        zero[Position::Center] = true;

        let board = derive_board(&cross, &zero);
        assert_eq!(board[Position::TopLeft], BoardCell::new(Position::TopLeft, Sign::Cross, false));
        assert_eq!(board[Position::Center], BoardCell::new(Position::Center, Sign::Zero, false));
        assert!(board[Position::BottomRight].clickable);
    }

    #[test]
    fn test_double_claim_resolves_to_cross() {
        let cross = Grid::from_fn(|pos| pos == Position::Center);
        let zero = Grid::from_fn(|pos| pos == Position::Center);
        assert_eq!(derive_board(&cross, &zero)[Position::Center].sign, Sign::Cross);
    }

    #[test]
    fn test_full_board() {
        let cross = Grid::from_fn(|pos| pos.to_index() % 2 == 0);
        let zero = Grid::from_fn(|pos| pos.to_index() % 2 == 1);
        assert!(is_full(&derive_board(&cross, &zero)));
    }
}
