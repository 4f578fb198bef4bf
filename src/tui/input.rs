//! Keyboard navigation over the board.

use crate::game::Position;
use crossterm::event::KeyCode;

/// Moves the cursor one cell in the arrow's direction, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}

/// Maps the digit keys `1`-`9` to positions in row-major order.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10)? {
        0 => None,
        digit => Position::from_index(digit as usize - 1),
    }
}
