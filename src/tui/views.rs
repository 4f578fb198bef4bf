//! Stateless cell and row widgets.

use crate::game::{Position, Sign};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Width of one rendered cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one rendered cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the whole board.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
/// Height of the whole board.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

/// Screen rectangle of `pos` inside a board drawn at `board`.
///
/// Clipped to `board`, so a cramped terminal yields empty rectangles rather
/// than cells spilling outside the board area.
pub fn cell_rect(board: Rect, pos: Position) -> Rect {
    let x = board.x.saturating_add(pos.col() as u16 * CELL_WIDTH);
    let y = board.y.saturating_add(pos.row() as u16 * CELL_HEIGHT);
    Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board)
}

/// One clickable square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    sign: Sign,
    disabled: bool,
    highlighted: bool,
    focused: bool,
}

impl CellView {
    /// A cell showing `sign`, enabled and unhighlighted.
    pub fn new(sign: Sign) -> Self {
        Self {
            sign,
            disabled: false,
            highlighted: false,
            focused: false,
        }
    }

    /// Renders dimmed; set once the round is over.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Marks the cell as part of the winning line.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Draws the keyboard cursor on this cell.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for CellView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = match self.sign {
            Sign::Cross => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            Sign::Zero => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Sign::Empty => Style::default(),
        };
        let mut border = Style::default().fg(Color::DarkGray);

        if self.disabled {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.highlighted {
            style = style.bg(Color::Yellow);
            border = border.fg(Color::Yellow);
        }
        if self.focused {
            border = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        }

        Paragraph::new(self.sign.label())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .render(area, buf);
    }
}

/// Three cells side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView {
    cells: [CellView; 3],
}

impl RowView {
    /// A row of the given cells, left to right.
    pub fn new(cells: [CellView; 3]) -> Self {
        Self { cells }
    }
}

impl Widget for RowView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (col, cell) in self.cells.into_iter().enumerate() {
            let x = area.x.saturating_add(col as u16 * CELL_WIDTH);
            let rect = Rect::new(x, area.y, CELL_WIDTH, CELL_HEIGHT).intersection(area);
            if !rect.is_empty() {
                cell.render(rect, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_renders_label_in_center() {
        let mut buf = Buffer::empty(Rect::new(0, 0, CELL_WIDTH, CELL_HEIGHT));
        CellView::new(Sign::Cross).render(buf.area, &mut buf);
        assert_eq!(buf[(3, 1)].symbol(), "X");
        assert_eq!(buf[(0, 0)].symbol(), "┌");
    }

    #[test]
    fn test_highlighted_cell_has_gold_background() {
        let mut buf = Buffer::empty(Rect::new(0, 0, CELL_WIDTH, CELL_HEIGHT));
        CellView::new(Sign::Zero).highlighted(true).render(buf.area, &mut buf);
        assert_eq!(buf[(3, 1)].bg, Color::Yellow);
    }

    #[test]
    fn test_disabled_cell_is_dimmed() {
        let mut buf = Buffer::empty(Rect::new(0, 0, CELL_WIDTH, CELL_HEIGHT));
        CellView::new(Sign::Empty).disabled(true).render(buf.area, &mut buf);
        assert!(buf[(3, 1)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_row_renders_three_cells() {
        let mut buf = Buffer::empty(Rect::new(0, 0, BOARD_WIDTH, CELL_HEIGHT));
        RowView::new([
            CellView::new(Sign::Cross),
            CellView::new(Sign::Empty),
            CellView::new(Sign::Zero),
        ])
        .render(buf.area, &mut buf);
        assert_eq!(buf[(3, 1)].symbol(), "X");
        assert_eq!(buf[(10, 1)].symbol(), " ");
        assert_eq!(buf[(17, 1)].symbol(), "O");
    }

    #[test]
    fn test_cell_rect_offsets() {
        let board = Rect::new(10, 5, BOARD_WIDTH, BOARD_HEIGHT);
        assert_eq!(cell_rect(board, Position::TopLeft), Rect::new(10, 5, 7, 3));
        assert_eq!(cell_rect(board, Position::BottomRight), Rect::new(24, 11, 7, 3));
    }
}
