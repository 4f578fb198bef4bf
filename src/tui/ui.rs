//! Stateless screen rendering and pointer hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use super::views::{BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CellView, RowView, cell_rect};
use crate::game::{GameSession, GameStatus, Position};

const HELP: &str = "Click/Enter: claim | Arrows: move | 1-9: claim | R: reset | Q: quit";

/// Screen regions, shared by drawing and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line; doubles as the reset control once the round is over.
    pub status: Rect,
    /// The 3x3 board, centered.
    pub board: Rect,
    /// Help or notice line.
    pub help: Rect,
}

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// The status line.
    Status,
}

/// Splits the frame into its regions.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(3),            // Status
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Help
        ])
        .split(area);

    ScreenLayout {
        title: chunks[0],
        status: chunks[1],
        board: center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT),
        help: chunks[3],
    }
}

/// Finds what lies under terminal cell `(column, row)` for a frame of size `area`.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Hit> {
    let layout = screen_layout(area);
    if let Some(pos) = Position::ALL
        .into_iter()
        .find(|&pos| contains(cell_rect(layout.board, pos), column, row))
    {
        return Some(Hit::Cell(pos));
    }
    contains(layout.status, column, row).then_some(Hit::Status)
}

/// Status line text for the session.
pub fn status_text(session: &GameSession) -> String {
    match session.status() {
        GameStatus::Playing => format!("Current turn: {}", session.current_sign()),
        GameStatus::Won { winner, .. } => format!("Winner: {}  [r] Reset", winner),
        GameStatus::Drawn => "Draw  [r] Reset".to_string(),
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = screen_layout(frame.area());
    let session = app.session();

    let title = Paragraph::new(format!("Strictly Crosses - Round {}", session.round()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let status_style = if session.is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(status_text(session))
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    draw_board(frame, layout.board, app);

    let help = Paragraph::new(app.notice().unwrap_or(HELP))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let board = session.board();
    let line = session.winning_line().filter(|_| app.highlight_winning_line());

    for (row, cells) in board.rows().iter().enumerate() {
        let views = cells.map(|cell| {
            CellView::new(cell.sign)
                .disabled(session.is_over())
                .highlighted(line.is_some_and(|line| line.contains(cell.position)))
                .focused(!session.is_over() && cell.position == app.cursor())
        });
        let row_area = Rect::new(
            area.x,
            area.y.saturating_add(row as u16 * CELL_HEIGHT),
            area.width,
            CELL_HEIGHT,
        )
        .intersection(area);
        frame.render_widget(RowView::new(views), row_area);
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
