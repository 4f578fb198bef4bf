//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};
use super::ui::{Hit, hit_test};
use crate::config::GameConfig;
use crate::game::{ClickOutcome, GameSession, Position, Rules};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    highlight_winning_line: bool,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(rules: Rules, highlight_winning_line: bool) -> Self {
        Self {
            session: GameSession::new(rules),
            cursor: Position::Center,
            highlight_winning_line,
            notice: None,
            should_quit: false,
        }
    }

    /// Creates an application from a loaded configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(*config.rules(), config.display().highlight_winning_line)
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the winning line is highlighted.
    pub fn highlight_winning_line(&self) -> bool {
        self.highlight_winning_line
    }

    /// One-line feedback about the last action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Clicks `pos` on the board.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        let outcome = self.session.click(pos);
        self.notice = match outcome {
            ClickOutcome::Marked(_) => None,
            ClickOutcome::Won { winner, line } => Some(format!("{} completed the {}", winner, line)),
            ClickOutcome::Drawn => Some("Board full, no line completed".to_string()),
            ClickOutcome::Ignored(reason) => Some(format!("Nothing to do: {}", reason)),
        };
        outcome
    }

    /// Starts the next round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.session.reset();
        self.notice = Some(format!(
            "Round {}: {} moves first",
            self.session.round(),
            self.session.first_mover()
        ));
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click(self.cursor);
            }
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.click(pos);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event against a frame of size `area`.
    ///
    /// A left click on a cell claims it; a left click on the status line resets
    /// once the round is over.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match hit_test(area, mouse.column, mouse.row) {
            Some(Hit::Cell(pos)) => {
                self.cursor = pos;
                self.click(pos);
            }
            Some(Hit::Status) if self.session.is_over() => self.reset(),
            hit => debug!(?hit, "Click landed on nothing actionable"),
        }
    }
}
