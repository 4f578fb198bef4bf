//! Strictly Crosses library - crosses and zeros in the terminal
//!
//! Two players take turns claiming cells on a 3x3 board. Each side keeps its
//! own grid of claimed cells; a round is won when a side's grid covers one of
//! the eight winning lines.
//!
//! # Architecture
//!
//! - **Game**: player grids, win patterns, board derivation, and the session coordinator
//! - **Config**: TOML configuration for rules and display
//! - **TUI**: ratatui cell/row views, mouse and keyboard input, event loop
//!
//! # Example
//!
//! ```
//! use strictly_crosses::{ClickOutcome, GameSession, PlayerSign, Position, Rules, WinPattern};
//!
//! let mut session = GameSession::new(Rules::default());
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::BottomRight,
//! ] {
//!     session.click(pos);
//! }
//! let outcome = session.click(Position::TopRight);
//! assert_eq!(
//!     outcome,
//!     ClickOutcome::Won { winner: PlayerSign::Cross, line: WinPattern::TopRow }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DisplayConfig, GameConfig};

// Crate-level exports - Game types
pub use game::{
    BalancedTurns, Board, BoardCell, ClickOutcome, DisjointClaims, GameSession, GameStatus, Grid,
    IgnoreReason, Invariant, Move, PlayerGrid, PlayerSign, PlayerState, Position, Rules, Sign,
    WinPattern, derive_board, is_full,
};

// Crate-level exports - Terminal UI
pub use tui::{
    App, BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, CellView, Hit, RowView, ScreenLayout,
    cell_rect, digit_position, draw, hit_test, move_cursor, run_tui, screen_layout, status_text,
};
