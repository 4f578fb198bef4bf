//! Crosses-and-zeros game state.
//!
//! Each side owns its own 3x3 grid of claimed cells. The rendered board is
//! derived from both grids, and a win is a side's grid covering one of the
//! eight [`WinPattern`]s.

mod action;
mod board;
mod grid;
mod invariants;
mod patterns;
mod player;
mod rules;
mod session;
mod sign;

pub use action::{ClickOutcome, IgnoreReason, Move};
pub use board::{Board, BoardCell, derive_board, is_full};
pub use grid::{Grid, Position};
pub use invariants::{BalancedTurns, DisjointClaims, Invariant};
pub use patterns::WinPattern;
pub use player::{PlayerGrid, PlayerState};
pub use rules::Rules;
pub use session::{GameSession, GameStatus};
pub use sign::{PlayerSign, Sign};
