//! Moves and the outcome of a click.

use super::grid::Position;
use super::patterns::WinPattern;
use super::sign::PlayerSign;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark applied during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Who marked.
    pub sign: PlayerSign,
    /// Where.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.sign, self.position.label())
    }
}

/// Why a click changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The cell already shows a sign.
    #[display("{} is already claimed", _0)]
    Occupied(Position),
    /// The round has ended; only reset does anything.
    #[display("round is over")]
    GameOver,
}

/// Result of [`GameSession::click`](super::GameSession::click).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The cell was claimed and the turn passed to the other sign.
    Marked(Move),
    /// The click completed a line.
    Won {
        /// The winning sign.
        winner: PlayerSign,
        /// The completed line.
        line: WinPattern,
    },
    /// The click filled the board with no line (draw detection only).
    Drawn,
    /// Nothing happened.
    Ignored(IgnoreReason),
}

impl ClickOutcome {
    /// Whether the click changed the session.
    pub fn changed_state(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored(_))
    }
}
