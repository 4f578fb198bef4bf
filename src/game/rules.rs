//! Round rules chosen at startup.

use super::sign::PlayerSign;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rules a [`GameSession`](super::GameSession) plays by.
///
/// Defaults: Cross opens the first round, the opener alternates between rounds,
/// and a full board without a line leaves the round open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Who moves first in the first round.
    pub first_sign: PlayerSign,
    /// Flip the opener on every reset.
    pub alternate_first_mover: bool,
    /// End the round as a draw once all nine cells are claimed with no line.
    pub detect_draw: bool,
}

impl Rules {
    /// Creates the default rules.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            first_sign: PlayerSign::Cross,
            alternate_first_mover: true,
            detect_draw: false,
        }
    }
}
