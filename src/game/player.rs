//! Per-side claim tracking.

use super::grid::{Grid, Position};
use super::sign::PlayerSign;
use tracing::{instrument, trace};

/// Cells claimed by one side. `true` means claimed.
pub type PlayerGrid = Grid<bool>;

/// Owns one side's grid of claimed cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    sign: PlayerSign,
    claimed: PlayerGrid,
}

impl PlayerState {
    /// Creates a holder with nothing claimed.
    #[instrument]
    pub fn new(sign: PlayerSign) -> Self {
        Self {
            sign,
            claimed: Grid::generate(|| false),
        }
    }

    /// The sign this holder plays.
    pub fn sign(&self) -> PlayerSign {
        self.sign
    }

    /// The claimed-cell grid.
    pub fn claimed(&self) -> &PlayerGrid {
        &self.claimed
    }

    /// Whether `pos` is claimed by this side.
    pub fn has(&self, pos: Position) -> bool {
        self.claimed[pos]
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.claimed.iter().filter(|(_, claimed)| **claimed).count()
    }

    /// Claims `pos`. Claiming an already-claimed cell leaves it claimed.
    #[instrument(skip(self), fields(sign = %self.sign))]
    pub fn mark(&mut self, pos: Position) {
        trace!("Marking cell");
        self.claimed[pos] = true;
    }

    /// Replaces the grid with an all-unclaimed one.
    #[instrument(skip(self), fields(sign = %self.sign))]
    pub fn reset(&mut self) {
        self.claimed = Grid::generate(|| false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_claims_only_target() {
        let mut player = PlayerState::new(PlayerSign::Cross);
        player.mark(Position::Center);
        assert!(player.has(Position::Center));
        assert_eq!(player.claimed_count(), 1);
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut player = PlayerState::new(PlayerSign::Zero);
        player.mark(Position::TopLeft);
        let once = player.clone();
        player.mark(Position::TopLeft);
        assert_eq!(player, once);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut player = PlayerState::new(PlayerSign::Cross);
        for pos in Position::ALL {
            player.mark(pos);
        }
        player.reset();
        assert_eq!(player.claimed_count(), 0);
        assert_eq!(player.sign(), PlayerSign::Cross);
    }
}
