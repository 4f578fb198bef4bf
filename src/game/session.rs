//! Turn and win coordination for one game session.

use super::action::{ClickOutcome, IgnoreReason, Move};
use super::board::{Board, derive_board, is_full};
use super::grid::Position;
use super::invariants::assert_invariants;
use super::patterns::WinPattern;
use super::player::PlayerState;
use super::rules::Rules;
use super::sign::PlayerSign;
use tracing::{debug, info, instrument};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Cells can be claimed.
    Playing,
    /// A line was completed.
    Won {
        /// Sign that completed the line.
        winner: PlayerSign,
        /// The completed line.
        line: WinPattern,
    },
    /// Board is full with no line. Only reachable with [`Rules::detect_draw`].
    Drawn,
}

/// A game session spanning any number of rounds.
///
/// Owns both player grids, whose turn it is and the round status. The opener
/// of the next round survives [`reset`](Self::reset) and flips on each reset
/// when [`Rules::alternate_first_mover`] is set.
#[derive(Debug, Clone)]
pub struct GameSession {
    cross: PlayerState,
    zero: PlayerState,
    rules: Rules,
    first_mover: PlayerSign,
    current: PlayerSign,
    status: GameStatus,
    history: Vec<Move>,
    round: u32,
}

impl GameSession {
    /// Starts the first round.
    #[instrument]
    pub fn new(rules: Rules) -> Self {
        info!(first = %rules.first_sign, "Starting game session");
        Self {
            cross: PlayerState::new(PlayerSign::Cross),
            zero: PlayerState::new(PlayerSign::Zero),
            rules,
            first_mover: rules.first_sign,
            current: rules.first_sign,
            status: GameStatus::Playing,
            history: Vec::new(),
            round: 1,
        }
    }

    /// The rules in force.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// State holder for `sign`.
    pub fn player(&self, sign: PlayerSign) -> &PlayerState {
        match sign {
            PlayerSign::Cross => &self.cross,
            PlayerSign::Zero => &self.zero,
        }
    }

    pub(crate) fn player_mut(&mut self, sign: PlayerSign) -> &mut PlayerState {
        match sign {
            PlayerSign::Cross => &mut self.cross,
            PlayerSign::Zero => &mut self.zero,
        }
    }

    /// Whose turn it is.
    pub fn current_sign(&self) -> PlayerSign {
        self.current
    }

    /// Who opened the current round.
    pub fn first_mover(&self) -> PlayerSign {
        self.first_mover
    }

    /// Round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winner, if a line has been completed.
    pub fn winner(&self) -> Option<PlayerSign> {
        match self.status {
            GameStatus::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<WinPattern> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Whether clicks on the board are disabled.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Marks applied this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// 1-based round counter.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Derives the board from both player grids.
    pub fn board(&self) -> Board {
        derive_board(self.cross.claimed(), self.zero.claimed())
    }

    /// Claims `pos` for the current sign and passes the turn.
    ///
    /// Clicks on a claimed cell, or after the round has ended, change nothing.
    #[instrument(skip(self), fields(sign = %self.current, round = self.round))]
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if self.is_over() {
            debug!("Click ignored, round is over");
            return ClickOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !self.board()[pos].clickable {
            debug!("Click ignored, cell is claimed");
            return ClickOutcome::Ignored(IgnoreReason::Occupied(pos));
        }

        let sign = self.current;
        self.player_mut(sign).mark(pos);
        let mov = Move::new(sign, pos);
        self.history.push(mov);
        self.current = sign.opponent();
        info!(%mov, "Cell claimed");

        self.update_status();
        assert_invariants(self);

        match self.status {
            GameStatus::Playing => ClickOutcome::Marked(mov),
            GameStatus::Won { winner, line } => ClickOutcome::Won { winner, line },
            GameStatus::Drawn => ClickOutcome::Drawn,
        }
    }

    /// Clears both grids and starts the next round.
    ///
    /// Accepted in any state.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn reset(&mut self) {
        self.cross.reset();
        self.zero.reset();
        self.history.clear();
        if self.rules.alternate_first_mover {
            self.first_mover = self.first_mover.opponent();
        }
        self.current = self.first_mover;
        self.status = GameStatus::Playing;
        self.round += 1;
        info!(first = %self.first_mover, round = self.round, "Round reset");
    }

    fn update_status(&mut self) {
        for player in [&self.cross, &self.zero] {
            if let Some(line) = WinPattern::first_match(player.claimed()) {
                info!(winner = %player.sign(), %line, "Line completed");
                self.status = GameStatus::Won {
                    winner: player.sign(),
                    line,
                };
                return;
            }
        }

        if self.rules.detect_draw && is_full(&self.board()) {
            info!("Board full with no line, round drawn");
            self.status = GameStatus::Drawn;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Position::*;

    #[test]
    fn test_click_passes_turn() {
        let mut session = GameSession::default();
        assert_eq!(session.current_sign(), PlayerSign::Cross);

        let outcome = session.click(Center);
        assert_eq!(outcome, ClickOutcome::Marked(Move::new(PlayerSign::Cross, Center)));
        assert_eq!(session.current_sign(), PlayerSign::Zero);
    }

    #[test]
    fn test_click_on_claimed_cell_is_ignored() {
        let mut session = GameSession::default();
        session.click(Center);
        let before = session.clone();

        assert_eq!(session.click(Center), ClickOutcome::Ignored(IgnoreReason::Occupied(Center)));
        assert_eq!(session.current_sign(), before.current_sign());
        assert_eq!(session.history(), before.history());
    }

    #[test]
    fn test_clicks_ignored_after_win() {
        let mut session = GameSession::default();
        for pos in [TopLeft, MiddleLeft, TopCenter, Center, TopRight] {
            session.click(pos);
        }
        assert!(session.is_over());
        assert_eq!(session.click(BottomLeft), ClickOutcome::Ignored(IgnoreReason::GameOver));
        assert_eq!(session.history().len(), 5);
    }

    #[test]
    fn test_round_counter_advances_on_reset() {
        let mut session = GameSession::default();
        session.reset();
        session.reset();
        assert_eq!(session.round(), 3);
    }
}
