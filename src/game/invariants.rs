//! Properties every session must satisfy between clicks.
//!
//! Checked with `debug_assert!` after each state change and testable on their own.

use super::session::GameSession;
use super::sign::PlayerSign;
use super::grid::Position;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// No cell is claimed by both players.
pub struct DisjointClaims;

impl Invariant<GameSession> for DisjointClaims {
    fn holds(session: &GameSession) -> bool {
        let cross = session.player(PlayerSign::Cross);
        let zero = session.player(PlayerSign::Zero);
        Position::ALL
            .into_iter()
            .all(|pos| !(cross.has(pos) && zero.has(pos)))
    }

    fn description() -> &'static str {
        "No cell is claimed by both players"
    }
}

/// Claim counts follow strict alternation from the round's opener.
pub struct BalancedTurns;

impl Invariant<GameSession> for BalancedTurns {
    fn holds(session: &GameSession) -> bool {
        let opener = session.player(session.first_mover()).claimed_count();
        let second = session
            .player(session.first_mover().opponent())
            .claimed_count();
        opener == second || opener == second + 1
    }

    fn description() -> &'static str {
        "Opener has the same number of claims as the second player, or one more"
    }
}

/// Asserts all session invariants in debug builds.
pub fn assert_invariants(session: &GameSession) {
    debug_assert!(DisjointClaims::holds(session), "{}", DisjointClaims::description());
    debug_assert!(BalancedTurns::holds(session), "{}", BalancedTurns::description());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rules;

    #[test]
    fn test_fresh_session_holds() {
        let session = GameSession::new(Rules::default());
        assert!(DisjointClaims::holds(&session));
        assert!(BalancedTurns::holds(&session));
    }

    #[test]
    fn test_played_session_holds() {
        let mut session = GameSession::new(Rules::default());
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            session.click(pos);
            assert!(DisjointClaims::holds(&session));
            assert!(BalancedTurns::holds(&session));
        }
    }

    #[test]
    fn test_double_claim_violates() {
        let mut session = GameSession::new(Rules::default());
        session.click(Position::Center);
        session.player_mut(PlayerSign::Zero).mark(Position::Center);
        assert!(!DisjointClaims::holds(&session));
    }

    #[test]
    fn test_skipped_turn_violates() {
        let mut session = GameSession::new(Rules::default());
        session.player_mut(PlayerSign::Zero).mark(Position::Center);
        assert!(!BalancedTurns::holds(&session));
    }
}
