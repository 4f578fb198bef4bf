//! Signs a cell can display and the two signs a player can own.

use serde::{Deserialize, Serialize};

/// One of the two playable signs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum PlayerSign {
    /// Cross, shown as `X`.
    #[display("X")]
    #[strum(serialize = "cross", serialize = "x")]
    Cross,
    /// Zero, shown as `O`.
    #[display("O")]
    #[strum(serialize = "zero", serialize = "o")]
    Zero,
}

impl PlayerSign {
    /// Returns the other sign.
    pub fn opponent(self) -> Self {
        match self {
            PlayerSign::Cross => PlayerSign::Zero,
            PlayerSign::Zero => PlayerSign::Cross,
        }
    }
}

/// What a board cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sign {
    /// Claimed by Cross.
    Cross,
    /// Claimed by Zero.
    Zero,
    /// Unclaimed.
    #[default]
    Empty,
}

impl Sign {
    /// Single-character label used by the views.
    pub fn label(self) -> &'static str {
        match self {
            Sign::Cross => "X",
            Sign::Zero => "O",
            Sign::Empty => " ",
        }
    }

    /// The owning player sign, if any.
    pub fn player(self) -> Option<PlayerSign> {
        match self {
            Sign::Cross => Some(PlayerSign::Cross),
            Sign::Zero => Some(PlayerSign::Zero),
            Sign::Empty => None,
        }
    }
}

impl From<PlayerSign> for Sign {
    fn from(sign: PlayerSign) -> Self {
        match sign {
            PlayerSign::Cross => Sign::Cross,
            PlayerSign::Zero => Sign::Zero,
        }
    }
}
