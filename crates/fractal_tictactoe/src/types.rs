//! Core domain types: players and the claim state of a board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player one (moves first).
    #[display("Player 1")]
    One,
    /// Player two.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Claim state of a cell or sub-board.
///
/// Every node starts at [`Owner::None`]. Once it holds any other value it is
/// resolved and never changes again.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Owner {
    /// Unclaimed.
    #[default]
    #[display("Nobody")]
    None,
    /// Claimed by player one.
    #[display("Player 1")]
    PlayerOne,
    /// Claimed by player two.
    #[display("Player 2")]
    PlayerTwo,
    /// Completely filled without a winner.
    #[display("Nobody")]
    Draw,
}

impl Owner {
    /// Returns true once the node can no longer change.
    pub fn is_resolved(self) -> bool {
        self != Owner::None
    }

    /// Returns the player behind a claim, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Owner::PlayerOne => Some(Player::One),
            Owner::PlayerTwo => Some(Player::Two),
            Owner::None | Owner::Draw => None,
        }
    }

    /// Single-character glyph used by text renderers.
    pub fn symbol(self) -> char {
        match self {
            Owner::None => '.',
            Owner::PlayerOne => 'X',
            Owner::PlayerTwo => 'O',
            Owner::Draw => '=',
        }
    }
}

impl From<Player> for Owner {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Owner::PlayerOne,
            Player::Two => Owner::PlayerTwo,
        }
    }
}

/// Returns the player who moves after `last`.
///
/// Player one follows anything but player one, so an untouched game starts
/// with [`Player::One`].
#[instrument]
pub fn next_player(last: Owner) -> Player {
    last.player().map_or(Player::One, Player::opponent)
}
