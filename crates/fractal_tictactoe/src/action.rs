//! First-class action types.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution.

use super::{Coordinate, EngineError, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player claiming the cell at a full-depth coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell being claimed, outermost digit first.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coordinate: Coordinate) -> Self {
        Self { player, coordinate }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coordinate)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveError {
    /// The overall game is already decided.
    #[display("Game is already over")]
    GameOver,

    /// The coordinate does not address a single cell.
    #[display("Coordinate has {} digit(s), expected {}", got, expected)]
    WrongLength {
        /// The game depth.
        expected: usize,
        /// Digits supplied.
        got: usize,
    },

    /// The cell, or a sub-board containing it, is already resolved.
    #[display("{} is already claimed", _0)]
    Closed(Coordinate),

    /// The same player tried to move twice in a row.
    #[display("{} just moved", _0)]
    SamePlayer(Player),

    /// The move is outside the sub-board the previous move selected.
    #[display("Move must be played inside {}", required)]
    OutsideForcedGrid {
        /// Prefix the move had to begin with.
        required: Coordinate,
    },

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// The engine rejected the commit.
    #[display("{}", _0)]
    #[from]
    Engine(EngineError),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Engine(err) => Some(err),
            _ => None,
        }
    }
}
