//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`. The preconditions here give the
//! reason a move is refused; [`GameState::legal`] answers the same question
//! as a plain boolean.

use super::action::{Move, MoveError};
use super::invariants::{BoardInvariants, InvariantSet, MonotonicOwnership};
use super::{Coordinate, GameState, Owner};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the overall game is undecided.
pub struct GameNotOver;

impl GameNotOver {
    #[instrument(skip(game))]
    pub fn check(_mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.root().owner().is_resolved() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the coordinate addresses a single cell.
pub struct AddressesCell;

impl AddressesCell {
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        let got = mov.coordinate.len();
        if got != game.depth() {
            return Err(MoveError::WrongLength {
                expected: game.depth(),
                got,
            });
        }
        Ok(())
    }
}

/// Precondition: the cell and every sub-board containing it are unresolved.
pub struct PathIsOpen;

impl PathIsOpen {
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.root().legal(mov.coordinate.as_slice()) {
            return Ok(());
        }

        // Report the outermost resolved node on the path.
        let path = mov.coordinate.as_slice();
        let closed = (1..=path.len())
            .map(|n| Coordinate::from(&path[..n]))
            .find(|prefix| {
                game.grid_owner(prefix)
                    .map(Owner::is_resolved)
                    .unwrap_or(true)
            })
            .unwrap_or_else(|| mov.coordinate.clone());
        Err(MoveError::Closed(closed))
    }
}

/// Precondition: the player did not make the previous move.
///
/// Only enforced once the forced sub-board rule is in effect.
pub struct PlayersTurn;

impl PlayersTurn {
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.forced_prefix().is_some() && Owner::from(mov.player) == game.last_player() {
            Err(MoveError::SamePlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move lies inside the sub-board the previous move selected.
pub struct InsideForcedGrid;

impl InsideForcedGrid {
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        match game.forced_prefix() {
            Some(required) if !mov.coordinate.starts_with(&required) => {
                Err(MoveError::OutsideForcedGrid {
                    required: required.into(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Composite precondition: every check a legal move passes.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(mov, game)?;
        AddressesCell::check(mov, game)?;
        PathIsOpen::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        InsideForcedGrid::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Coordinate addresses a cell
/// - Path to the cell is open
/// - Player did not just move (under the forced rule)
/// - Move is inside the forced sub-board
///
/// Postconditions:
/// - Board keeps its shape
/// - Last move is recorded
/// - Resolved grids are justified
/// - Ownership is monotonic
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mut descriptions = match BoardInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };
        if !MonotonicOwnership::holds_between(before, after) {
            descriptions.push(MonotonicOwnership::description().to_string());
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            warn!(?descriptions, "Move postcondition failed");
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}
