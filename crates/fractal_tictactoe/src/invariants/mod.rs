//! First-class invariants for the nested board.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and are checked as move postconditions
//! in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod fixed_shape;
pub mod last_move;
pub mod monotonic;
pub mod resolved_justified;

pub use fixed_shape::FixedShapeInvariant;
pub use last_move::LastMoveRecordedInvariant;
pub use monotonic::MonotonicOwnership;
pub use resolved_justified::ResolvedJustifiedInvariant;

/// All single-state board invariants as a composable set.
pub type BoardInvariants = (
    FixedShapeInvariant,
    LastMoveRecordedInvariant,
    ResolvedJustifiedInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, GameState, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new(2).unwrap();
        assert!(BoardInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::new(2).unwrap();
        for (indices, player) in [([4, 0], Player::One), ([0, 8], Player::Two)] {
            let coord = Coordinate::from_indices(&indices).unwrap();
            game.add_move(&coord, player).unwrap();
        }
        game.victor();
        assert!(BoardInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::new(1).unwrap();
        type TwoInvariants = (FixedShapeInvariant, LastMoveRecordedInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
