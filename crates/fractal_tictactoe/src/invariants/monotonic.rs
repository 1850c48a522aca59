//! Monotonic ownership: a resolved node never changes.

use super::super::{GameState, Node};

/// Two-state invariant comparing a game before and after a transition.
///
/// Every node resolved before must hold the same owner after.
pub struct MonotonicOwnership;

impl MonotonicOwnership {
    /// Checks the invariant across one transition.
    pub fn holds_between(before: &GameState, after: &GameState) -> bool {
        unchanged(before.root(), after.root())
    }

    /// Human-readable description of the invariant.
    pub fn description() -> &'static str {
        "Resolved cells and sub-boards never change owner"
    }
}

fn unchanged(before: &Node, after: &Node) -> bool {
    if before.owner().is_resolved() && before.owner() != after.owner() {
        return false;
    }
    match (before.children(), after.children()) {
        (Some(b), Some(a)) => b.iter().zip(a.iter()).all(|(b, a)| unchanged(b, a)),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Owner, Player};

    #[test]
    fn test_commit_is_monotonic() {
        let before = GameState::new(2).unwrap();
        let mut after = before.clone();
        after
            .add_move(&Coordinate::from_indices(&[0, 0]).unwrap(), Player::One)
            .unwrap();
        after.victor();
        assert!(MonotonicOwnership::holds_between(&before, &after));
    }

    #[test]
    fn test_changed_owner_detected() {
        let mut before = Node::new(1);
        before.settle(Owner::PlayerOne);
        let after = Node::new(1);
        assert!(!unchanged(&before, &after));
    }
}
