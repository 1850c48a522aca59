//! Forced sub-board resolution.
//!
//! The digits of a move after its first select the sub-board the reply must
//! be played in, one level at a time. The chain stops at the first
//! sub-board along it that is already resolved, leaving the reply free below
//! the last open one.

use super::super::{Node, Position};
use tracing::trace;

impl Node {
    /// Computes the prefix the next move must begin with.
    ///
    /// `trailing` is the previous move with its first digit removed. The
    /// result is the longest chain of still-open sub-boards it selects,
    /// outermost first; it is empty when the first targeted sub-board is
    /// already resolved.
    pub fn forced_prefix(&self, trailing: &[Position]) -> Vec<Position> {
        self.resolve_forced(trailing, None)
    }

    /// Walks `suffix` from this node. `current` is the digit that selected
    /// this node, `None` at the root, which contributes nothing itself.
    fn resolve_forced(&self, suffix: &[Position], current: Option<Position>) -> Vec<Position> {
        let Node::Grid { owner, children } = self else {
            return Vec::new();
        };
        if owner.is_resolved() {
            trace!(?current, "Forced chain ends at resolved grid");
            return Vec::new();
        }

        let Some((first, rest)) = suffix.split_first() else {
            return current.into_iter().collect();
        };

        let below = children[first.to_index()].resolve_forced(rest, Some(*first));
        current.into_iter().chain(below).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Owner;

    fn path(indices: &[usize]) -> Vec<Position> {
        indices
            .iter()
            .map(|&i| Position::from_index(i).unwrap())
            .collect()
    }

    #[test]
    fn test_targets_sub_board_named_by_trailing_digit() {
        let root = Node::new(2);
        assert_eq!(root.forced_prefix(&path(&[0])), path(&[0]));
    }

    #[test]
    fn test_resolved_target_frees_the_reply() {
        let mut root = Node::new(2);
        for i in [0, 1, 2] {
            root.add_move(&path(&[0, i]), Owner::PlayerOne).unwrap();
        }
        root.evaluate();
        assert!(root.forced_prefix(&path(&[0])).is_empty());
    }

    #[test]
    fn test_deep_chain() {
        // After [8, 6, 1] the reply must start with [6, 1].
        let root = Node::new(3);
        assert_eq!(root.forced_prefix(&path(&[6, 1])), path(&[6, 1]));
    }

    #[test]
    fn test_chain_stops_at_resolved_inner_grid() {
        let mut root = Node::new(3);
        for i in [0, 4, 8] {
            root.add_move(&path(&[6, 1, i]), Owner::PlayerTwo).unwrap();
        }
        root.evaluate();
        assert_eq!(root.owner_at(&path(&[6, 1])), Ok(Owner::PlayerTwo));
        assert_eq!(root.forced_prefix(&path(&[6, 1])), path(&[6]));
    }

    #[test]
    fn test_resolved_root_forces_nothing() {
        let mut root = Node::new(1);
        for i in [0, 1, 2] {
            root.add_move(&path(&[i]), Owner::PlayerOne).unwrap();
        }
        root.evaluate();
        assert!(root.forced_prefix(&[]).is_empty());
    }
}
