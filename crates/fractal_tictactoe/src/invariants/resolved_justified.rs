//! Resolved grids are justified by their children.

use super::super::rules::{LINES, is_full, line_owner};
use super::super::{GameState, Node, Owner};
use super::Invariant;

/// Invariant: a resolved grid owns a complete line of its children, or is a
/// draw over a full grid.
///
/// Children of a resolved grid are finalized in the same evaluation pass, so
/// the justifying line never disappears later.
pub struct ResolvedJustifiedInvariant;

fn justified(node: &Node) -> bool {
    let Node::Grid { owner, children } = node else {
        return true;
    };
    if !children.iter().all(justified) {
        return false;
    }

    let owners: [Owner; 9] = std::array::from_fn(|i| children[i].owner());
    let has_line = |target: Owner| {
        LINES
            .iter()
            .any(|line| line_owner(line.map(|pos| owners[pos.to_index()])) == Some(target))
    };

    match owner {
        Owner::None => true,
        Owner::Draw => has_line(Owner::Draw) || is_full(&owners),
        claimed => has_line(*claimed),
    }
}

impl Invariant<GameState> for ResolvedJustifiedInvariant {
    fn holds(game: &GameState) -> bool {
        justified(game.root())
    }

    fn description() -> &'static str {
        "Every resolved grid is backed by a line or a full board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tree_is_justified() {
        assert!(justified(&Node::new(2)));
    }

    #[test]
    fn test_unbacked_claim_detected() {
        let mut node = Node::new(1);
        node.settle(Owner::PlayerOne);
        assert!(!justified(&node));
    }
}
