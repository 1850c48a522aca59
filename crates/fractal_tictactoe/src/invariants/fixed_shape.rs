//! Fixed shape invariant: the tree is exactly `depth` levels of full grids.

use super::super::{GameState, Node};
use super::Invariant;

/// Invariant: every grid sits at a uniform level and the root spans the
/// configured depth.
pub struct FixedShapeInvariant;

fn uniform(node: &Node, level: usize) -> bool {
    match node {
        Node::Cell { .. } => level == 0,
        Node::Grid { children, .. } => {
            level > 0 && children.iter().all(|child| uniform(child, level - 1))
        }
    }
}

impl Invariant<GameState> for FixedShapeInvariant {
    fn holds(game: &GameState) -> bool {
        game.depth() > 0 && uniform(game.root(), game.depth())
    }

    fn description() -> &'static str {
        "Board is a full tree of depth levels"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_depths() {
        for depth in 1..=3 {
            let game = GameState::new(depth).unwrap();
            assert!(FixedShapeInvariant::holds(&game));
        }
    }

    #[test]
    fn test_ragged_tree_detected() {
        let mut node = Node::new(2);
        if let Node::Grid { children, .. } = &mut node {
            children[3] = Node::new(0);
        }
        assert!(!uniform(&node, 2));
    }
}
