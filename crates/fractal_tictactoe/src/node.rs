//! The recursive board tree.

use super::{EngineError, Owner, Position};
use tracing::{trace, warn};

/// One element of the board tree: a single cell or a 3x3 grid of nodes.
///
/// A grid at level 1 holds cells; a grid at level `n > 1` holds grids of
/// level `n - 1`. The shape is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A terminal cell.
    Cell {
        /// Claim state of the cell.
        owner: Owner,
    },
    /// A 3x3 grid of child nodes.
    Grid {
        /// Cached outcome of this grid.
        owner: Owner,
        /// Children in row-major order.
        children: Box<[Node; 9]>,
    },
}

impl Node {
    /// Builds a grid with `level` nested levels, every node unclaimed.
    ///
    /// A level of 0 yields a single cell.
    pub fn new(level: usize) -> Self {
        if level == 0 {
            return Node::Cell { owner: Owner::None };
        }
        Node::Grid {
            owner: Owner::None,
            children: Box::new(std::array::from_fn(|_| Node::new(level - 1))),
        }
    }

    /// Current cached owner. Reading never evaluates.
    pub fn owner(&self) -> Owner {
        match self {
            Node::Cell { owner } | Node::Grid { owner, .. } => *owner,
        }
    }

    /// Children of a grid, `None` for a cell.
    pub fn children(&self) -> Option<&[Node; 9]> {
        match self {
            Node::Cell { .. } => None,
            Node::Grid { children, .. } => Some(&**children),
        }
    }

    /// The child at `pos`, `None` for a cell.
    pub fn child(&self, pos: Position) -> Option<&Node> {
        self.children().map(|children| &children[pos.to_index()])
    }

    /// Records a claim permanently.
    ///
    /// A resolved node keeps its owner; an attempt to overwrite it is logged
    /// and ignored.
    pub(crate) fn settle(&mut self, value: Owner) {
        let owner = match self {
            Node::Cell { owner } | Node::Grid { owner, .. } => owner,
        };
        if owner.is_resolved() {
            if *owner != value {
                warn!(current = ?owner, rejected = ?value, "Refusing to overwrite resolved node");
            }
            return;
        }
        *owner = value;
    }

    /// Commits `player` into the cell reached by consuming `suffix`.
    ///
    /// No legality check is made here. The suffix must end exactly on a
    /// cell: digits past a cell, or a path that stops on a grid, are
    /// precondition violations.
    pub fn add_move(&mut self, suffix: &[Position], player: Owner) -> Result<(), EngineError> {
        match self {
            Node::Cell { .. } => {
                if !suffix.is_empty() {
                    return Err(EngineError::CellGivenSuffix {
                        remaining: suffix.len(),
                    });
                }
                trace!(?player, "Claiming cell");
                self.settle(player);
                Ok(())
            }
            Node::Grid { children, .. } => {
                let (first, rest) = suffix
                    .split_first()
                    .ok_or(EngineError::GridGivenEmptySuffix)?;
                children[first.to_index()].add_move(rest, player)
            }
        }
    }

    /// Returns true if the node at `suffix` and every grid above it are
    /// unresolved.
    ///
    /// A cell ignores any remaining digits.
    pub fn legal(&self, suffix: &[Position]) -> bool {
        match self {
            Node::Cell { owner } => !owner.is_resolved(),
            Node::Grid { owner, children } => {
                if owner.is_resolved() {
                    return false;
                }
                match suffix.split_first() {
                    None => true,
                    Some((first, rest)) => children[first.to_index()].legal(rest),
                }
            }
        }
    }

    /// Owner of the node at `coordinate`; the empty coordinate reads this
    /// node.
    pub fn owner_at(&self, coordinate: &[Position]) -> Result<Owner, EngineError> {
        match (self, coordinate.split_first()) {
            (_, None) => Ok(self.owner()),
            (Node::Cell { .. }, Some(_)) => Err(EngineError::CellGivenSuffix {
                remaining: coordinate.len(),
            }),
            (Node::Grid { children, .. }, Some((first, rest))) => {
                children[first.to_index()].owner_at(rest)
            }
        }
    }

    /// The node at `coordinate`, if the path stays inside the tree.
    pub fn node_at(&self, coordinate: &[Position]) -> Option<&Node> {
        match coordinate.split_first() {
            None => Some(self),
            Some((first, rest)) => self.child(*first)?.node_at(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(indices: &[usize]) -> Vec<Position> {
        indices
            .iter()
            .map(|&i| Position::from_index(i).unwrap())
            .collect()
    }

    #[test]
    fn test_new_builds_full_tree() {
        let node = Node::new(3);
        assert!(node.children().unwrap().iter().all(|c| c.children().is_some()));
        assert!(matches!(node.node_at(&coord(&[8, 8])), Some(Node::Grid { .. })));
        assert!(matches!(
            node.node_at(&coord(&[8, 8, 8])),
            Some(Node::Cell { .. })
        ));
    }

    #[test]
    fn test_add_move_claims_cell() {
        let mut node = Node::new(2);
        node.add_move(&coord(&[4, 0]), Owner::PlayerOne).unwrap();
        assert_eq!(node.owner_at(&coord(&[4, 0])), Ok(Owner::PlayerOne));
        assert_eq!(node.owner_at(&coord(&[4])), Ok(Owner::None));
        assert_eq!(node.owner(), Owner::None);
    }

    #[test]
    fn test_add_move_length_mismatch() {
        let mut node = Node::new(2);
        assert_eq!(
            node.add_move(&coord(&[4]), Owner::PlayerOne),
            Err(EngineError::GridGivenEmptySuffix)
        );
        assert_eq!(
            node.add_move(&coord(&[4, 0, 1]), Owner::PlayerOne),
            Err(EngineError::CellGivenSuffix { remaining: 1 })
        );
    }

    #[test]
    fn test_settle_is_write_once() {
        let mut node = Node::new(1);
        node.add_move(&coord(&[3]), Owner::PlayerTwo).unwrap();
        node.add_move(&coord(&[3]), Owner::PlayerOne).unwrap();
        assert_eq!(node.owner_at(&coord(&[3])), Ok(Owner::PlayerTwo));
    }

    #[test]
    fn test_legal_requires_open_path() {
        let mut node = Node::new(2);
        assert!(node.legal(&coord(&[4, 0])));
        assert!(node.legal(&[]));

        node.add_move(&coord(&[4, 0]), Owner::PlayerOne).unwrap();
        assert!(!node.legal(&coord(&[4, 0])));
        assert!(node.legal(&coord(&[4, 1])));

        if let Node::Grid { children, .. } = &mut node {
            children[4].settle(Owner::PlayerTwo);
        }
        assert!(!node.legal(&coord(&[4, 1])));
        assert!(!node.legal(&coord(&[4])));
        assert!(node.legal(&coord(&[5, 1])));
    }

    #[test]
    fn test_owner_at_past_cell_is_error() {
        let node = Node::new(1);
        assert_eq!(
            node.owner_at(&coord(&[0, 0])),
            Err(EngineError::CellGivenSuffix { remaining: 1 })
        );
    }
}
