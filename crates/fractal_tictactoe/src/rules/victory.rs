//! Bottom-up outcome evaluation.

use super::super::{Node, Owner};
use super::{LINES, is_full, line_owner};
use tracing::debug;

impl Node {
    /// Resolves this node's outcome from its children and caches it.
    ///
    /// A resolved node answers from its cache. Otherwise the winning lines
    /// are checked in [`LINES`] order and the first complete one decides the
    /// grid; failing that, a grid whose children are all resolved is a draw.
    /// Every child is evaluated afterwards whatever the outcome, so a single
    /// call at the root finalizes every nested sub-board.
    pub fn evaluate(&mut self) -> Owner {
        let Node::Grid { owner, children } = self else {
            return self.owner();
        };
        if owner.is_resolved() {
            return *owner;
        }

        let decided = LINES.iter().find_map(|line| {
            let owners = line.map(|pos| children[pos.to_index()].evaluate());
            line_owner(owners)
        });

        let outcome = match decided {
            Some(winner) => Some(winner),
            None => {
                let owners: [Owner; 9] = std::array::from_fn(|i| children[i].owner());
                is_full(&owners).then_some(Owner::Draw)
            }
        };

        for child in children.iter_mut() {
            child.evaluate();
        }

        if let Some(value) = outcome {
            debug!(?value, "Grid resolved");
            self.settle(value);
        }
        self.owner()
    }
}
