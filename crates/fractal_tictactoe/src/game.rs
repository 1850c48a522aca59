//! Game state coordinator.
//!
//! [`GameState`] owns the board tree and the record of the most recent move,
//! and is the whole public contract offered to a presentation layer.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::{Coordinate, EngineError, Node, Owner, Player, Position};
use tracing::{debug, instrument};

/// Depth used when none is chosen: ordinary "ultimate" tic-tac-toe.
pub const DEFAULT_DEPTH: usize = 2;

/// A nested tic-tac-toe game of fixed depth.
///
/// The full tree is built at construction and never changes shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    depth: usize,
    root: Node,
    last_move: Coordinate,
    last_player: Owner,
}

impl GameState {
    /// Creates a game with `depth` nested levels (1 is plain tic-tac-toe).
    #[instrument]
    pub fn new(depth: usize) -> Result<Self, EngineError> {
        if depth == 0 {
            return Err(EngineError::ZeroDepth);
        }
        debug!(depth, "Building board");
        Ok(Self {
            depth,
            root: Node::new(depth),
            last_move: Coordinate::root(),
            last_player: Owner::None,
        })
    }

    /// Number of nested levels.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The board tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[cfg(test)]
    pub(crate) fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// The most recently committed move, empty before the first.
    pub fn last_move(&self) -> &Coordinate {
        &self.last_move
    }

    /// The player who made the most recent move, [`Owner::None`] before the
    /// first.
    pub fn last_player(&self) -> Owner {
        self.last_player
    }

    /// The prefix the next move must begin with, or `None` while no
    /// constraint applies.
    ///
    /// The constraint takes effect once the last move has more than one
    /// digit. An empty prefix means the targeted sub-board is resolved and
    /// the reply is free.
    pub fn forced_prefix(&self) -> Option<Vec<Position>> {
        (self.last_move.len() > 1).then(|| self.root.forced_prefix(self.last_move.trailing()))
    }

    /// Returns true if `player` may claim the cell at `coordinate`.
    ///
    /// The cell and every sub-board containing it must be unresolved. Once
    /// the forced rule applies, the player must not have made the previous
    /// move and the coordinate must begin with [`forced_prefix`]. A
    /// coordinate that does not address a cell is never legal.
    ///
    /// [`forced_prefix`]: GameState::forced_prefix
    #[instrument(skip(self))]
    pub fn legal(&self, coordinate: &Coordinate, player: Player) -> bool {
        if coordinate.len() != self.depth || !self.root.legal(coordinate.as_slice()) {
            return false;
        }
        if self.last_move.len() <= 1 {
            return true;
        }
        if Owner::from(player) == self.last_player {
            return false;
        }
        let target = self.root.forced_prefix(self.last_move.trailing());
        coordinate.starts_with(&target)
    }

    /// Commits a move without checking legality.
    ///
    /// The caller must have seen [`legal`](GameState::legal) return true for
    /// the same arguments. Outcomes are not recomputed until
    /// [`victor`](GameState::victor) is called.
    #[instrument(skip(self))]
    pub fn add_move(&mut self, coordinate: &Coordinate, player: Player) -> Result<(), EngineError> {
        self.root.add_move(coordinate.as_slice(), player.into())?;
        self.last_move = coordinate.clone();
        self.last_player = player.into();
        debug!(%coordinate, %player, "Move committed");
        Ok(())
    }

    /// Resolves every sub-board and returns the overall outcome.
    #[instrument(skip(self))]
    pub fn victor(&mut self) -> Owner {
        self.root.evaluate()
    }

    /// Owner of the node at `coordinate`; the empty coordinate reads the
    /// whole game.
    pub fn grid_owner(&self, coordinate: &Coordinate) -> Result<Owner, EngineError> {
        self.root.owner_at(coordinate.as_slice())
    }

    /// Every cell `player` could legally claim now, in coordinate order.
    #[instrument(skip(self))]
    pub fn legal_moves(&self, player: Player) -> Vec<Coordinate> {
        let mut open = Vec::new();
        collect_open(&self.root, Coordinate::root(), &mut open);
        open.retain(|coordinate| self.legal(coordinate, player));
        open
    }

    /// Validates, commits and evaluates a move, returning the overall
    /// outcome.
    ///
    /// Postconditions are verified in debug builds.
    #[instrument(skip(self))]
    pub fn play(&mut self, action: Move) -> Result<Owner, MoveError> {
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.add_move(&action.coordinate, action.player)?;
        let victor = self.victor();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(victor)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            root: Node::new(DEFAULT_DEPTH),
            last_move: Coordinate::root(),
            last_player: Owner::None,
        }
    }
}

/// Gathers unclaimed cells, skipping resolved sub-boards.
fn collect_open(node: &Node, at: Coordinate, out: &mut Vec<Coordinate>) {
    if node.owner().is_resolved() {
        return;
    }
    match node.children() {
        None => out.push(at),
        Some(children) => {
            for (pos, child) in Position::ALL.iter().zip(children.iter()) {
                collect_open(child, at.child(*pos), out);
            }
        }
    }
}
