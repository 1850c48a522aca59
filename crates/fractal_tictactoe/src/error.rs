//! Engine error types.
//!
//! These report caller precondition violations. An illegal but well-formed
//! move is never an error: [`GameState::legal`](crate::GameState::legal)
//! answers `false` for it.

use derive_more::{Display, Error};

/// Precondition violation detected by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A board must have at least one level.
    #[display("Depth must be at least 1")]
    ZeroDepth,

    /// A coordinate digit was outside 0-8.
    #[display("Coordinate digit {} is out of range (must be 0-8)", index)]
    OutOfRange {
        /// The offending digit.
        index: usize,
    },

    /// A single cell was addressed with digits left over.
    #[display("Coordinate continues {} level(s) past a cell", remaining)]
    CellGivenSuffix {
        /// Number of unconsumed digits.
        remaining: usize,
    },

    /// A move path ended on a grid instead of a cell.
    #[display("Coordinate ends on a grid, not a cell")]
    GridGivenEmptySuffix,

    /// Coordinate text could not be parsed.
    #[display("Invalid coordinate: {}", _0)]
    InvalidCoordinate(#[error(not(source))] String),
}
