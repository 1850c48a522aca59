//! Fractal tic-tac-toe - a rules engine for tic-tac-toe nested to any depth
//!
//! Depth 1 is the ordinary game. At depth 2 every cell of the outer grid is
//! itself a grid ("ultimate" tic-tac-toe), and so on. A sub-board is won by
//! three of its children in a line, and the digits of each move after the
//! first select the sub-board the reply must be played in.
//!
//! # Architecture
//!
//! - **Node**: the recursive board tree, built eagerly and never reshaped
//! - **Rules**: win/draw detection, bottom-up evaluation, forced sub-board resolution
//! - **GameState**: the coordinator presentation layers talk to
//! - **Contracts**: move preconditions with diagnostics, invariant postconditions
//!
//! # Example
//!
//! ```
//! use fractal_tictactoe::{Coordinate, GameState, Owner, Player};
//!
//! # fn example() -> Result<(), fractal_tictactoe::EngineError> {
//! let mut game = GameState::new(2)?;
//! let first: Coordinate = "4 0".parse()?;
//! assert!(game.legal(&first, Player::One));
//! game.add_move(&first, Player::One)?;
//!
//! // The reply is forced into sub-board 0.
//! assert!(!game.legal(&"5 5".parse()?, Player::Two));
//! assert!(game.legal(&"0 8".parse()?, Player::Two));
//! assert_eq!(game.victor(), Owner::None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coordinate;
mod error;
mod game;
mod node;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use coordinate::Coordinate;
pub use error::EngineError;
pub use game::{DEFAULT_DEPTH, GameState};
pub use node::Node;
pub use position::Position;
pub use types::{Owner, Player, next_player};
