//! Game rules for nested tic-tac-toe.
//!
//! Win and draw detection are pure functions over a grid's nine child
//! owners. The victory evaluator and the forced-move resolver build on them
//! as methods of [`Node`](crate::Node).

pub mod draw;
pub mod forced;
pub mod victory;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, line_owner};
