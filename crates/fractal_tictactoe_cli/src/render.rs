//! Text rendering of grids and status reports.

use fractal_tictactoe::{Coordinate, GameState, Node, Owner, Player, Position, next_player};
use serde::Serialize;

/// Formats one grid as three rows of its children's owners.
///
/// Open children show their digit so they can be typed back in.
pub fn render_grid(node: &Node) -> String {
    let Some(children) = node.children() else {
        return node.owner().symbol().to_string();
    };

    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = row * 3 + col;
            let symbol = match children[pos].owner() {
                Owner::None => char::from(b'0' + pos as u8),
                owner => owner.symbol(),
            };
            result.push(symbol);
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}

/// Snapshot of a game for the `status` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Number of nested levels.
    pub depth: usize,
    /// Player whose turn it is.
    pub to_move: Player,
    /// Most recent move, empty before the first.
    pub last_move: Coordinate,
    /// Player who made the most recent move.
    pub last_player: Owner,
    /// Overall outcome so far.
    pub victor: Owner,
    /// Prefix the next move must begin with, if constrained.
    pub forced: Option<Coordinate>,
    /// Number of cells the player to move may claim.
    pub legal_moves: usize,
}

impl StatusReport {
    /// Captures the current game. Outcomes should be evaluated beforehand.
    pub fn capture(game: &GameState) -> Self {
        let to_move = next_player(game.last_player());
        Self {
            depth: game.depth(),
            to_move,
            last_move: game.last_move().clone(),
            last_player: game.last_player(),
            victor: game.root().owner(),
            forced: game.forced_prefix().map(Coordinate::from),
            legal_moves: game.legal_moves(to_move).len(),
        }
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Depth: {}", self.depth)?;
        writeln!(f, "To move: {}", self.to_move)?;
        if self.last_move.is_empty() {
            writeln!(f, "Last move: none")?;
        } else {
            writeln!(f, "Last move: {} by {}", self.last_move, self.last_player)?;
        }
        writeln!(f, "Forced: {}", describe_forced(self.forced.as_ref()))?;
        writeln!(f, "Legal moves: {}", self.legal_moves)?;
        write!(f, "Victor: {}", self.victor)
    }
}

/// Human description of a forced-move constraint.
pub fn describe_forced(forced: Option<&Coordinate>) -> String {
    match forced {
        Some(prefix) if !prefix.is_empty() => format!("inside {}", prefix),
        _ => "anywhere".to_string(),
    }
}

/// Label for a sub-board in messages.
pub fn describe_grid(coordinate: &Coordinate) -> String {
    let labels = coordinate
        .as_slice()
        .iter()
        .map(Position::label)
        .collect::<Vec<_>>()
        .join(" / ");
    format!("Sub-board {} ({})", coordinate, labels)
}
