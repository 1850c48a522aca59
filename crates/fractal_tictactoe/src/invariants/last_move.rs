//! Last move invariant: the move record agrees with the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: the last move and last player are recorded together.
///
/// Before any move both are empty. Afterwards the last move addresses a
/// cell owned by the last player.
pub struct LastMoveRecordedInvariant;

impl Invariant<GameState> for LastMoveRecordedInvariant {
    fn holds(game: &GameState) -> bool {
        let last_move = game.last_move();
        let last_player = game.last_player();

        if last_move.is_empty() {
            return !last_player.is_resolved();
        }

        last_move.len() == game.depth()
            && last_player.player().is_some()
            && game.grid_owner(last_move) == Ok(last_player)
    }

    fn description() -> &'static str {
        "Last move addresses a cell owned by the last player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Player};

    #[test]
    fn test_empty_game_holds() {
        let game = GameState::new(2).unwrap();
        assert!(LastMoveRecordedInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_commit() {
        let mut game = GameState::new(2).unwrap();
        let coord = Coordinate::from_indices(&[1, 7]).unwrap();
        game.add_move(&coord, Player::Two).unwrap();
        assert!(LastMoveRecordedInvariant::holds(&game));
    }
}
