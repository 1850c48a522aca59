//! Win detection over the nine owners of a grid.

use super::super::{Owner, Position};

/// Winning lines, in the order they are checked.
///
/// The first line found complete decides a grid, so the order matters when
/// an evaluation finds more than one.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the shared owner of a line, or `None` if the three differ or are
/// unclaimed.
///
/// A line of three drawn sub-boards counts as complete and yields
/// [`Owner::Draw`].
pub fn line_owner(owners: [Owner; 3]) -> Option<Owner> {
    let [a, b, c] = owners;
    (a.is_resolved() && a == b && b == c).then_some(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_owner_requires_three_equal() {
        assert_eq!(
            line_owner([Owner::PlayerOne, Owner::PlayerOne, Owner::PlayerOne]),
            Some(Owner::PlayerOne)
        );
        assert_eq!(
            line_owner([Owner::PlayerOne, Owner::PlayerTwo, Owner::PlayerOne]),
            None
        );
        assert_eq!(line_owner([Owner::None, Owner::None, Owner::None]), None);
    }

    #[test]
    fn test_three_draws_make_a_line() {
        assert_eq!(
            line_owner([Owner::Draw, Owner::Draw, Owner::Draw]),
            Some(Owner::Draw)
        );
    }

    #[test]
    fn test_lines_cover_every_position() {
        for pos in Position::ALL {
            assert!(LINES.iter().any(|line| line.contains(&pos)));
        }
        assert_eq!(LINES[6], [Position::TopLeft, Position::Center, Position::BottomRight]);
    }
}
