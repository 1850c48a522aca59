//! Draw detection logic.

use super::super::Owner;

/// Checks if every owner in a grid is resolved.
///
/// A full grid with no completed line is a draw.
pub fn is_full(owners: &[Owner; 9]) -> bool {
    owners.iter().all(|o| o.is_resolved())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_not_full() {
        assert!(!is_full(&[Owner::None; 9]));
    }

    #[test]
    fn test_drawn_children_fill_a_grid() {
        let mut owners = [Owner::PlayerOne; 9];
        owners[4] = Owner::Draw;
        assert!(is_full(&owners));
        owners[8] = Owner::None;
        assert!(!is_full(&owners));
    }
}
