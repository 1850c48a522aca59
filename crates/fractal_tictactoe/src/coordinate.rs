//! Root-to-node addresses into a nested board.

use super::{EngineError, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Address of a node: one [`Position`] per level, outermost first.
///
/// The empty coordinate addresses the root. A coordinate whose length equals
/// the game depth addresses a single cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate(Vec<Position>);

impl Coordinate {
    /// The root address.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a coordinate from raw digits, rejecting any outside 0-8.
    #[instrument]
    pub fn from_indices(indices: &[usize]) -> Result<Self, EngineError> {
        indices
            .iter()
            .map(|&index| Position::from_index(index).ok_or(EngineError::OutOfRange { index }))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Number of levels this coordinate descends.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the root address.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The positions, outermost first.
    pub fn as_slice(&self) -> &[Position] {
        &self.0
    }

    /// Raw digits, outermost first.
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|p| p.to_index()).collect()
    }

    /// The coordinate with its first element removed.
    ///
    /// This is the part of a previous move that selects where the next move
    /// must go.
    pub fn trailing(&self) -> &[Position] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// Address of the enclosing grid, or `None` at the root.
    pub fn parent(&self) -> Option<Coordinate> {
        self.0
            .split_last()
            .map(|(_, rest)| Coordinate(rest.to_vec()))
    }

    /// Address one level further down.
    pub fn child(&self, pos: Position) -> Coordinate {
        let mut next = self.0.clone();
        next.push(pos);
        Coordinate(next)
    }

    /// Returns true if this coordinate begins with `prefix`.
    pub fn starts_with(&self, prefix: &[Position]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl From<Vec<Position>> for Coordinate {
    fn from(positions: Vec<Position>) -> Self {
        Self(positions)
    }
}

impl From<&[Position]> for Coordinate {
    fn from(positions: &[Position]) -> Self {
        Self(positions.to_vec())
    }
}

impl AsRef<[Position]> for Coordinate {
    fn as_ref(&self) -> &[Position] {
        &self.0
    }
}

impl FromStr for Coordinate {
    type Err = EngineError;

    /// Parses `"4 0"`, `"4,0"`, `"40"` or `"center top-left"`.
    ///
    /// Separated input may mix digits and position labels, and any digit
    /// value so that out-of-range digits are reported as such; unseparated
    /// input is read one digit at a time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let separated = s.contains(|c: char| c == ',' || c.is_whitespace());

        let indices = if separated {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .map(|part| match part.parse::<usize>() {
                    Ok(index) => Ok(index),
                    Err(_) => Position::from_label_or_number(part)
                        .map(Position::to_index)
                        .ok_or_else(|| EngineError::InvalidCoordinate(s.to_string())),
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            s.chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as usize)
                        .ok_or_else(|| EngineError::InvalidCoordinate(s.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Self::from_indices(&indices)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(root)");
        }
        let digits = self
            .0
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_indices_rejects_out_of_range() {
        assert_eq!(
            Coordinate::from_indices(&[4, 9]),
            Err(EngineError::OutOfRange { index: 9 })
        );
        let coord = Coordinate::from_indices(&[4, 0]).unwrap();
        assert_eq!(coord.as_slice(), &[Position::Center, Position::TopLeft]);
    }

    #[test]
    fn test_parse_formats() {
        let expected = Coordinate::from_indices(&[8, 6, 1]).unwrap();
        assert_eq!("8 6 1".parse::<Coordinate>().unwrap(), expected);
        assert_eq!("8,6,1".parse::<Coordinate>().unwrap(), expected);
        assert_eq!("861".parse::<Coordinate>().unwrap(), expected);
        assert_eq!(
            "8 12".parse::<Coordinate>(),
            Err(EngineError::OutOfRange { index: 12 })
        );
        assert!(matches!(
            "8x".parse::<Coordinate>(),
            Err(EngineError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_parse_position_labels() {
        assert_eq!(
            "center Top-left".parse::<Coordinate>().unwrap(),
            Coordinate::from_indices(&[4, 0]).unwrap()
        );
        assert_eq!(
            "bottom-right,3".parse::<Coordinate>().unwrap(),
            Coordinate::from_indices(&[8, 3]).unwrap()
        );
        assert!(matches!(
            "center middle".parse::<Coordinate>(),
            Err(EngineError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_trailing_and_parent() {
        let coord = Coordinate::from_indices(&[8, 6, 1]).unwrap();
        assert_eq!(coord.trailing(), &[Position::BottomLeft, Position::TopCenter]);
        assert_eq!(
            coord.parent(),
            Some(Coordinate::from_indices(&[8, 6]).unwrap())
        );
        assert_eq!(Coordinate::root().parent(), None);
        assert!(Coordinate::root().trailing().is_empty());
    }

    #[test]
    fn test_display() {
        let coord = Coordinate::from_indices(&[4, 0]).unwrap();
        assert_eq!(coord.to_string(), "4 0");
        assert_eq!(coord.child(Position::Center).to_string(), "4 0 4");
    }
}
