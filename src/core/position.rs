//! Typed views over record text.
//!
//! Coordinates are read from fixed character offsets (0, 2 and 4), so only
//! single-digit values are represented. A character that is missing or is not
//! a decimal digit reads as -1.

use serde::Serialize;

/// Width and height of the survey grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

/// Starting coordinates and orientation of one ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipStartPosition {
    pub x: i32,
    pub y: i32,
    pub orientation: char,
}

impl ShipStartPosition {
    /// Stands in for the whole ship list when no valid ship start exists
    pub const SENTINEL: Self = Self {
        x: 0,
        y: 0,
        orientation: UNKNOWN_ORIENTATION,
    };

    /// Read "x y o" from offsets 0, 2 and 4
    pub fn from_record(text: &str) -> Self {
        Self {
            x: digit_at(text, 0),
            y: digit_at(text, 2),
            orientation: text.chars().nth(4).unwrap_or(UNKNOWN_ORIENTATION),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

impl From<ShipStartPosition> for (i32, i32, char) {
    fn from(pos: ShipStartPosition) -> Self {
        (pos.x, pos.y, pos.orientation)
    }
}

const UNKNOWN_ORIENTATION: char = 'U';

/// Outcome for a single ship once its records are paired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShipStatus {
    Ready,
    Failed,
}

/// A ship start record paired with the instruction record after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipPlan {
    /// Line of the ship start record
    pub line: usize,
    /// Parsed position; `None` when the start record is malformed
    pub start: Option<ShipStartPosition>,
    /// Instruction text; `None` when there is no valid instruction record
    pub instructions: Option<String>,
    pub status: ShipStatus,
}

/// Numeric value of the decimal digit at a character offset, or -1
pub(crate) fn digit_at(text: &str, offset: usize) -> i32 {
    text.chars()
        .nth(offset)
        .and_then(|ch| ch.to_digit(10))
        .map_or(-1, |digit| digit as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record() {
        let pos = ShipStartPosition::from_record("1 2 N");
        assert_eq!(pos.x, 1);
        assert_eq!(pos.y, 2);
        assert_eq!(pos.orientation, 'N');
        assert!(!pos.is_sentinel());
    }

    #[test]
    fn test_from_record_keeps_orientation_case() {
        let pos = ShipStartPosition::from_record("3 3 e");
        assert_eq!(<(i32, i32, char)>::from(pos), (3, 3, 'e'));
    }

    #[test]
    fn test_multi_digit_values_are_not_tokenized() {
        // Offsets 2 and 4 of "12 3 N" are both spaces
        let pos = ShipStartPosition::from_record("12 3 N");
        assert_eq!(pos.x, 1);
        assert_eq!(pos.y, -1);
        assert_eq!(pos.orientation, ' ');
    }

    #[test]
    fn test_short_record() {
        let pos = ShipStartPosition::from_record("1N");
        assert_eq!(pos.x, 1);
        assert_eq!(pos.y, -1);
        assert_eq!(pos.orientation, 'U');
    }

    #[test]
    fn test_sentinel() {
        assert!(ShipStartPosition::SENTINEL.is_sentinel());
        assert_eq!(
            <(i32, i32, char)>::from(ShipStartPosition::SENTINEL),
            (0, 0, 'U')
        );
    }
}
