//! Coordinate input.
//!
//! A card is chosen with two lines: its row, then its column. The selector is
//! a small state machine:
//!
//! ```text
//! AwaitRow --row ok--> AwaitColumn --column ok--> (Position, back to AwaitRow)
//!    ^  |                  |
//!    +--+ bad row          +--> stays in AwaitColumn on a bad column
//! ```
//!
//! Board-state checks (already revealed, same card) happen after the
//! position is complete, in `rules`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Position, BOARD_SIDE};

/// A line that is not a usable coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("invalid input, please enter a whole number")]
    Type,

    #[error("{0} is out of range (numbers 0-5)")]
    Range(i64),
}

/// Parse one coordinate line.
///
/// ```
/// use memorama::input::{parse_coordinate, CoordinateError};
///
/// assert_eq!(parse_coordinate(" 4\n"), Ok(4));
/// assert_eq!(parse_coordinate("six"), Err(CoordinateError::Type));
/// assert_eq!(parse_coordinate("-1"), Err(CoordinateError::Range(-1)));
/// ```
pub fn parse_coordinate(line: &str) -> Result<u8, CoordinateError> {
    let value: i64 = line.trim().parse().map_err(|_| CoordinateError::Type)?;
    if (0..BOARD_SIDE as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(CoordinateError::Range(value))
    }
}

/// Which card of the turn is being chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSlot {
    First,
    Second,
}

impl std::fmt::Display for CardSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardSlot::First => write!(f, "first"),
            CardSlot::Second => write!(f, "second"),
        }
    }
}

/// Which coordinate the selector wants next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorState {
    AwaitRow,
    AwaitColumn { row: u8 },
}

/// What a line did to the selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feed {
    /// Row accepted; a column is needed next.
    Row(u8),
    /// Both coordinates accepted.
    Complete(Position),
    /// The line was refused; the same coordinate is asked for again.
    Rejected(CoordinateError),
}

/// Assembles a `Position` from row and column lines.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateSelector {
    slot: CardSlot,
    state: SelectorState,
}

impl CoordinateSelector {
    #[must_use]
    pub fn new(slot: CardSlot) -> Self {
        Self {
            slot,
            state: SelectorState::AwaitRow,
        }
    }

    #[must_use]
    pub fn slot(&self) -> CardSlot {
        self.slot
    }

    #[must_use]
    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// The accepted row while the column is outstanding.
    #[must_use]
    pub fn pending_row(&self) -> Option<u8> {
        match self.state {
            SelectorState::AwaitRow => None,
            SelectorState::AwaitColumn { row } => Some(row),
        }
    }

    /// Start this card over from its row.
    pub fn restart(&mut self) {
        self.state = SelectorState::AwaitRow;
    }

    /// Consume one input line.
    pub fn feed(&mut self, line: &str) -> Feed {
        let value = match parse_coordinate(line) {
            Ok(value) => value,
            Err(err) => return Feed::Rejected(err),
        };

        match self.state {
            SelectorState::AwaitRow => {
                self.state = SelectorState::AwaitColumn { row: value };
                Feed::Row(value)
            }
            SelectorState::AwaitColumn { row } => {
                self.state = SelectorState::AwaitRow;
                match Position::new(row, value) {
                    Some(position) => Feed::Complete(position),
                    None => Feed::Rejected(CoordinateError::Range(value as i64)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        for n in 0..6u8 {
            assert_eq!(parse_coordinate(&format!("{}\n", n)), Ok(n));
        }
        assert_eq!(parse_coordinate("  3  \r\n"), Ok(3));
        assert_eq!(parse_coordinate("+2"), Ok(2));
    }

    #[test]
    fn test_parse_type_errors() {
        assert_eq!(parse_coordinate(""), Err(CoordinateError::Type));
        assert_eq!(parse_coordinate("abc"), Err(CoordinateError::Type));
        assert_eq!(parse_coordinate("2.5"), Err(CoordinateError::Type));
        assert_eq!(parse_coordinate("1 2"), Err(CoordinateError::Type));
        assert_eq!(parse_coordinate("99999999999999999999"), Err(CoordinateError::Type));
    }

    #[test]
    fn test_parse_range_errors() {
        assert_eq!(parse_coordinate("6"), Err(CoordinateError::Range(6)));
        assert_eq!(parse_coordinate("-3"), Err(CoordinateError::Range(-3)));
        assert_eq!(parse_coordinate("100"), Err(CoordinateError::Range(100)));
    }

    #[test]
    fn test_selector_happy_path() {
        let mut selector = CoordinateSelector::new(CardSlot::First);
        assert_eq!(selector.state(), SelectorState::AwaitRow);

        assert_eq!(selector.feed("2"), Feed::Row(2));
        assert_eq!(selector.pending_row(), Some(2));

        assert_eq!(selector.feed("5"), Feed::Complete(Position::new(2, 5).unwrap()));
        assert_eq!(selector.state(), SelectorState::AwaitRow);
    }

    #[test]
    fn test_bad_column_keeps_row() {
        let mut selector = CoordinateSelector::new(CardSlot::Second);
        selector.feed("4");

        assert_eq!(selector.feed("x"), Feed::Rejected(CoordinateError::Type));
        assert_eq!(selector.pending_row(), Some(4));

        assert_eq!(selector.feed("7"), Feed::Rejected(CoordinateError::Range(7)));
        assert_eq!(selector.pending_row(), Some(4));

        assert_eq!(selector.feed("0"), Feed::Complete(Position::new(4, 0).unwrap()));
    }

    #[test]
    fn test_bad_row_stays_on_row() {
        let mut selector = CoordinateSelector::new(CardSlot::First);
        assert_eq!(selector.feed("-1"), Feed::Rejected(CoordinateError::Range(-1)));
        assert_eq!(selector.state(), SelectorState::AwaitRow);
    }

    #[test]
    fn test_restart() {
        let mut selector = CoordinateSelector::new(CardSlot::Second);
        selector.feed("1");
        selector.restart();
        assert_eq!(selector.pending_row(), None);
        assert_eq!(selector.slot(), CardSlot::Second);
    }
}
