//! Validation of everything the players type.
//!
//! - `coordinate`: one row or column per line, 0 to 5, assembled into a
//!   `Position` by `CoordinateSelector`
//! - `name`: player names, non-empty after trimming

pub mod coordinate;
pub mod name;

pub use coordinate::{parse_coordinate, CardSlot, CoordinateError, CoordinateSelector, Feed, SelectorState};
pub use name::{decode_name, validate_name, NameError};
