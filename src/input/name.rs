//! Player names.

use thiserror::Error;

use crate::core::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("the name cannot be empty, player {}", .player.number())]
    Empty { player: PlayerId },

    #[error("the name is not readable text, player {}", .player.number())]
    NotText { player: PlayerId },
}

/// Accept a name line for `player`.
///
/// The line terminator is dropped; any other whitespace is kept as typed.
/// A name that is blank once trimmed is refused.
///
/// ```
/// use memorama::core::PlayerId;
/// use memorama::input::validate_name;
///
/// assert_eq!(validate_name(" Ana \n", PlayerId::FIRST).unwrap(), " Ana ");
/// assert!(validate_name(" \t\n", PlayerId::FIRST).is_err());
/// ```
pub fn validate_name(line: &str, player: PlayerId) -> Result<String, NameError> {
    let name = line.trim_end_matches(['\n', '\r']);
    if name.trim().is_empty() {
        Err(NameError::Empty { player })
    } else {
        Ok(name.to_string())
    }
}

/// Accept a raw input line for `player`, refusing bytes that are not UTF-8.
pub fn decode_name(line: &[u8], player: PlayerId) -> Result<String, NameError> {
    let text = std::str::from_utf8(line).map_err(|_| NameError::NotText { player })?;
    validate_name(text, player)
}
