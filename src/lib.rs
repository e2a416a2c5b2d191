//! # memorama
//!
//! A two-player console memory game. Eighteen pairs of symbols are dealt
//! face down on a 6x6 board; players take turns turning over two cards,
//! keep the turn while they find pairs, and lose it on a mismatch.
//!
//! ## Design Principles
//!
//! 1. **Data and rules apart**: `GameState` only holds data;
//!    `MemoramaRules` performs every transition.
//!
//! 2. **Injectable randomness**: boards come from a seeded `GameRng` or are
//!    given outright, so any game can be replayed.
//!
//! 3. **Presentation behind a capability**: the session only sees the
//!    `Display` trait; terminal, plain and recording backends plug in.
//!
//! ## Modules
//!
//! - `core`: board, visibility mask, players, state, RNG, configuration
//! - `rules`: turn resolution and winner determination
//! - `input`: coordinate and name validation
//! - `display`: rendering and output backends
//! - `session`: the interactive game loop
//! - `logging`: logger setup for the binary

pub mod core;
pub mod display;
pub mod input;
pub mod logging;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Alphabet, Board, Cell, GameConfig, GameRng, GameState, GameStats, Pacing, PlayerId, Position,
    Symbol, TurnPhase,
};

pub use crate::rules::{GameResult, MemoramaRules, PickError, TurnOutcome};

pub use crate::input::{CardSlot, CoordinateError, CoordinateSelector, NameError};

pub use crate::display::{Display, Frame, PaletteColor, PlainDisplay, RecordingDisplay, TerminalDisplay};

pub use crate::session::{Session, SessionReport};

/// Errors that end a session or stop it from starting.
///
/// Bad coordinates, empty names and picks of an unavailable card never reach
/// this type, since the session asks again. `Rules` only carries a pick made
/// in the wrong phase.
#[derive(Debug, thiserror::Error)]
pub enum MemoramaError {
    #[error("configuration error: {0}")]
    Config(#[from] crate::core::ConfigError),

    #[error("board error: {0}")]
    Board(#[from] crate::core::BoardError),

    #[error("rules error: {0}")]
    Rules(#[from] crate::rules::PickError),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MemoramaError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
