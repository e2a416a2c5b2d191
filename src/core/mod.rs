//! Core game types: board, visibility, players, state, RNG, configuration.
//!
//! Nothing in here reads input or writes output; `session` does that.

pub mod board;
pub mod config;
pub mod mask;
pub mod player;
pub mod rng;
pub mod state;
pub mod stats;

pub use board::{deal_pairs, Board, BoardError, Position, Symbol, BOARD_SIDE, CELL_COUNT, PAIR_COUNT};
pub use config::{Alphabet, ConfigError, GameConfig, Pacing, DEFAULT_SYMBOLS};
pub use mask::{Cell, VisibilityMask, HIDDEN_MARKER};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::{GameState, TurnPhase};
pub use stats::{GameStats, Stopwatch};
