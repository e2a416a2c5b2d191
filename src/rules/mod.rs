//! Rules of the game.
//!
//! `MemoramaRules` moves a `GameState` through picking two cards,
//! comparing them, and passing or keeping the turn. `GameResult` names the
//! winner once every pair is found.

pub mod engine;

pub use engine::{GameResult, MemoramaRules, PickError, TurnOutcome};
