//! Turn resolution and winner determination.
//!
//! A turn moves through
//! `SelectingFirstCard -> SelectingSecondCard -> Resolving`, then back to
//! `SelectingFirstCard` or on to `GameOver` once all 18 pairs are found.
//!
//! ## Implementation Notes
//!
//! - Rejected picks never change the phase; they only bump the error counter.
//! - A match keeps the turn; a mismatch hides both cards and passes it.
//! - Calling a transition in the wrong phase is refused without side effects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameState, PlayerId, Position, Symbol, TurnPhase};

/// Why a pick was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    /// The second card is the card already picked as first.
    #[error("you already chose that card as your first card")]
    SameCard,

    /// The card is face up, either matched earlier or picked this turn.
    #[error("that card has already been discovered")]
    AlreadyRevealed,

    #[error("cannot do that while the turn is in {0:?}")]
    OutOfPhase(TurnPhase),
}

impl PickError {
    /// Whether this rejection is a player mistake counted in the statistics.
    #[must_use]
    pub fn counts_as_error(self) -> bool {
        matches!(self, PickError::SameCard | PickError::AlreadyRevealed)
    }
}

/// How a resolved pair turned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Both cards show `symbol`; `player` scored and keeps the turn.
    Match {
        player: PlayerId,
        symbol: Symbol,
        pair: [Position; 2],
    },
    /// The cards differ; they are face down again and `next_player` moves.
    NoMatch {
        pair: [Position; 2],
        next_player: PlayerId,
    },
}

impl TurnOutcome {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, TurnOutcome::Match { .. })
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly more pairs than the opponent.
    Winner(PlayerId),
    /// 9 to 9.
    Draw,
}

impl GameResult {
    /// Compare final point totals. Equal totals are a draw, with no tie-break.
    #[must_use]
    pub fn from_points(first: u8, second: u8) -> Self {
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules of the two-player memory game.
///
/// Stateless; every method works on the `GameState` it is handed.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoramaRules;

impl MemoramaRules {
    pub fn new() -> Self {
        Self
    }

    /// Positions that may be picked right now.
    #[must_use]
    pub fn legal_picks(&self, state: &GameState) -> Vec<Position> {
        match state.phase {
            TurnPhase::SelectingFirstCard | TurnPhase::SelectingSecondCard => Position::all()
                .filter(|&p| state.mask.is_hidden(p))
                .collect(),
            TurnPhase::Resolving | TurnPhase::GameOver => Vec::new(),
        }
    }

    /// Turn the first card of the turn face up.
    pub fn select_first(&self, state: &mut GameState, position: Position) -> Result<Symbol, PickError> {
        expect_phase(state, TurnPhase::SelectingFirstCard)?;

        if !state.mask.is_hidden(position) {
            return Err(reject(state, PickError::AlreadyRevealed, position));
        }

        let symbol = reveal(state, position);
        state.phase = TurnPhase::SelectingSecondCard;
        Ok(symbol)
    }

    /// Turn the second card face up, leaving the pair ready to resolve.
    pub fn select_second(&self, state: &mut GameState, position: Position) -> Result<Symbol, PickError> {
        expect_phase(state, TurnPhase::SelectingSecondCard)?;

        if state.pending.first() == Some(&position) {
            return Err(reject(state, PickError::SameCard, position));
        }
        if !state.mask.is_hidden(position) {
            return Err(reject(state, PickError::AlreadyRevealed, position));
        }

        let symbol = reveal(state, position);
        state.phase = TurnPhase::Resolving;
        Ok(symbol)
    }

    /// Compare the two face-up cards and finish the turn.
    pub fn resolve(&self, state: &mut GameState) -> Result<TurnOutcome, PickError> {
        expect_phase(state, TurnPhase::Resolving)?;

        let pair = match state.pending.as_slice() {
            &[first, second] => [first, second],
            _ => return Err(PickError::OutOfPhase(state.phase)),
        };
        state.pending.clear();
        state.moves += 1;

        let symbol = state.board.symbol_at(pair[0]);
        if symbol == state.board.symbol_at(pair[1]) {
            let player = state.active_player;
            state.players[player].points += 1;
            state.phase = if state.is_over() {
                TurnPhase::GameOver
            } else {
                TurnPhase::SelectingFirstCard
            };
            log::info!("{} matched {} at {} and {}", player, symbol, pair[0], pair[1]);
            Ok(TurnOutcome::Match { player, symbol, pair })
        } else {
            state.errors += 1;
            for position in pair {
                state.mask.hide(position);
            }
            let next_player = state.active_player.other();
            state.active_player = next_player;
            state.phase = TurnPhase::SelectingFirstCard;
            log::debug!("no match at {} and {}, turn passes to {}", pair[0], pair[1], next_player);
            Ok(TurnOutcome::NoMatch { pair, next_player })
        }
    }

    /// The final result, or `None` while pairs remain.
    #[must_use]
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        (state.phase == TurnPhase::GameOver).then(|| {
            GameResult::from_points(
                state.players[PlayerId::FIRST].points,
                state.players[PlayerId::SECOND].points,
            )
        })
    }
}

fn expect_phase(state: &GameState, phase: TurnPhase) -> Result<(), PickError> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(PickError::OutOfPhase(state.phase))
    }
}

fn reveal(state: &mut GameState, position: Position) -> Symbol {
    let symbol = state.board.symbol_at(position);
    state.mask.reveal(position, symbol);
    state.pending.push(position);
    log::debug!("{} revealed {} at {}", state.active_player, symbol, position);
    symbol
}

fn reject(state: &mut GameState, error: PickError, position: Position) -> PickError {
    state.errors += 1;
    log::debug!("{} picked {}: {}", state.active_player, position, error);
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn new_state() -> GameState {
        let board =
            Board::from_rows(&["ABCDEF", "GHIJKL", "MNOPQR", "ABCDEF", "GHIJKL", "MNOPQR"]).unwrap();
        GameState::new(board, ["Ana".to_string(), "Luis".to_string()])
    }

    #[test]
    fn test_game_result_from_points() {
        assert_eq!(GameResult::from_points(10, 8), GameResult::Winner(PlayerId::FIRST));
        assert_eq!(GameResult::from_points(4, 14), GameResult::Winner(PlayerId::SECOND));
        assert_eq!(GameResult::from_points(9, 9), GameResult::Draw);
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::SECOND);
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));
        assert!(!GameResult::Draw.is_winner(PlayerId::FIRST));
    }

    #[test]
    fn test_match_keeps_turn() {
        let rules = MemoramaRules::new();
        let mut state = new_state();

        assert_eq!(rules.select_first(&mut state, pos(0, 0)), Ok(Symbol('A')));
        assert_eq!(rules.select_second(&mut state, pos(3, 0)), Ok(Symbol('A')));
        let outcome = rules.resolve(&mut state).unwrap();

        assert!(outcome.is_match());
        assert_eq!(state.players[PlayerId::FIRST].points, 1);
        assert_eq!(state.active_player, PlayerId::FIRST);
        assert_eq!(state.moves, 1);
        assert_eq!(state.errors, 0);
        assert!(state.is_matched(pos(0, 0)));
        assert!(state.is_matched(pos(3, 0)));
    }

    #[test]
    fn test_mismatch_passes_turn() {
        let rules = MemoramaRules::new();
        let mut state = new_state();

        rules.select_first(&mut state, pos(0, 0)).unwrap();
        rules.select_second(&mut state, pos(0, 1)).unwrap();
        assert_eq!(state.mask.revealed_count(), 2);

        let outcome = rules.resolve(&mut state).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::NoMatch {
                pair: [pos(0, 0), pos(0, 1)],
                next_player: PlayerId::SECOND,
            }
        );
        assert_eq!(state.mask.revealed_count(), 0);
        assert_eq!(state.active_player, PlayerId::SECOND);
        assert_eq!(state.moves, 1);
        assert_eq!(state.errors, 1);
        assert_eq!(state.pairs_found(), 0);
    }

    #[test]
    fn test_same_card_twice_rejected() {
        let rules = MemoramaRules::new();
        let mut state = new_state();

        rules.select_first(&mut state, pos(2, 2)).unwrap();
        assert_eq!(rules.select_second(&mut state, pos(2, 2)), Err(PickError::SameCard));
        assert_eq!(state.phase, TurnPhase::SelectingSecondCard);
        assert_eq!(state.errors, 1);
        assert_eq!(state.pending.len(), 1);
    }

    #[test]
    fn test_revealed_card_rejected() {
        let rules = MemoramaRules::new();
        let mut state = new_state();

        rules.select_first(&mut state, pos(0, 0)).unwrap();
        rules.select_second(&mut state, pos(3, 0)).unwrap();
        rules.resolve(&mut state).unwrap();

        assert_eq!(rules.select_first(&mut state, pos(3, 0)), Err(PickError::AlreadyRevealed));
        assert_eq!(state.phase, TurnPhase::SelectingFirstCard);

        rules.select_first(&mut state, pos(1, 1)).unwrap();
        assert_eq!(rules.select_second(&mut state, pos(0, 0)), Err(PickError::AlreadyRevealed));
        assert_eq!(state.errors, 2);
    }

    #[test]
    fn test_out_of_phase() {
        let rules = MemoramaRules::new();
        let mut state = new_state();

        assert_eq!(
            rules.select_second(&mut state, pos(0, 0)),
            Err(PickError::OutOfPhase(TurnPhase::SelectingFirstCard))
        );
        assert!(rules.resolve(&mut state).is_err());
        assert_eq!(state.errors, 0);
        assert!(!PickError::OutOfPhase(TurnPhase::Resolving).counts_as_error());
    }

    #[test]
    fn test_legal_picks() {
        let rules = MemoramaRules::new();
        let mut state = new_state();
        assert_eq!(rules.legal_picks(&state).len(), 36);

        rules.select_first(&mut state, pos(0, 0)).unwrap();
        assert_eq!(rules.legal_picks(&state).len(), 35);

        rules.select_second(&mut state, pos(0, 1)).unwrap();
        assert!(rules.legal_picks(&state).is_empty());
    }

    #[test]
    fn test_game_over_after_last_pair() {
        let rules = MemoramaRules::new();
        let mut state = new_state();

        for col in 0..6 {
            for row in 0..3 {
                assert!(rules.result(&state).is_none());
                rules.select_first(&mut state, pos(row, col)).unwrap();
                rules.select_second(&mut state, pos(row + 3, col)).unwrap();
                rules.resolve(&mut state).unwrap();
            }
        }

        assert_eq!(state.phase, TurnPhase::GameOver);
        assert_eq!(state.pairs_found(), 18);
        assert_eq!(rules.result(&state), Some(GameResult::Winner(PlayerId::FIRST)));
        assert!(rules.select_first(&mut state, pos(0, 0)).is_err());
    }
}
