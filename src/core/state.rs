//! Game state.
//!
//! ## GameState
//!
//! Everything one session mutates:
//! - Hidden board and visibility mask
//! - Both players with their points
//! - Active player and turn phase
//! - Cards picked during the current turn
//! - Move and error counters
//!
//! `GameState` only holds data. Transitions live in `rules::MemoramaRules`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, Position, BOARD_SIDE, PAIR_COUNT};
use super::mask::{Cell, VisibilityMask};
use super::player::{Player, PlayerId, PlayerMap};

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    SelectingFirstCard,
    SelectingSecondCard,
    Resolving,
    GameOver,
}

/// Complete state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Face-down layout, fixed for the whole game.
    pub board: Board,

    /// What is currently face up.
    pub mask: VisibilityMask,

    pub players: PlayerMap<Player>,

    /// Player whose turn it is.
    pub active_player: PlayerId,

    pub phase: TurnPhase,

    /// Cards revealed during the current turn, in pick order.
    pub pending: SmallVec<[Position; 2]>,

    /// Pairs resolved so far, matched or not.
    pub moves: u32,

    /// Mismatches plus rejected picks.
    pub errors: u32,
}

impl GameState {
    /// Create a fresh game: all cards hidden, no points, first player to move.
    ///
    /// ## Defaults
    ///
    /// - `active_player`: `PlayerId::FIRST`
    /// - `phase`: `TurnPhase::SelectingFirstCard`
    #[must_use]
    pub fn new(board: Board, names: [String; 2]) -> Self {
        let [first, second] = names;
        let players = PlayerMap::new(|p| {
            if p == PlayerId::FIRST {
                Player::new(first.clone())
            } else {
                Player::new(second.clone())
            }
        });

        Self {
            board,
            mask: VisibilityMask::all_hidden(),
            players,
            active_player: PlayerId::FIRST,
            phase: TurnPhase::SelectingFirstCard,
            pending: SmallVec::new(),
            moves: 0,
            errors: 0,
        }
    }

    /// Sum of both players' points.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.players.iter().map(|(_, p)| p.points as usize).sum()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.pairs_found() >= PAIR_COUNT
    }

    /// Whether a revealed cell belongs to an already matched pair.
    #[must_use]
    pub fn is_matched(&self, position: Position) -> bool {
        !self.mask.is_hidden(position) && !self.pending.contains(&position)
    }

    /// Name of the active player.
    #[must_use]
    pub fn active_name(&self) -> &str {
        &self.players[self.active_player].name
    }

    /// Visible grid for rendering.
    #[must_use]
    pub fn visible_rows(&self) -> [[Cell; BOARD_SIDE]; BOARD_SIDE] {
        self.mask.rows()
    }
}
