//! The hidden 6x6 board.
//!
//! A board holds 18 symbols, each exactly twice, laid out row-major.
//! It never changes after it is dealt.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::Alphabet;
use super::rng::GameRng;

/// Rows and columns on the board.
pub const BOARD_SIDE: usize = 6;

/// Cards on the board.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Distinct symbols, and therefore pairs, on the board.
pub const PAIR_COUNT: usize = CELL_COUNT / 2;

/// A card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A (row, column) coordinate, both in `0..BOARD_SIDE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position, or `None` when either coordinate is off the board.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Option<Self> {
        let side = BOARD_SIDE as u8;
        (row < side && col < side).then_some(Self { row, col })
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into a 36-cell grid.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIDE + self.col as usize
    }

    /// Inverse of `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self {
            row: (index / BOARD_SIDE) as u8,
            col: (index % BOARD_SIDE) as u8,
        })
    }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).filter_map(Self::from_index)
    }
}

/// Unchecked wire form of a `Position`.
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = BoardError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col).ok_or(BoardError::OffBoard {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A board that does not hold 18 symbols exactly twice each.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a board needs {expected} cards, got {found}")]
    WrongCellCount { expected: usize, found: usize },

    #[error("symbol '{symbol}' appears {count} times, expected 2")]
    UnpairedSymbol { symbol: Symbol, count: usize },

    #[error("({row}, {col}) is off the board")]
    OffBoard { row: u8, col: u8 },
}

/// Lay each alphabet symbol down twice, side by side: `A A B B ... R R`.
#[must_use]
pub fn deal_pairs(alphabet: &Alphabet) -> Vec<Symbol> {
    alphabet
        .symbols()
        .iter()
        .flat_map(|&symbol| [symbol, symbol])
        .collect()
}

/// The face-down layout of a game.
///
/// Serialized as its row-major symbol list; deserializing runs the same
/// checks as [`Board::from_symbols`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Board {
    cells: Vec<Symbol>,
}

impl Board {
    /// Deal the alphabet in pairs, shuffle, and lay the deck out row-major.
    pub fn generate(alphabet: &Alphabet, rng: &mut GameRng) -> Self {
        let mut cells = deal_pairs(alphabet);
        rng.shuffle(&mut cells);
        Self { cells }
    }

    /// Build a board from a row-major symbol sequence.
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self, BoardError> {
        if symbols.len() != CELL_COUNT {
            return Err(BoardError::WrongCellCount {
                expected: CELL_COUNT,
                found: symbols.len(),
            });
        }

        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for &symbol in symbols {
            *counts.entry(symbol).or_default() += 1;
        }

        // Report the smallest offending symbol so errors are stable.
        let mut unpaired: Vec<_> = counts.into_iter().filter(|&(_, n)| n != 2).collect();
        unpaired.sort();
        if let Some(&(symbol, count)) = unpaired.first() {
            return Err(BoardError::UnpairedSymbol { symbol, count });
        }

        Ok(Self {
            cells: symbols.to_vec(),
        })
    }

    /// Build a board from six strings of six characters each.
    ///
    /// ```
    /// use memorama::core::{Board, Position, Symbol};
    ///
    /// let board = Board::from_rows(&[
    ///     "ABCDEF", "GHIJKL", "MNOPQR",
    ///     "ABCDEF", "GHIJKL", "MNOPQR",
    /// ]).unwrap();
    /// assert_eq!(board.symbol_at(Position::new(4, 1).unwrap()), Symbol('H'));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let symbols: Vec<Symbol> = rows.iter().flat_map(|row| row.chars()).map(Symbol).collect();
        Self::from_symbols(&symbols)
    }

    #[must_use]
    pub fn symbol_at(&self, position: Position) -> Symbol {
        self.cells[position.index()]
    }

    /// Cards in row-major order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.cells
    }

    /// Both positions holding `symbol`, in row-major order.
    #[must_use]
    pub fn pair_of(&self, symbol: Symbol) -> Option<[Position; 2]> {
        let mut found = Position::all().filter(|&p| self.symbol_at(p) == symbol);
        Some([found.next()?, found.next()?])
    }
}

impl TryFrom<Vec<Symbol>> for Board {
    type Error = BoardError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        Board::from_symbols(&symbols)
    }
}

impl From<Board> for Vec<Symbol> {
    fn from(board: Board) -> Self {
        board.cells
    }
}
