//! What the players can currently see of the board.

use serde::{Deserialize, Serialize};

use super::board::{BoardError, Position, Symbol, BOARD_SIDE, CELL_COUNT};

/// Marker printed for a face-down card.
pub const HIDDEN_MARKER: char = 'X';

/// One visible cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Hidden,
    Revealed(Symbol),
}

impl Cell {
    /// Character shown for this cell.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Cell::Hidden => HIDDEN_MARKER,
            Cell::Revealed(symbol) => symbol.0,
        }
    }
}

/// 6x6 grid of hidden/revealed cells.
///
/// Starts all hidden. Only the turn resolver flips cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct VisibilityMask {
    cells: Vec<Cell>,
}

impl Default for VisibilityMask {
    fn default() -> Self {
        Self::all_hidden()
    }
}

impl TryFrom<Vec<Cell>> for VisibilityMask {
    type Error = BoardError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        if cells.len() != CELL_COUNT {
            return Err(BoardError::WrongCellCount {
                expected: CELL_COUNT,
                found: cells.len(),
            });
        }
        Ok(Self { cells })
    }
}

impl From<VisibilityMask> for Vec<Cell> {
    fn from(mask: VisibilityMask) -> Self {
        mask.cells
    }
}

impl VisibilityMask {
    #[must_use]
    pub fn all_hidden() -> Self {
        Self {
            cells: vec![Cell::Hidden; CELL_COUNT],
        }
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    #[must_use]
    pub fn is_hidden(&self, position: Position) -> bool {
        self.get(position) == Cell::Hidden
    }

    pub fn reveal(&mut self, position: Position, symbol: Symbol) {
        self.cells[position.index()] = Cell::Revealed(symbol);
    }

    pub fn hide(&mut self, position: Position) {
        self.cells[position.index()] = Cell::Hidden;
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Hidden).count()
    }

    /// The grid as rows, ready for rendering.
    #[must_use]
    pub fn rows(&self) -> [[Cell; BOARD_SIDE]; BOARD_SIDE] {
        let mut rows = [[Cell::Hidden; BOARD_SIDE]; BOARD_SIDE];
        for position in Position::all() {
            rows[position.row() as usize][position.col() as usize] = self.get(position);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_starts_hidden() {
        let mask = VisibilityMask::all_hidden();
        assert_eq!(mask.revealed_count(), 0);
        assert!(Position::all().all(|p| mask.is_hidden(p)));
    }

    #[test]
    fn test_reveal_and_hide() {
        let mut mask = VisibilityMask::default();
        mask.reveal(pos(1, 2), Symbol('Q'));

        assert_eq!(mask.get(pos(1, 2)), Cell::Revealed(Symbol('Q')));
        assert_eq!(mask.revealed_count(), 1);

        mask.hide(pos(1, 2));
        assert!(mask.is_hidden(pos(1, 2)));
    }

    #[test]
    fn test_rows_layout() {
        let mut mask = VisibilityMask::default();
        mask.reveal(pos(5, 0), Symbol('B'));

        let rows = mask.rows();
        assert_eq!(rows[5][0].glyph(), 'B');
        assert_eq!(rows[0][5].glyph(), HIDDEN_MARKER);
    }

    #[test]
    fn test_deserialize_checks_size() {
        let mut mask = VisibilityMask::default();
        mask.reveal(pos(2, 2), Symbol('C'));
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(serde_json::from_str::<VisibilityMask>(&json).unwrap(), mask);

        assert!(serde_json::from_str::<VisibilityMask>(r#"["Hidden"]"#).is_err());
    }
}
