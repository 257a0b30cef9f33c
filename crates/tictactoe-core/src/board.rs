//! Board representation for the 3x3 grid.
//!
//! This module contains:
//! - The `Cell` type and the fixed-size `Board` snapshot
//! - `BoardState`, the sole owner of the grid contents
//! - The eight winning triples and line detection

use crate::player::Marker;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// A snapshot of all nine cells in row-major order
pub type Board = [Cell; CELL_COUNT];

/// Every index triple that wins the game when uniformly occupied
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Contents of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = "")]
    Empty,
    #[serde(rename = "X")]
    MarkerX,
    #[serde(rename = "O")]
    MarkerO,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::X => Cell::MarkerX,
            Marker::O => Cell::MarkerO,
        }
    }
}

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("Cell index out of range")]
    OutOfRangeIndex,

    #[error("Cell is already occupied")]
    CellOccupied,
}

/// Owner of the grid.
///
/// A cell can be written at most once between two calls to [`BoardState::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    cells: Board,
}

impl BoardState {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current cells
    pub fn get(&self) -> Board {
        self.cells
    }

    /// Get a single cell, `None` when the index is off the board
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Place a marker, returning whether the placement happened.
    ///
    /// Out-of-range indices and occupied cells leave the board untouched.
    pub fn place(&mut self, index: i32, marker: Marker) -> bool {
        self.try_place(index, marker).is_ok()
    }

    /// Like [`BoardState::place`] but reports the reason for a refusal
    pub fn try_place(&mut self, index: i32, marker: Marker) -> Result<(), MoveRejection> {
        let index = usize::try_from(index)
            .ok()
            .filter(|&i| i < CELL_COUNT)
            .ok_or(MoveRejection::OutOfRangeIndex)?;

        let cell = &mut self.cells[index];
        if !cell.is_empty() {
            return Err(MoveRejection::CellOccupied);
        }

        *cell = marker.into();
        Ok(())
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Indices of all empty cells, ascending
    pub fn empty_indices(&self) -> Vec<usize> {
        empty_indices(&self.cells)
    }

    /// Whether every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// The first completed triple, if any
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(&self.cells)
    }
}

/// Indices of all empty cells in a board snapshot
pub fn empty_indices(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// Find a triple whose three cells are identical and non-empty
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        !board[a].is_empty() && board[a] == board[b] && board[a] == board[c]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new();
        assert_eq!(board.get(), [Cell::Empty; CELL_COUNT]);
        assert_eq!(board.empty_indices().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_each_cell_accepts_exactly_one_marker() {
        for i in 0..CELL_COUNT as i32 {
            let mut board = BoardState::new();
            board.reset();

            assert!(board.place(i, Marker::X));
            assert!(!board.place(i, Marker::O));
            assert!(!board.place(i, Marker::X));
            assert_eq!(board.cell(i as usize), Some(Cell::MarkerX));
        }
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut board = BoardState::new();

        assert!(!board.place(-1, Marker::X));
        assert!(!board.place(9, Marker::O));
        assert_eq!(board.get(), [Cell::Empty; CELL_COUNT]);

        assert_eq!(
            board.try_place(i32::MAX, Marker::X),
            Err(MoveRejection::OutOfRangeIndex)
        );
    }

    #[test]
    fn test_occupied_reason() {
        let mut board = BoardState::new();
        board.try_place(4, Marker::O).unwrap();
        assert_eq!(board.try_place(4, Marker::X), Err(MoveRejection::CellOccupied));
        assert_eq!(board.cell(4), Some(Cell::MarkerO));
    }

    #[test]
    fn test_get_returns_a_copy() {
        let mut board = BoardState::new();
        let mut snapshot = board.get();
        snapshot[0] = Cell::MarkerX;

        assert_eq!(board.cell(0), Some(Cell::Empty));
        assert!(board.place(0, Marker::O));
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = BoardState::new();
        for i in 0..9 {
            let marker = if i % 2 == 0 { Marker::X } else { Marker::O };
            board.place(i, marker);
        }
        assert!(board.is_full());

        board.reset();
        assert_eq!(board.get(), [Cell::Empty; CELL_COUNT]);
    }

    #[test]
    fn test_winning_lines() {
        for line in WINNING_LINES {
            let mut board = BoardState::new();
            for index in line {
                board.place(index as i32, Marker::O);
            }
            assert_eq!(board.winning_line(), Some(line));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = BoardState::new();
        board.place(0, Marker::X);
        board.place(1, Marker::X);
        board.place(2, Marker::O);
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_cell_serialization() {
        let cells = [Cell::Empty, Cell::MarkerX, Cell::MarkerO];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"["","X","O"]"#);
    }
}
