//! The automated opponent.
//!
//! It has no strategy: every empty cell is equally likely.

use crate::board::{empty_indices, Board};
use rand::prelude::*;

/// A bot player that picks uniformly among empty cells
#[derive(Debug, Clone)]
pub struct Bot {
    rng: StdRng,
}

impl Bot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose an empty cell, or `None` on a full board
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        empty_indices(board).choose(&mut self.rng).copied()
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, CELL_COUNT};

    #[test]
    fn test_bot_only_picks_empty_cells() {
        let mut board = [Cell::MarkerX; CELL_COUNT];
        board[3] = Cell::Empty;
        board[7] = Cell::Empty;

        let mut bot = Bot::with_seed(7);
        for _ in 0..50 {
            let choice = bot.choose_move(&board).unwrap();
            assert!(choice == 3 || choice == 7);
        }
    }

    #[test]
    fn test_bot_on_full_board() {
        let board = [Cell::MarkerO; CELL_COUNT];
        let mut bot = Bot::new();
        assert_eq!(bot.choose_move(&board), None);
    }

    #[test]
    fn test_seeded_bots_agree() {
        let board = [Cell::Empty; CELL_COUNT];
        let mut a = Bot::with_seed(42);
        let mut b = Bot::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.choose_move(&board), b.choose_move(&board));
        }
    }

    #[test]
    fn test_bot_reaches_every_cell() {
        let board = [Cell::Empty; CELL_COUNT];
        let mut bot = Bot::with_seed(1);
        let mut seen = [false; CELL_COUNT];
        for _ in 0..500 {
            seen[bot.choose_move(&board).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
