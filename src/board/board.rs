//! Board structure and the validated placement contract

use std::error::Error;
use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};

/// Rejected placement on the public mutation path.
///
/// Internal search code never sees this error: trial moves target
/// generated candidates, which are empty and in-bounds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Target coordinates lie outside the 15x15 grid.
    OutOfBounds,
    /// Target cell already holds a stone.
    Occupied,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "move target is outside the board"),
            MoveError::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

impl Error for MoveError {}

/// Game board: one bitboard per color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without validation.
    ///
    /// Hot-path primitive for search code whose targets are known to be
    /// empty and in-bounds. External callers use [`Board::try_place`].
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Validated placement for externally supplied coordinates.
    ///
    /// Checks bounds and occupancy, then places the stone. Turn order is
    /// the caller's concern; the board only guards cell state.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] if the coordinates fall outside the
    /// grid, [`MoveError::Occupied`] if the cell holds a stone.
    ///
    /// # Example
    ///
    /// ```
    /// use omok::{Board, MoveError, Stone};
    ///
    /// let mut board = Board::new();
    /// let pos = board.try_place(7, 7, Stone::Black).unwrap();
    /// assert_eq!(board.get(pos), Stone::Black);
    /// assert_eq!(board.try_place(7, 7, Stone::White), Err(MoveError::Occupied));
    /// assert_eq!(board.try_place(15, 0, Stone::White), Err(MoveError::OutOfBounds));
    /// ```
    pub fn try_place(&mut self, row: u8, col: u8, stone: Stone) -> Result<Pos, MoveError> {
        if !Pos::is_valid(i32::from(row), i32::from(col)) {
            return Err(MoveError::OutOfBounds);
        }
        let pos = Pos::new(row, col);
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied);
        }
        self.place_stone(pos, stone);
        Ok(pos)
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every intersection is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == super::TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
