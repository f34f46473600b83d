//! The 6x6 grid of stacks.
//!
//! ```text
//!        col 0 1 2 3 4 5
//! row 0      1 1 2 2 1 1
//! row 1      2 2 1 1 2 2
//! row 2      1 1 2 2 1 1
//! row 3      2 2 1 1 2 2
//! row 4      1 1 2 2 1 1
//! row 5      2 2 1 1 2 2
//! ```
//!
//! Cells are stored row-major, so `(row, col)` lives at `row * 6 + col`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EngineFault};
use crate::player::Side;
use crate::stack::{PieceStack, MAX_STACK_HEIGHT};

/// Cells per row and per column.
pub const BOARD_SIZE: u8 = 6;

/// Total cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = CELL_COUNT / 2;

/// A `(row, col)` board location. May be off the board; check `is_valid`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Coord {
        Coord { row, col }
    }

    /// Check if this lies on the 6x6 grid.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major cell index. Only meaningful for valid coordinates.
    #[inline]
    pub fn index(self) -> usize {
        debug_assert!(self.is_valid());
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Cells travelled moving straight to `other`, or `None` off a shared
    /// row or column.
    ///
    /// Along a shared line exactly one of row and column changes, so the
    /// distance equals the change in `row + col`.
    pub fn line_distance(self, other: Coord) -> Option<usize> {
        if self.row != other.row && self.col != other.col {
            return None;
        }
        let here = self.row as i32 + self.col as i32;
        let there = other.row as i32 + other.col as i32;
        Some((here - there).unsigned_abs() as usize)
    }

    /// Iterate over all 36 cells, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl From<(u8, u8)> for Coord {
    fn from((row, col): (u8, u8)) -> Coord {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// All 36 stacks.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<PieceStack>,
}

impl Board {
    /// Board in the opening layout, one piece per cell.
    pub fn new() -> Board {
        let cells = Coord::all()
            .map(|coord| PieceStack::seeded(Board::starting_side(coord)))
            .collect();
        Board { cells }
    }

    /// Board with every cell empty, for building custom positions.
    pub fn empty() -> Board {
        Board {
            cells: vec![PieceStack::new(); CELL_COUNT],
        }
    }

    /// Which side seeds `coord` in the opening layout.
    ///
    /// Pairs of cells alternate along a row, and each row is shifted by one
    /// pair relative to the row above.
    pub fn starting_side(coord: Coord) -> Side {
        if (coord.row + coord.col / 2) % 2 == 0 {
            Side::One
        } else {
            Side::Two
        }
    }

    /// Get the stack at `coord`, or `None` off the board.
    #[inline]
    pub fn stack(&self, coord: Coord) -> Option<&PieceStack> {
        if coord.is_valid() {
            self.cells.get(coord.index())
        } else {
            None
        }
    }

    /// Mutable stack at `coord`, or `None` off the board.
    #[inline]
    pub fn stack_mut(&mut self, coord: Coord) -> Option<&mut PieceStack> {
        if coord.is_valid() {
            self.cells.get_mut(coord.index())
        } else {
            None
        }
    }

    /// Replace the stack at `coord`. Ignored off the board.
    pub fn set_stack(&mut self, coord: Coord, stack: PieceStack) {
        if let Some(cell) = self.stack_mut(coord) {
            *cell = stack;
        }
    }

    /// Check that the board could arise in play: all 36 cells present, no
    /// pile above [`MAX_STACK_HEIGHT`], and at most [`PIECES_PER_SIDE`]
    /// pieces of either side.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.cells.len() != CELL_COUNT {
            return Err(ConfigError::WrongCellCount {
                found: self.cells.len(),
                expected: CELL_COUNT,
            });
        }
        if let Some((at, stack)) = self.iter().find(|(_, s)| s.len() > MAX_STACK_HEIGHT) {
            return Err(ConfigError::StackTooTall {
                at,
                height: stack.len(),
            });
        }
        for side in Side::all() {
            let count = self.pieces_on_board(side);
            if count > PIECES_PER_SIDE {
                return Err(ConfigError::TooManyPieces { side, count });
            }
        }
        Ok(())
    }

    /// Borrow two distinct cells mutably at once.
    fn pair_mut(&mut self, a: Coord, b: Coord) -> Option<(&mut PieceStack, &mut PieceStack)> {
        if !a.is_valid() || !b.is_valid() || a == b {
            return None;
        }
        let (ia, ib) = (a.index(), b.index());
        if ia.max(ib) >= self.cells.len() {
            return None;
        }
        if ia < ib {
            let (lo, hi) = self.cells.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.cells.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }

    /// Move the top `count` pieces from `from` onto `to`, keeping their order.
    ///
    /// Does NOT validate rules - caller must ensure the move is legal.
    pub fn transfer(&mut self, from: Coord, to: Coord, count: usize) -> Result<(), EngineFault> {
        let (source, dest) = self
            .pair_mut(from, to)
            .ok_or(EngineFault::BadTransfer { from, to })?;
        source.transfer_to(dest, count)
    }

    /// Count of `side` pieces anywhere on the board, covered or not.
    pub fn pieces_on_board(&self, side: Side) -> usize {
        self.cells.iter().map(|stack| stack.count(side)).sum()
    }

    /// Stacks whose top piece belongs to `side`.
    pub fn controlled_by(&self, side: Side) -> impl Iterator<Item = (Coord, &PieceStack)> + '_ {
        Coord::all()
            .zip(self.cells.iter())
            .filter(move |(_, stack)| stack.peek_top() == Some(side))
    }

    /// Iterate over every cell with its stack, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &PieceStack)> + '_ {
        Coord::all().zip(self.cells.iter())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
