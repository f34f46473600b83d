//! Ordered piles of pieces occupying a single cell.
//!
//! Index 0 is the bottom of the pile; the last element is the top. The top
//! piece decides which player controls the stack.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::EngineFault;
use crate::player::Side;

/// Pieces a stack may hold once a move has settled.
pub const MAX_STACK_HEIGHT: usize = 5;

/// Inline capacity: a full stack landing on a full stack.
const INLINE_PIECES: usize = MAX_STACK_HEIGHT * 2;

/// A pile of pieces on one cell.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct PieceStack {
    pieces: SmallVec<[Side; INLINE_PIECES]>,
}

impl PieceStack {
    /// Create an empty stack.
    #[inline]
    pub fn new() -> PieceStack {
        PieceStack::default()
    }

    /// Create a stack holding a single seed piece.
    pub fn seeded(side: Side) -> PieceStack {
        let mut stack = PieceStack::new();
        stack.push_top(side);
        stack
    }

    /// Build a stack from pieces listed bottom-first.
    pub fn from_pieces(pieces: &[Side]) -> PieceStack {
        PieceStack {
            pieces: SmallVec::from_slice(pieces),
        }
    }

    /// Add a piece on top.
    #[inline]
    pub fn push_top(&mut self, side: Side) {
        self.pieces.push(side);
    }

    /// Remove the piece `depth` positions down from the top (1 = the top).
    pub fn pop_from_top_offset(&mut self, depth: usize) -> Result<Side, EngineFault> {
        let len = self.pieces.len();
        if depth == 0 || depth > len {
            return Err(EngineFault::DepthOutOfRange { depth, len });
        }
        Ok(self.pieces.remove(len - depth))
    }

    /// Remove the bottom piece.
    pub fn pop_bottom(&mut self) -> Result<Side, EngineFault> {
        if self.pieces.is_empty() {
            return Err(EngineFault::EmptyStack);
        }
        Ok(self.pieces.remove(0))
    }

    /// The controlling piece, if any.
    #[inline]
    pub fn peek_top(&self) -> Option<Side> {
        self.pieces.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces bottom-first.
    #[inline]
    pub fn pieces(&self) -> &[Side] {
        &self.pieces
    }

    /// Owned copy of the pieces, bottom-first.
    pub fn to_ordered_list(&self) -> Vec<Side> {
        self.pieces.to_vec()
    }

    /// Count of pieces belonging to `side`.
    pub fn count(&self, side: Side) -> usize {
        self.pieces.iter().filter(|&&p| p == side).count()
    }

    /// Move the top `count` pieces of `self` onto `dest`, keeping their order.
    ///
    /// The deepest piece of the run moves first, so the run lands on `dest`
    /// in the same bottom-to-top order it had here.
    pub fn transfer_to(&mut self, dest: &mut PieceStack, count: usize) -> Result<(), EngineFault> {
        if count > self.len() {
            return Err(EngineFault::DepthOutOfRange {
                depth: count,
                len: self.len(),
            });
        }
        for depth in (1..=count).rev() {
            let piece = self.pop_from_top_offset(depth)?;
            dest.push_top(piece);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Side::{One, Two};

    #[test]
    fn test_seeded_stack() {
        let stack = PieceStack::seeded(One);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek_top(), Some(One));
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_empty_stack() {
        let mut stack = PieceStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek_top(), None);
        assert_eq!(stack.pop_bottom(), Err(EngineFault::EmptyStack));
        assert_eq!(
            stack.pop_from_top_offset(1),
            Err(EngineFault::DepthOutOfRange { depth: 1, len: 0 })
        );
    }

    #[test]
    fn test_push_top_order() {
        let mut stack = PieceStack::seeded(One);
        stack.push_top(Two);
        stack.push_top(Two);
        assert_eq!(stack.to_ordered_list(), vec![One, Two, Two]);
        assert_eq!(stack.peek_top(), Some(Two));
    }

    #[test]
    fn test_pop_from_top_offset() {
        let mut stack = PieceStack::from_pieces(&[One, Two, One, One]);

        // Depth 3 from the top is index 1.
        assert_eq!(stack.pop_from_top_offset(3), Ok(Two));
        assert_eq!(stack.pieces(), &[One, One, One]);

        assert_eq!(stack.pop_from_top_offset(1), Ok(One));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_pop_from_top_offset_out_of_range() {
        let mut stack = PieceStack::from_pieces(&[One, Two]);
        assert_eq!(
            stack.pop_from_top_offset(3),
            Err(EngineFault::DepthOutOfRange { depth: 3, len: 2 })
        );
        assert_eq!(
            stack.pop_from_top_offset(0),
            Err(EngineFault::DepthOutOfRange { depth: 0, len: 2 })
        );
        assert_eq!(stack.pieces(), &[One, Two]);
    }

    #[test]
    fn test_pop_bottom() {
        let mut stack = PieceStack::from_pieces(&[Two, One, One]);
        assert_eq!(stack.pop_bottom(), Ok(Two));
        assert_eq!(stack.pieces(), &[One, One]);
    }

    #[test]
    fn test_count() {
        let stack = PieceStack::from_pieces(&[Two, One, Two, Two]);
        assert_eq!(stack.count(One), 1);
        assert_eq!(stack.count(Two), 3);
    }

    #[test]
    fn test_transfer_preserves_order() {
        let mut source = PieceStack::from_pieces(&[One, Two, One, Two]);
        let mut dest = PieceStack::seeded(Two);

        source.transfer_to(&mut dest, 3).unwrap();

        assert_eq!(source.pieces(), &[One]);
        assert_eq!(dest.pieces(), &[Two, Two, One, Two]);
    }

    #[test]
    fn test_transfer_whole_stack() {
        let mut source = PieceStack::from_pieces(&[Two, One]);
        let mut dest = PieceStack::new();

        source.transfer_to(&mut dest, 2).unwrap();

        assert!(source.is_empty());
        assert_eq!(dest.pieces(), &[Two, One]);
    }

    #[test]
    fn test_transfer_too_many_leaves_both_untouched() {
        let mut source = PieceStack::from_pieces(&[One]);
        let mut dest = PieceStack::seeded(Two);

        let result = source.transfer_to(&mut dest, 2);

        assert_eq!(result, Err(EngineFault::DepthOutOfRange { depth: 2, len: 1 }));
        assert_eq!(source.pieces(), &[One]);
        assert_eq!(dest.pieces(), &[Two]);
    }

    #[test]
    fn test_overflow_capacity_stays_inline() {
        let mut source = PieceStack::from_pieces(&[One; MAX_STACK_HEIGHT]);
        let mut dest = PieceStack::from_pieces(&[Two; MAX_STACK_HEIGHT]);
        source.transfer_to(&mut dest, MAX_STACK_HEIGHT).unwrap();
        assert_eq!(dest.len(), INLINE_PIECES);
        assert!(!dest.pieces.spilled());
    }
}
