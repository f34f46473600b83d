//! Error types for move rejection, engine faults and configuration.

use thiserror::Error;

use crate::board::Coord;
use crate::player::Side;

/// Structural violation inside the engine.
///
/// These never result from bad input. Seeing one means a rules invariant was
/// broken before the call that reported it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineFault {
    #[error("stack is empty")]
    EmptyStack,
    #[error("depth {depth} is out of range for a stack of {len}")]
    DepthOutOfRange { depth: usize, len: usize },
    #[error("reserve would go negative")]
    ReserveUnderflow,
    #[error("cannot transfer from {from} to {to}")]
    BadTransfer { from: Coord, to: Coord },
    #[error("no cell at {0}")]
    MissingCell(Coord),
}

/// Why a move was rejected.
///
/// Every variant except `Internal` is a recoverable user error and leaves the
/// game untouched. The `Display` form is the outcome text shown to players.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("game is over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error("invalid location")]
    InvalidLocation,
    #[error("invalid number of pieces")]
    InvalidNumberOfPieces,
    #[error("no pieces in reserve")]
    EmptyReserve,
    #[error("internal engine fault: {0}")]
    Internal(#[from] EngineFault),
}

impl MoveError {
    /// True for engine bugs, false for rejected user input.
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, MoveError::Internal(_))
    }
}

/// Invalid game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("player {seat} has an empty name")]
    EmptyName { seat: u8 },
    #[error("player {seat} has an empty color")]
    EmptyColor { seat: u8 },
    #[error("both players are named {0:?}")]
    DuplicateName(String),
    #[error("both players use color {0:?}")]
    DuplicateColor(String),
    #[error("board has {found} cells, expected {expected}")]
    WrongCellCount { found: usize, expected: usize },
    #[error("stack at {at} holds {height} pieces")]
    StackTooTall { at: Coord, height: usize },
    #[error("{side:?} has {count} pieces on the board")]
    TooManyPieces { side: Side, count: usize },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_text() {
        assert_eq!(MoveError::NotYourTurn.to_string(), "not your turn");
        assert_eq!(MoveError::InvalidLocation.to_string(), "invalid location");
        assert_eq!(
            MoveError::InvalidNumberOfPieces.to_string(),
            "invalid number of pieces"
        );
        assert_eq!(MoveError::EmptyReserve.to_string(), "no pieces in reserve");
        assert_eq!(
            MoveError::UnknownPlayer("Zed".into()).to_string(),
            "unknown player: Zed"
        );
    }

    #[test]
    fn test_internal_is_distinguishable() {
        let err: MoveError = EngineFault::EmptyStack.into();
        assert!(err.is_internal());
        assert!(!MoveError::EmptyReserve.is_internal());
        assert_eq!(err.to_string(), "internal engine fault: stack is empty");
    }
}
