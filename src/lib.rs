//! Focus (Domination) game logic with a stack-based board representation.
//!
//! # Board
//!
//! ```text
//! 6x6 grid, (row, col) both 0-5, stored row-major.
//! Each cell holds a pile of at most 5 pieces (bottom first).
//! The top piece decides who may move the pile.
//! ```
//!
//! # Moves
//!
//! ```text
//! Stack:   lift the top N pieces of a pile you control and carry them
//!          exactly N cells along a row or column, landing on any pile.
//! Reserve: drop one of your reserve pieces on any cell.
//! ```
//!
//! After either move, a pile taller than 5 loses pieces from the bottom:
//! the mover's own pieces go to their reserve, opposing pieces are captured.
//! The first player to capture 6 pieces wins.
//!
//! ```
//! use focus_core::{FocusGame, GameConfig};
//!
//! let mut game = FocusGame::new(GameConfig::default()).unwrap();
//! let outcome = game.move_stack("PlayerA", (0, 0), (0, 1), 1).unwrap();
//! assert_eq!(outcome.to_string(), "successfully moved");
//! assert_eq!(game.show_pieces((0, 1)), Some(vec!["R", "R"]));
//! assert_eq!(game.current_turn(), Some("PlayerB"));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod stack;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::board::{Board, Coord, BOARD_SIZE, CELL_COUNT, PIECES_PER_SIDE};
pub use crate::config::{GameConfig, PlayerConfig};
pub use crate::error::{ConfigError, EngineFault, MoveError};
pub use crate::game::{FocusGame, GameStatus, Move, MoveOutcome, WIN_CAPTURES};
pub use crate::player::{Player, Side};
pub use crate::stack::{PieceStack, MAX_STACK_HEIGHT};
