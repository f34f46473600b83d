//! WASM bindings for focus-core
//!
//! Provides a JavaScript-friendly API for the game logic.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{Coord, FocusGame, GameConfig, GameStatus, Move, MoveError, PlayerConfig};

/// WASM-friendly wrapper around FocusGame
#[wasm_bindgen]
pub struct WasmFocusGame {
    inner: FocusGame,
}

#[wasm_bindgen]
impl WasmFocusGame {
    /// Create a game between two named players
    #[wasm_bindgen(constructor)]
    pub fn new(
        name_one: String,
        color_one: String,
        name_two: String,
        color_two: String,
    ) -> Result<WasmFocusGame, JsError> {
        let config = GameConfig::new(
            PlayerConfig::new(name_one, color_one),
            PlayerConfig::new(name_two, color_two),
        );
        Ok(WasmFocusGame {
            inner: FocusGame::new(config)?,
        })
    }

    /// Move a stack. Returns the outcome text, e.g. "successfully moved"
    #[wasm_bindgen(js_name = moveStack)]
    pub fn move_stack(
        &mut self,
        player: &str,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
        count: usize,
    ) -> Result<String, JsError> {
        outcome_text(
            self.inner
                .move_stack(player, (from_row, from_col), (to_row, to_col), count),
        )
    }

    /// Place a reserve piece. Returns the outcome text
    #[wasm_bindgen(js_name = reserveMove)]
    pub fn reserve_move(&mut self, player: &str, to_row: u8, to_col: u8) -> Result<String, JsError> {
        outcome_text(self.inner.reserve_move(player, (to_row, to_col)))
    }

    /// Colors at a cell, bottom to top
    #[wasm_bindgen(js_name = showPieces)]
    pub fn show_pieces(&self, row: u8, col: u8) -> Vec<String> {
        self.inner
            .show_pieces((row, col))
            .unwrap_or_default()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Reserve count, or undefined for an unknown player
    #[wasm_bindgen(js_name = showReserve)]
    pub fn show_reserve(&self, player: &str) -> Option<u8> {
        self.inner.show_reserve(player)
    }

    /// Captured count, or undefined for an unknown player
    #[wasm_bindgen(js_name = showCaptured)]
    pub fn show_captured(&self, player: &str) -> Option<u8> {
        self.inner.show_captured(player)
    }

    /// Name of the player to move, or undefined before the first move
    #[wasm_bindgen(js_name = currentTurn)]
    pub fn current_turn(&self) -> Option<String> {
        self.inner.current_turn().map(str::to_string)
    }

    /// Game status: "awaiting_first_move", "in_progress", or "game_over"
    pub fn status(&self) -> String {
        match self.inner.status() {
            GameStatus::AwaitingFirstMove => "awaiting_first_move".to_string(),
            GameStatus::InProgress { .. } => "in_progress".to_string(),
            GameStatus::GameOver { .. } => "game_over".to_string(),
        }
    }

    /// Get legal moves as JSON array
    /// Each move is { to: [row, col], from: [row, col] | null, count: n | null }
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, player: &str) -> Result<JsValue, JsError> {
        let moves: Vec<WasmMove> = self
            .inner
            .legal_moves(player)
            .into_iter()
            .map(WasmMove::from)
            .collect();
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    /// Clone the game
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_game(&self) -> WasmFocusGame {
        WasmFocusGame {
            inner: self.inner.clone(),
        }
    }
}

impl Default for WasmFocusGame {
    fn default() -> Self {
        WasmFocusGame {
            inner: FocusGame::default(),
        }
    }
}

/// Rejections are ordinary outcomes for the UI; only engine faults throw.
fn outcome_text<T: ToString>(result: Result<T, MoveError>) -> Result<String, JsError> {
    match result {
        Ok(outcome) => Ok(outcome.to_string()),
        Err(err) if err.is_internal() => Err(JsError::new(&err.to_string())),
        Err(err) => Ok(err.to_string()),
    }
}

/// Serializable move for JavaScript
#[derive(Serialize)]
struct WasmMove {
    to: [u8; 2],
    from: Option<[u8; 2]>,
    count: Option<usize>,
}

impl From<Move> for WasmMove {
    fn from(mov: Move) -> Self {
        let cell = |c: Coord| [c.row, c.col];
        match mov {
            Move::Stack { from, to, count } => WasmMove {
                to: cell(to),
                from: Some(cell(from)),
                count: Some(count),
            },
            Move::Reserve { to } => WasmMove {
                to: cell(to),
                from: None,
                count: None,
            },
        }
    }
}
