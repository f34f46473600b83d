//! Turn order, move validation and execution, overflow and win detection.

use std::fmt;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord};
use crate::config::GameConfig;
use crate::error::{ConfigError, EngineFault, MoveError};
use crate::player::{Player, Side};
use crate::stack::{PieceStack, MAX_STACK_HEIGHT};

/// Captures needed to win.
pub const WIN_CAPTURES: u8 = 6;

/// A move in the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Carry the top `count` pieces of a stack `count` cells along a line.
    Stack { from: Coord, to: Coord, count: usize },
    /// Drop one piece from the reserve onto any cell.
    Reserve { to: Coord },
}

impl Move {
    /// Get the destination of the move.
    #[inline]
    pub fn to(&self) -> Coord {
        match self {
            Move::Stack { to, .. } => *to,
            Move::Reserve { to } => *to,
        }
    }
}

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play passes to the opponent.
    Moved,
    /// The mover reached the capture target.
    Won { winner: String },
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Moved => f.write_str("successfully moved"),
            MoveOutcome::Won { winner } => write!(f, "{} wins", winner),
        }
    }
}

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Nobody has moved; either player may open.
    AwaitingFirstMove,
    InProgress { turn: Side },
    GameOver { winner: Side },
}

/// A two-player game of Focus.
///
/// Players are addressed by name. The first player to make a successful move
/// takes the opening turn; after that turns alternate until someone has
/// captured [`WIN_CAPTURES`] pieces.
///
/// A rejected attempt never claims the opening turn, so either player may
/// still open after the other fumbles. This is deliberate: rules where any
/// attempted first move fixes the turn order would let a rejected call
/// change the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusGame {
    board: Board,
    players: [Player; 2],
    turn: Option<Side>,
    winner: Option<Side>,
}

impl FocusGame {
    /// Start a game from the opening layout.
    pub fn new(config: GameConfig) -> Result<FocusGame, ConfigError> {
        FocusGame::with_board(config, Board::new())
    }

    /// Start a game from an arbitrary position, with empty reserves and no
    /// captures.
    ///
    /// The board must be one play could reach: see [`Board::check`].
    pub fn with_board(config: GameConfig, board: Board) -> Result<FocusGame, ConfigError> {
        config.validate()?;
        board.check()?;
        Ok(FocusGame::from_parts(&config, board))
    }

    fn from_parts(config: &GameConfig, board: Board) -> FocusGame {
        FocusGame {
            board,
            players: config.build_players(),
            turn: None,
            winner: None,
        }
    }

    // ========== Queries ==========

    /// Seat of the named player.
    pub fn side_of(&self, name: &str) -> Option<Side> {
        Side::all().find(|side| self.players[side.index()].name() == name)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.side_of(name).map(|side| &self.players[side.index()])
    }

    #[inline]
    pub fn player_at(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    #[inline]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stack(&self, coord: impl Into<Coord>) -> Option<&PieceStack> {
        self.board.stack(coord.into())
    }

    /// Name of the player to move, once the opening turn has been taken.
    pub fn current_turn(&self) -> Option<&str> {
        self.turn.map(|side| self.player_at(side).name())
    }

    pub fn status(&self) -> GameStatus {
        match (self.winner, self.turn) {
            (Some(winner), _) => GameStatus::GameOver { winner },
            (None, Some(turn)) => GameStatus::InProgress { turn },
            (None, None) => GameStatus::AwaitingFirstMove,
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|side| self.player_at(side))
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Colors at `coord`, bottom-first. `None` off the board.
    pub fn show_pieces(&self, coord: impl Into<Coord>) -> Option<Vec<&str>> {
        let stack = self.board.stack(coord.into())?;
        Some(
            stack
                .pieces()
                .iter()
                .map(|&side| self.player_at(side).color())
                .collect(),
        )
    }

    pub fn show_reserve(&self, name: &str) -> Option<u8> {
        self.player(name).map(Player::reserve)
    }

    pub fn show_captured(&self, name: &str) -> Option<u8> {
        self.player(name).map(Player::captured)
    }

    // ========== Moves ==========

    /// Move `count` pieces off the top of `from` onto `to`.
    pub fn move_stack(
        &mut self,
        player: &str,
        from: impl Into<Coord>,
        to: impl Into<Coord>,
        count: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let mov = Move::Stack {
            from: from.into(),
            to: to.into(),
            count,
        };
        self.play(player, mov)
    }

    /// Place one piece from the player's reserve onto `to`.
    pub fn reserve_move(&mut self, player: &str, to: impl Into<Coord>) -> Result<MoveOutcome, MoveError> {
        self.play(player, Move::Reserve { to: to.into() })
    }

    /// Validate and apply a move.
    ///
    /// On `Err` the game is unchanged, except for `MoveError::Internal`.
    pub fn play(&mut self, player: &str, mov: Move) -> Result<MoveOutcome, MoveError> {
        let side = match self.validate(player, mov) {
            Ok(side) => side,
            Err(err) => {
                debug!("rejected {:?} from {}: {}", mov, player, err);
                return Err(err);
            }
        };
        debug!("{} plays {:?}", player, mov);
        Ok(self.apply(side, mov)?)
    }

    /// Check a move without applying it. Returns the mover's seat.
    ///
    /// Checks run in a fixed order and stop at the first failure: player,
    /// game over, turn, locations, piece count (or reserve).
    pub fn validate(&self, player: &str, mov: Move) -> Result<Side, MoveError> {
        let side = self
            .side_of(player)
            .ok_or_else(|| MoveError::UnknownPlayer(player.to_string()))?;
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.turn.is_some_and(|turn| turn != side) {
            return Err(MoveError::NotYourTurn);
        }
        match mov {
            Move::Stack { from, to, count } => self.check_stack_move(side, from, to, count)?,
            Move::Reserve { to } => self.check_reserve_move(side, to)?,
        }
        Ok(side)
    }

    fn check_stack_move(&self, side: Side, from: Coord, to: Coord, count: usize) -> Result<(), MoveError> {
        if from == to || !to.is_valid() {
            return Err(MoveError::InvalidLocation);
        }
        let source = self.board.stack(from).ok_or(MoveError::InvalidLocation)?;
        // An empty source has no top and fails here too.
        if source.peek_top() != Some(side) {
            return Err(MoveError::InvalidLocation);
        }
        let distance = from.line_distance(to).ok_or(MoveError::InvalidLocation)?;
        if count > source.len() || count != distance {
            return Err(MoveError::InvalidNumberOfPieces);
        }
        Ok(())
    }

    fn check_reserve_move(&self, side: Side, to: Coord) -> Result<(), MoveError> {
        if !to.is_valid() {
            return Err(MoveError::InvalidLocation);
        }
        if self.player_at(side).reserve() == 0 {
            return Err(MoveError::EmptyReserve);
        }
        Ok(())
    }

    /// Apply a validated move.
    fn apply(&mut self, side: Side, mov: Move) -> Result<MoveOutcome, EngineFault> {
        match mov {
            Move::Stack { from, to, count } => self.board.transfer(from, to, count)?,
            Move::Reserve { to } => {
                self.players[side.index()].decrement_reserve()?;
                self.board
                    .stack_mut(to)
                    .ok_or(EngineFault::MissingCell(to))?
                    .push_top(side);
            }
        }
        self.resolve_overflow(side, mov.to())?;

        let mover = &self.players[side.index()];
        if mover.captured() >= WIN_CAPTURES {
            info!("{} wins with {} captures", mover.name(), mover.captured());
            self.turn = Some(side);
            self.winner = Some(side);
            return Ok(MoveOutcome::Won {
                winner: mover.name().to_string(),
            });
        }

        self.turn = Some(side.opponent());
        Ok(MoveOutcome::Moved)
    }

    /// Trim the stack at `at` from the bottom down to the height limit.
    ///
    /// The mover's own pieces go to their reserve; opposing pieces are
    /// captured by the mover.
    fn resolve_overflow(&mut self, side: Side, at: Coord) -> Result<(), EngineFault> {
        let stack = self.board.stack_mut(at).ok_or(EngineFault::MissingCell(at))?;
        let mover = &mut self.players[side.index()];
        while stack.len() > MAX_STACK_HEIGHT {
            let piece = stack.pop_bottom()?;
            if piece == side {
                mover.increment_reserve();
                trace!("{}: own piece at {} returns to reserve", mover.name(), at);
            } else {
                mover.increment_captured();
                trace!("{}: captures a piece at {}", mover.name(), at);
            }
        }
        Ok(())
    }

    // ========== Move Generation ==========

    /// Every move `player` could legally make right now.
    ///
    /// Empty when the name is unknown, the game is over, or it is the other
    /// player's turn.
    pub fn legal_moves(&self, player: &str) -> Vec<Move> {
        let Some(side) = self.side_of(player) else {
            return Vec::new();
        };
        if self.winner.is_some() || self.turn.is_some_and(|turn| turn != side) {
            return Vec::new();
        }

        let mut moves = Vec::with_capacity(64);
        for (from, stack) in self.board.controlled_by(side) {
            for count in 1..=stack.len() {
                for to in line_targets(from, count) {
                    moves.push(Move::Stack { from, to, count });
                }
            }
        }
        if self.player_at(side).reserve() > 0 {
            moves.extend(Coord::all().map(|to| Move::Reserve { to }));
        }
        moves
    }
}

impl Default for FocusGame {
    fn default() -> Self {
        FocusGame::from_parts(&GameConfig::default(), Board::new())
    }
}

/// On-board cells exactly `count` steps from `from` in each direction.
fn line_targets(from: Coord, count: usize) -> impl Iterator<Item = Coord> {
    let step = count as i32;
    let (row, col) = (from.row as i32, from.col as i32);
    [
        (row - step, col),
        (row + step, col),
        (row, col - step),
        (row, col + step),
    ]
    .into_iter()
    .filter_map(|(r, c)| {
        let coord = Coord::new(u8::try_from(r).ok()?, u8::try_from(c).ok()?);
        coord.is_valid().then_some(coord)
    })
}
