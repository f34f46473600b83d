//! Seats and per-player counters.

use serde::{Deserialize, Serialize};

use crate::error::EngineFault;

/// Which of the two seats a piece or player belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    One = 0,
    Two = 1,
}

impl Side {
    /// Get the opposing side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Slot index (0 or 1).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Both sides, seat one first.
    pub fn all() -> impl Iterator<Item = Side> {
        [Side::One, Side::Two].into_iter()
    }
}

/// A player's identity and piece counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: String,
    reserve: u8,
    captured: u8,
}

impl Player {
    /// New player with empty reserve and no captures.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            color: color.into(),
            reserve: 0,
            captured: 0,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Own pieces waiting to re-enter the board.
    #[inline]
    pub fn reserve(&self) -> u8 {
        self.reserve
    }

    /// Opponent pieces removed from play by this player.
    #[inline]
    pub fn captured(&self) -> u8 {
        self.captured
    }

    pub fn increment_reserve(&mut self) {
        self.reserve += 1;
    }

    /// Take one piece out of the reserve.
    pub fn decrement_reserve(&mut self) -> Result<(), EngineFault> {
        self.reserve = self
            .reserve
            .checked_sub(1)
            .ok_or(EngineFault::ReserveUnderflow)?;
        Ok(())
    }

    pub fn increment_captured(&mut self) {
        self.captured += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::One.opponent(), Side::Two);
        assert_eq!(Side::Two.opponent(), Side::One);
    }

    #[test]
    fn test_side_index() {
        let indices: Vec<usize> = Side::all().map(Side::index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_new_player_counters() {
        let player = Player::new("PlayerA", "R");
        assert_eq!(player.name(), "PlayerA");
        assert_eq!(player.color(), "R");
        assert_eq!(player.reserve(), 0);
        assert_eq!(player.captured(), 0);
    }

    #[test]
    fn test_reserve_counting() {
        let mut player = Player::new("PlayerA", "R");
        player.increment_reserve();
        player.increment_reserve();
        assert_eq!(player.reserve(), 2);

        assert_eq!(player.decrement_reserve(), Ok(()));
        assert_eq!(player.reserve(), 1);
    }

    #[test]
    fn test_reserve_underflow() {
        let mut player = Player::new("PlayerB", "G");
        assert_eq!(player.decrement_reserve(), Err(EngineFault::ReserveUnderflow));
        assert_eq!(player.reserve(), 0);
    }

    #[test]
    fn test_captured_counting() {
        let mut player = Player::new("PlayerB", "G");
        for _ in 0..6 {
            player.increment_captured();
        }
        assert_eq!(player.captured(), 6);
    }
}
