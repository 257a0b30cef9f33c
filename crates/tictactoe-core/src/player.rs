//! Player identities and markers.
//!
//! This module contains:
//! - The two markers and the color hint each one maps to
//! - The immutable `Player` record
//! - `PlayerSlot`, used to refer to player one or player two

use serde::{Deserialize, Serialize};

/// Name given to the automated opponent
pub const AUTOMATED_OPPONENT_NAME: &str = "Computer";

/// Fallback names for players that were started without one
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";

/// Symbol a player places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// Color hint the boundary should use when this marker wins
    pub fn win_hint(&self) -> ColorHint {
        match self {
            Marker::X => ColorHint::WinX,
            Marker::O => ColorHint::WinO,
        }
    }
}

/// Color hint attached to the game-over signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorHint {
    /// Warm red, X won
    WinX,
    /// Cool green, O won
    WinO,
    /// Neutral blue, nobody won
    Tie,
}

impl ColorHint {
    /// Get hex color code for rendering
    pub fn hex_code(&self) -> u32 {
        match self {
            ColorHint::WinX => 0xE74C3C,
            ColorHint::WinO => 0x2ECC71,
            ColorHint::Tie => 0x3498DB,
        }
    }
}

/// One of the two seats in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// The seat that moves after this one
    pub fn other(&self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

/// A player for the duration of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }

    /// Create a player, using `fallback` when `name` is blank
    pub fn named_or(name: &str, fallback: &str, marker: Marker) -> Self {
        let name = name.trim();
        if name.is_empty() {
            Self::new(fallback, marker)
        } else {
            Self::new(name, marker)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_hints_follow_marker() {
        assert_eq!(Marker::X.win_hint(), ColorHint::WinX);
        assert_eq!(Marker::O.win_hint(), ColorHint::WinO);
        assert_eq!(ColorHint::WinX.hex_code(), 0xE74C3C);
        assert_eq!(ColorHint::Tie.hex_code(), 0x3498DB);
    }

    #[test]
    fn test_slot_alternates() {
        assert_eq!(PlayerSlot::One.other(), PlayerSlot::Two);
        assert_eq!(PlayerSlot::One.other().other(), PlayerSlot::One);
    }

    #[test]
    fn test_blank_names_fall_back() {
        let player = Player::named_or("   ", DEFAULT_PLAYER1_NAME, Marker::X);
        assert_eq!(player.name(), "Player 1");

        let player = Player::named_or(" Alice ", DEFAULT_PLAYER1_NAME, Marker::X);
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.marker(), Marker::X);
    }
}
