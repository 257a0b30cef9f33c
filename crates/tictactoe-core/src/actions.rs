//! Commands the boundary sends in and events the session sends out.

use crate::board::Board;
use crate::player::{ColorHint, PlayerSlot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How the second seat is played
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board
    #[default]
    #[serde(rename = "human", alias = "pvp")]
    Human,
    /// Player two is the automated opponent
    #[serde(rename = "vs-automated", alias = "pvc")]
    AgainstAutomatedOpponent,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Human => "human",
            GameMode::AgainstAutomatedOpponent => "vs-automated",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown game mode string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown game mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" | "pvp" => Ok(GameMode::Human),
            "vs-automated" | "pvc" => Ok(GameMode::AgainstAutomatedOpponent),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Commands accepted from the boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Start (or restart) a game
    Start {
        player1_name: String,
        player2_name: String,
        mode: GameMode,
    },
    /// Place the current player's marker
    ChooseCell(i32),
}

/// Permission for the automated opponent to move in one particular session.
///
/// Tickets from an earlier `start` are refused by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveTicket {
    pub generation: u64,
}

/// Events produced by the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The board changed (always carries the full grid)
    BoardChanged { board: Board },

    /// The status text should be cleared
    Cleared,

    /// Someone won or the board filled up
    GameEnded {
        message: String,
        color_hint: ColorHint,
    },

    /// The turn passed to the other seat
    TurnPassed { next_player: PlayerSlot },

    /// The automated opponent should move after `delay`
    OpponentMoveScheduled { ticket: MoveTicket, delay: Duration },
}

impl GameEvent {
    /// Whether the event is one of the signals meant for the presentation layer
    pub fn is_boundary_signal(&self) -> bool {
        matches!(
            self,
            GameEvent::BoardChanged { .. } | GameEvent::Cleared | GameEvent::GameEnded { .. }
        )
    }
}
