//! Core game state machine.
//!
//! `GameSession` owns the board, the two players and the turn order. All
//! inputs come in as commands and everything the boundary needs to know comes
//! back as a list of [`GameEvent`]s. Invalid input yields an empty list.

use crate::actions::{GameAction, GameEvent, GameMode, MoveTicket};
use crate::board::{Board, BoardState};
use crate::bot::Bot;
use crate::player::{
    ColorHint, Marker, Player, PlayerSlot, AUTOMATED_OPPONENT_NAME, DEFAULT_PLAYER1_NAME,
    DEFAULT_PLAYER2_NAME,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Pause before the automated opponent moves
pub const DEFAULT_OPPONENT_DELAY: Duration = Duration::from_millis(500);

/// Message sent when the board fills up without a winner
pub const TIE_MESSAGE: &str = "It's a tie!";

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No game has been started yet
    #[default]
    Uninitialized,
    /// Moves are being accepted
    InProgress,
    /// The given player completed a triple
    Won(PlayerSlot),
    /// The board filled up with no triple
    Tied,
}

impl GameStatus {
    /// Whether the game has reached a terminal state
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Tied)
    }
}

/// The two players of a started game
#[derive(Debug, Clone)]
struct Roster {
    player1: Player,
    player2: Player,
    mode: GameMode,
}

/// Serializable view of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: Board,
    pub players: Vec<Player>,
    pub current_player: PlayerSlot,
    pub mode: GameMode,
    pub status: GameStatus,
    pub generation: u64,
}

/// A game of tic-tac-toe and its controller
#[derive(Debug, Clone)]
pub struct GameSession {
    board: BoardState,
    roster: Option<Roster>,
    current_player: PlayerSlot,
    status: GameStatus,
    /// Bumped on every start; tags opponent move tickets
    generation: u64,
    opponent: Bot,
    opponent_delay: Duration,
}

impl GameSession {
    /// Create an uninitialized session with an entropy-seeded opponent
    pub fn new() -> Self {
        Self::with_bot(Bot::new())
    }

    /// Create a session whose opponent moves are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_bot(Bot::with_seed(seed))
    }

    fn with_bot(opponent: Bot) -> Self {
        Self {
            board: BoardState::new(),
            roster: None,
            current_player: PlayerSlot::One,
            status: GameStatus::Uninitialized,
            generation: 0,
            opponent,
            opponent_delay: DEFAULT_OPPONENT_DELAY,
        }
    }

    /// Override the pause before opponent moves
    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }

    /// Current cells
    pub fn board(&self) -> Board {
        self.board.get()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> PlayerSlot {
        self.current_player
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn opponent_delay(&self) -> Duration {
        self.opponent_delay
    }

    /// Mode of the running game, `None` before the first start
    pub fn mode(&self) -> Option<GameMode> {
        self.roster.as_ref().map(|r| r.mode)
    }

    /// Get a player by seat
    pub fn player(&self, slot: PlayerSlot) -> Option<&Player> {
        self.roster.as_ref().map(|r| match slot {
            PlayerSlot::One => &r.player1,
            PlayerSlot::Two => &r.player2,
        })
    }

    /// Check if the game is finished
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Get the winner if the game is finished
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(slot) => self.player(slot),
            _ => None,
        }
    }

    /// Whether the seat is played by the automated opponent
    pub fn is_automated(&self, slot: PlayerSlot) -> bool {
        self.mode() == Some(GameMode::AgainstAutomatedOpponent) && slot == PlayerSlot::Two
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.get(),
            players: self
                .roster
                .as_ref()
                .map(|r| vec![r.player1.clone(), r.player2.clone()])
                .unwrap_or_default(),
            current_player: self.current_player,
            mode: self.mode().unwrap_or_default(),
            status: self.status,
            generation: self.generation,
        }
    }

    /// Dispatch a boundary command
    pub fn apply_action(&mut self, action: GameAction) -> Vec<GameEvent> {
        match action {
            GameAction::Start {
                player1_name,
                player2_name,
                mode,
            } => self.start(&player1_name, &player2_name, mode),
            GameAction::ChooseCell(index) => self.play_turn(index),
        }
    }

    /// Begin a new game, discarding whatever was in progress
    pub fn start(&mut self, name1: &str, name2: &str, mode: GameMode) -> Vec<GameEvent> {
        self.board.reset();

        let player1 = Player::named_or(name1, DEFAULT_PLAYER1_NAME, Marker::X);
        let player2 = match mode {
            GameMode::AgainstAutomatedOpponent => Player::new(AUTOMATED_OPPONENT_NAME, Marker::O),
            GameMode::Human => Player::named_or(name2, DEFAULT_PLAYER2_NAME, Marker::O),
        };

        self.roster = Some(Roster {
            player1,
            player2,
            mode,
        });
        self.current_player = PlayerSlot::One;
        self.status = GameStatus::InProgress;
        self.generation += 1;

        debug!(generation = self.generation, %mode, "game started");

        vec![
            GameEvent::BoardChanged {
                board: self.board.get(),
            },
            GameEvent::Cleared,
        ]
    }

    /// Place the current player's marker at `index`.
    ///
    /// Returns no events if the game is not in progress or the placement
    /// is refused.
    pub fn play_turn(&mut self, index: i32) -> Vec<GameEvent> {
        if self.status != GameStatus::InProgress {
            debug!(index, status = ?self.status, "move ignored, game not in progress");
            return Vec::new();
        }

        let (name, marker) = match self.player(self.current_player) {
            Some(p) => (p.name().to_string(), p.marker()),
            None => return Vec::new(),
        };

        if let Err(reason) = self.board.try_place(index, marker) {
            debug!(index, %reason, "move ignored");
            return Vec::new();
        }

        let mut events = vec![GameEvent::BoardChanged {
            board: self.board.get(),
        }];

        if self.board.winning_line().is_some() {
            self.status = GameStatus::Won(self.current_player);
            events.push(GameEvent::GameEnded {
                message: format!("{} wins!", name),
                color_hint: marker.win_hint(),
            });
            return events;
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            events.push(GameEvent::GameEnded {
                message: TIE_MESSAGE.to_string(),
                color_hint: ColorHint::Tie,
            });
            return events;
        }

        self.current_player = self.current_player.other();
        events.push(GameEvent::TurnPassed {
            next_player: self.current_player,
        });

        if self.is_automated(self.current_player) {
            let ticket = MoveTicket {
                generation: self.generation,
            };
            debug!(generation = ticket.generation, delay = ?self.opponent_delay, "opponent move scheduled");
            events.push(GameEvent::OpponentMoveScheduled {
                ticket,
                delay: self.opponent_delay,
            });
        }

        events
    }

    /// Let the automated opponent take the move it was promised.
    ///
    /// Tickets from another generation, or presented when it is not the
    /// opponent's turn, are ignored.
    pub fn play_automated_move(&mut self, ticket: MoveTicket) -> Vec<GameEvent> {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "stale opponent move dropped"
            );
            return Vec::new();
        }
        if self.status != GameStatus::InProgress || !self.is_automated(self.current_player) {
            return Vec::new();
        }

        match self.opponent.choose_move(&self.board.get()) {
            Some(index) => self.play_turn(index as i32),
            None => Vec::new(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
