//! Tic-tac-toe rules engine
//!
//! This crate provides the core game logic, including:
//! - The 3x3 board and its single write operation
//! - Player identities and markers
//! - The session state machine with win and tie detection
//! - A uniformly random automated opponent
//!
//! # Architecture
//!
//! The engine never touches a presentation layer. Callers send commands
//! ([`GameAction`]) and receive [`GameEvent`]s describing what changed. The
//! automated opponent's move is returned as a [`MoveTicket`] the caller
//! redeems after a delay; tickets from a previous game are refused.
//!
//! It can be compiled to:
//! - Native Rust for the headless host
//! - WebAssembly for a browser front end
//!
//! # Modules
//!
//! - [`board`]: Grid contents and win lines
//! - [`player`]: Players, markers and color hints
//! - [`actions`]: Commands and events
//! - [`bot`]: The automated opponent
//! - [`game`]: Game state machine

pub mod actions;
pub mod board;
pub mod bot;
pub mod game;
pub mod player;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent, GameMode, MoveTicket, ParseModeError};
pub use board::{Board, BoardState, Cell, MoveRejection, CELL_COUNT, WINNING_LINES};
pub use bot::Bot;
pub use game::{GameSession, GameStatus, SessionSnapshot, DEFAULT_OPPONENT_DELAY, TIE_MESSAGE};
pub use player::{ColorHint, Marker, Player, PlayerSlot};
