//! The single game table the host serves.

use std::time::Duration;
use tictactoe_core::{GameAction, GameEvent, GameSession, MoveTicket};

use crate::protocol::{ClientMessage, ServerMessage};

/// What the host has to do after feeding the table one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Signals for the front end, in order
    pub messages: Vec<ServerMessage>,
    /// Opponent move to redeem after the delay
    pub scheduled: Option<(MoveTicket, Duration)>,
}

impl Dispatch {
    fn from_events(events: Vec<GameEvent>) -> Self {
        let mut dispatch = Dispatch::default();
        for event in &events {
            if let GameEvent::OpponentMoveScheduled { ticket, delay } = event {
                dispatch.scheduled = Some((*ticket, *delay));
            } else if event.is_boundary_signal() {
                dispatch.messages.extend(ServerMessage::from_event(event));
            }
        }
        dispatch
    }
}

/// Owns the session and translates between protocol and engine.
pub struct GameTable {
    session: GameSession,
}

impl GameTable {
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Apply a front-end message
    pub fn handle(&mut self, msg: ClientMessage) -> Dispatch {
        let events = self.session.apply_action(GameAction::from(msg));
        Dispatch::from_events(events)
    }

    /// Let the automated opponent move
    pub fn redeem(&mut self, ticket: MoveTicket) -> Dispatch {
        Dispatch::from_events(self.session.play_automated_move(ticket))
    }
}
