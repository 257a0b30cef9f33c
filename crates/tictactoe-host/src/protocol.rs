//! JSON messages exchanged with the presentation layer.

use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, ColorHint, GameAction, GameEvent, GameMode};

/// Messages sent from the front end to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    /// Start a new game, replacing any game in progress
    Start {
        #[serde(default)]
        player1_name: String,
        #[serde(default)]
        player2_name: String,
        #[serde(default)]
        mode: GameMode,
    },

    /// The user picked a cell
    ChooseCell { index: i32 },
}

impl From<ClientMessage> for GameAction {
    fn from(msg: ClientMessage) -> Self {
        match msg {
            ClientMessage::Start {
                player1_name,
                player2_name,
                mode,
            } => GameAction::Start {
                player1_name,
                player2_name,
                mode,
            },
            ClientMessage::ChooseCell { index } => GameAction::ChooseCell(index),
        }
    }
}

/// Messages sent from the host to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerMessage {
    /// Redraw the grid
    BoardChanged { board: Board },

    /// Show the result
    GameEnded {
        message: String,
        color_hint: ColorHint,
    },

    /// Clear the status line
    Cleared,
}

impl ServerMessage {
    /// Translate a session event, `None` for events the front end never sees
    pub fn from_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BoardChanged { board } => Some(ServerMessage::BoardChanged { board: *board }),
            GameEvent::GameEnded {
                message,
                color_hint,
            } => Some(ServerMessage::GameEnded {
                message: message.clone(),
                color_hint: *color_hint,
            }),
            GameEvent::Cleared => Some(ServerMessage::Cleared),
            GameEvent::TurnPassed { .. } | GameEvent::OpponentMoveScheduled { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tictactoe_core::{Cell, PlayerSlot};

    #[test]
    fn test_parse_start() {
        let json = r#"{"type":"Start","payload":{"player1_name":"Alice","player2_name":"","mode":"vs-automated"}}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Start {
                player1_name: "Alice".into(),
                player2_name: "".into(),
                mode: GameMode::AgainstAutomatedOpponent,
            }
        );
    }

    #[test]
    fn test_parse_start_defaults() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"Start","payload":{}}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Start { mode: GameMode::Human, .. }));
    }

    #[test]
    fn test_parse_choose_cell() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"ChooseCell","payload":{"index":-1}}"#).unwrap();
        assert_eq!(msg, ClientMessage::ChooseCell { index: -1 });
        assert_eq!(GameAction::from(msg), GameAction::ChooseCell(-1));
    }

    #[test]
    fn test_serialize_signals() {
        let mut board = [Cell::Empty; 9];
        board[4] = Cell::MarkerX;
        let json = serde_json::to_string(&ServerMessage::BoardChanged { board }).unwrap();
        assert_eq!(
            json,
            r#"{"type":"BoardChanged","payload":{"board":["","","","","X","","","",""]}}"#
        );

        let json = serde_json::to_string(&ServerMessage::Cleared).unwrap();
        assert_eq!(json, r#"{"type":"Cleared"}"#);
    }

    #[test]
    fn test_internal_events_are_filtered() {
        let event = GameEvent::TurnPassed {
            next_player: PlayerSlot::Two,
        };
        assert_eq!(ServerMessage::from_event(&event), None);
        assert_eq!(
            ServerMessage::from_event(&GameEvent::Cleared),
            Some(ServerMessage::Cleared)
        );
    }
}
