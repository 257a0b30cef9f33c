//! WebAssembly bindings for the game engine.
//!
//! This module exposes the session to JavaScript through wasm-bindgen. The
//! page is expected to redeem `OpponentMoveScheduled` tickets itself, e.g.
//! with `setTimeout`.

use wasm_bindgen::prelude::*;

use crate::actions::{GameEvent, GameMode, MoveTicket};
use crate::game::GameSession;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn events_json(events: &[GameEvent]) -> String {
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}

/// WASM-exposed game wrapper
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            session: GameSession::new(),
        }
    }

    /// Start a game; `mode` is "human" or "vs-automated". Returns events JSON
    pub fn start(&mut self, name1: &str, name2: &str, mode: &str) -> Result<String, JsValue> {
        let mode: GameMode = mode
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        Ok(events_json(&self.session.start(name1, name2, mode)))
    }

    /// Place the current player's marker, returns events JSON
    #[wasm_bindgen(js_name = chooseCell)]
    pub fn choose_cell(&mut self, index: i32) -> String {
        events_json(&self.session.play_turn(index))
    }

    /// Redeem an opponent ticket from a previous `OpponentMoveScheduled` event
    #[wasm_bindgen(js_name = playAutomatedMove)]
    pub fn play_automated_move(&mut self, ticket_json: &str) -> Result<String, JsValue> {
        let ticket: MoveTicket = serde_json::from_str(ticket_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid ticket JSON: {}", e)))?;
        Ok(events_json(&self.session.play_automated_move(ticket)))
    }

    /// Get board cells as a JSON array
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(&self.session.board()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the whole session as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
