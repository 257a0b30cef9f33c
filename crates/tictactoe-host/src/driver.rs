//! The async loop that owns the table and runs opponent timers.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::protocol::{ClientMessage, ServerMessage};
use crate::table::{Dispatch, GameTable};
use tictactoe_core::{GameSession, MoveTicket};

/// Drives one session from a stream of client messages.
///
/// Everything runs on one task. A pending opponent move is a separate sleeping
/// task that posts its ticket back; it is aborted whenever a new game starts.
pub struct SessionDriver {
    table: GameTable,
    outbound: mpsc::UnboundedSender<ServerMessage>,
    wake_tx: mpsc::UnboundedSender<MoveTicket>,
    wake_rx: mpsc::UnboundedReceiver<MoveTicket>,
    pending: Option<JoinHandle<()>>,
}

impl SessionDriver {
    pub fn new(session: GameSession, outbound: mpsc::UnboundedSender<ServerMessage>) -> Self {
        let (wake_tx, wake_rx) = mpsc::unbounded_channel();
        Self {
            table: GameTable::new(session),
            outbound,
            wake_tx,
            wake_rx,
            pending: None,
        }
    }

    /// Process messages until the inbound channel closes
    pub async fn run(mut self, mut inbound: mpsc::UnboundedReceiver<ClientMessage>) {
        loop {
            tokio::select! {
                msg = inbound.recv() => match msg {
                    Some(msg) => self.handle_client(msg),
                    None => break,
                },
                Some(ticket) = self.wake_rx.recv() => self.handle_wakeup(ticket),
            }
        }

        self.cancel_pending();
        info!("Inbound channel closed, driver stopping");
    }

    fn handle_client(&mut self, msg: ClientMessage) {
        match msg {
            ClientMessage::Start { .. } => self.cancel_pending(),
            ClientMessage::ChooseCell { index } if self.opponent_to_move() => {
                debug!(index, "Cell choice dropped, opponent to move");
                return;
            }
            ClientMessage::ChooseCell { .. } => {}
        }
        let dispatch = self.table.handle(msg);
        debug!(
            generation = self.table.session().generation(),
            signals = dispatch.messages.len(),
            "Client message handled"
        );
        self.deliver(dispatch);
    }

    /// Whether the seat to move belongs to the automated opponent
    fn opponent_to_move(&self) -> bool {
        let session = self.table.session();
        session.is_automated(session.current_player())
    }

    fn handle_wakeup(&mut self, ticket: MoveTicket) {
        if self.pending.as_ref().is_some_and(|h| h.is_finished()) {
            self.pending = None;
        }
        let dispatch = self.table.redeem(ticket);
        self.deliver(dispatch);
    }

    fn deliver(&mut self, dispatch: Dispatch) {
        for msg in dispatch.messages {
            // The receiver only goes away on shutdown
            let _ = self.outbound.send(msg);
        }
        if let Some((ticket, delay)) = dispatch.scheduled {
            self.cancel_pending();
            let wake_tx = self.wake_tx.clone();
            self.pending = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = wake_tx.send(ticket);
            }));
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Aborting pending opponent move");
            handle.abort();
        }
    }
}
