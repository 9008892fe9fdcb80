//! Search bridge - connects the synchronous UI side with the async
//! search worker.
//!
//! The UI sends commands and polls events; the worker thread runs a
//! current-thread tokio runtime, so all of its mutation happens on one
//! thread and suspension only occurs at the remote-call boundary.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

use crate::core::entity::UdtQueryResult;
use crate::core::query::NetworkType;
use crate::core::route::InputAction;
use crate::infrastructure::explorer::ExplorerApi;
use crate::infrastructure::runtime::worker::run_search_worker;

/// Commands sent from the UI to the search worker
#[derive(Debug, Clone)]
pub enum SearchCommand {
    /// (Re)arm the debounced name lookup with the latest input
    NameQuery { text: String },
    /// Drop the pending name lookup and invalidate in-flight results
    CancelNameQuery,
    /// Resolve an identifier query and compute its destination
    Resolve { raw: String },
    /// Shut down the worker
    Shutdown,
}

/// Events sent from the search worker back to the UI
#[derive(Debug, Clone)]
pub enum SearchEvent {
    /// A remote call is in flight
    Loading,
    /// A destination was computed; navigate and apply the input action
    Navigated { path: String, input: InputAction },
    /// Fresh name-query results (empty means "no match")
    NameResults { results: Vec<UdtQueryResult> },
    /// A name lookup failed; displayed results stay as they are
    Error { message: String },
}

/// Bridge between the UI side and the async search worker
pub struct SearchBridge {
    cmd_tx: UnboundedSender<SearchCommand>,
    evt_rx: Receiver<SearchEvent>,
}

impl SearchBridge {
    /// Spawn the worker thread with its own current-thread runtime.
    pub fn new(
        api: Arc<dyn ExplorerApi>,
        network: NetworkType,
        debounce: Duration,
    ) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = unbounded_channel::<SearchCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<SearchEvent>();

        thread::Builder::new()
            .name("search-worker".to_string())
            .spawn(move || {
                let rt = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .expect("Failed to create search runtime");
                rt.block_on(run_search_worker(api, network, debounce, cmd_rx, evt_tx));
            })?;

        Ok(Self { cmd_tx, evt_rx })
    }

    /// Send a command to the worker
    pub fn send(&self, cmd: SearchCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Search worker channel closed"))
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<SearchEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

impl Drop for SearchBridge {
    fn drop(&mut self) {
        // Cancels the pending timer and discards in-flight results
        let _ = self.cmd_tx.send(SearchCommand::Shutdown);
    }
}
