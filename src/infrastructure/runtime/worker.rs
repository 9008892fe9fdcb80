//! Async search worker - debounce, last-request-wins, and the
//! identifier resolution pipeline.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::core::entity::UdtQueryResult;
use crate::core::error::SearchError;
use crate::core::query::{classify, normalize, NetworkType, QueryVerdict};
use crate::core::route::{destination_for, Destination};
use crate::infrastructure::explorer::{classify_failure, ExplorerApi};
use crate::infrastructure::runtime::bridge::{SearchCommand, SearchEvent};

/// Run the search worker loop.
pub(crate) async fn run_search_worker(
    api: Arc<dyn ExplorerApi>,
    network: NetworkType,
    debounce: Duration,
    mut cmd_rx: UnboundedReceiver<SearchCommand>,
    evt_tx: Sender<SearchEvent>,
) {
    // The one pending debounced name query, armed to fire at `deadline`.
    // Re-arming replaces both within a single loop iteration, so there is
    // no window where two timers are live.
    let mut pending: Option<String> = None;
    let mut deadline = Instant::now();

    // Monotone request stamp. Every name-query command bumps it, so a
    // response is applied only if nothing newer was issued meanwhile.
    let mut seq: u64 = 0;

    // Completed name fetches come back here, stamped with the sequence
    // number they were fired at.
    let (fetch_tx, mut fetch_rx) =
        unbounded_channel::<(u64, Result<Vec<UdtQueryResult>, SearchError>)>();

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => match cmd {
                None | Some(SearchCommand::Shutdown) => {
                    debug!("search worker shutting down");
                    return;
                }
                Some(SearchCommand::NameQuery { text }) => {
                    seq += 1;
                    pending = Some(text);
                    deadline = Instant::now() + debounce;
                }
                Some(SearchCommand::CancelNameQuery) => {
                    seq += 1;
                    pending = None;
                }
                Some(SearchCommand::Resolve { raw }) => {
                    let _ = evt_tx.send(SearchEvent::Loading);
                    let destination = resolve_identifier(api.as_ref(), network, &raw).await;
                    let _ = evt_tx.send(SearchEvent::Navigated {
                        path: destination.path,
                        input: destination.input,
                    });
                }
            },

            _ = tokio::time::sleep_until(deadline), if pending.is_some() => {
                if let Some(text) = pending.take() {
                    let fired_seq = seq;
                    debug!(query = %text, seq = fired_seq, "name lookup fired");
                    let _ = evt_tx.send(SearchEvent::Loading);

                    let api = Arc::clone(&api);
                    let fetch_tx = fetch_tx.clone();
                    tokio::spawn(async move {
                        let result = api.fetch_by_name(&text).await.map_err(classify_failure);
                        let _ = fetch_tx.send((fired_seq, result));
                    });
                }
            }

            Some((fired_seq, result)) = fetch_rx.recv() => {
                if fired_seq != seq {
                    debug!(seq = fired_seq, latest = seq, "discarding stale name results");
                    continue;
                }
                match result {
                    Ok(results) => {
                        let _ = evt_tx.send(SearchEvent::NameResults { results });
                    }
                    Err(err) => {
                        warn!(%err, "name lookup failed");
                        let _ = evt_tx.send(SearchEvent::Error {
                            message: err.to_string(),
                        });
                    }
                }
            }
        }
    }
}

/// Normalize, classify, resolve, and route one identifier query as a
/// single linear pipeline. Malformed and chain-mismatch queries are
/// routed without touching the network.
pub async fn resolve_identifier(
    api: &dyn ExplorerApi,
    network: NetworkType,
    raw: &str,
) -> Destination {
    let query = normalize(raw);
    let forwarded = match classify(&query, network) {
        QueryVerdict::Malformed => {
            debug!(%query, "query rejected as malformed");
            return destination_for(&Err(SearchError::Malformed), &query);
        }
        QueryVerdict::ChainMismatch => {
            debug!(%query, "query rejected as chain mismatch");
            return destination_for(&Err(SearchError::ChainMismatch), &query);
        }
        QueryVerdict::Valid(forwarded) => forwarded,
    };

    let outcome = api.fetch_by_id(&forwarded).await.map_err(classify_failure);
    if let Err(err) = &outcome {
        warn!(%err, %query, "identifier lookup failed");
    }
    destination_for(&outcome, &query)
}
