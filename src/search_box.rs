//! The search input control exposed to the presentational layer.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::warn;

use crate::core::entity::UdtQueryResult;
use crate::core::mode::SearchMode;
use crate::core::query::NetworkType;
use crate::core::route::InputAction;
use crate::core::Navigator;
use crate::infrastructure::explorer::ExplorerApi;
use crate::infrastructure::runtime::{SearchBridge, SearchCommand, SearchEvent};
use crate::store::{PreferenceStore, SEARCH_MODE_KEY};

/// Search input control: owns the query text, the mode toggle, and the
/// visible name-query results.
///
/// The presentational layer forwards keystrokes to `handle_input`,
/// submits with `handle_submit`, flips modes with `toggle_mode`, and
/// drains worker events each frame with `pump`.
pub struct SearchBox {
    bridge: SearchBridge,
    store: Box<dyn PreferenceStore>,
    mode: SearchMode,
    value: String,
    name_results: Option<Vec<UdtQueryResult>>,
    loading: bool,
    focused: bool,
}

impl SearchBox {
    pub fn new(
        api: Arc<dyn ExplorerApi>,
        network: NetworkType,
        store: Box<dyn PreferenceStore>,
        debounce: Duration,
    ) -> Result<Self> {
        let stored = store.get(SEARCH_MODE_KEY).unwrap_or_else(|err| {
            warn!(%err, "preference store unreadable");
            None
        });
        let mode = SearchMode::from_stored(stored.as_deref());
        let bridge = SearchBridge::new(api, network, debounce)?;

        Ok(Self {
            bridge,
            store,
            mode,
            value: String::new(),
            name_results: None,
            loading: false,
            focused: true,
        })
    }

    /// The user edited the input field.
    pub fn handle_input(&mut self, text: &str) {
        self.value = text.to_string();
        self.focused = true;

        if self.mode != SearchMode::ByName {
            return;
        }
        if self.value.is_empty() {
            self.name_results = None;
            self.loading = false;
            let _ = self.bridge.send(SearchCommand::CancelNameQuery);
        } else {
            let _ = self.bridge.send(SearchCommand::NameQuery {
                text: self.value.clone(),
            });
        }
    }

    /// Explicit submit (Enter, or the search button).
    pub fn handle_submit(&mut self) {
        match self.mode {
            SearchMode::ByIdentifier => {
                let _ = self.bridge.send(SearchCommand::Resolve {
                    raw: self.value.clone(),
                });
            }
            // Submit in name mode just re-arms the debounced lookup.
            SearchMode::ByName => {
                if !self.value.is_empty() {
                    let _ = self.bridge.send(SearchCommand::NameQuery {
                        text: self.value.clone(),
                    });
                }
            }
        }
    }

    /// Flip between identifier and name search. Always drops the
    /// displayed name results.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        if let Err(err) = self.store.set(SEARCH_MODE_KEY, self.mode.as_str()) {
            warn!(%err, "failed to persist search mode");
        }
        self.name_results = None;
        self.loading = false;
        let _ = self.bridge.send(SearchCommand::CancelNameQuery);
    }

    /// Drain worker events and apply them; computed destinations
    /// navigate through `nav`.
    pub fn pump(&mut self, nav: &mut dyn Navigator) {
        for event in self.bridge.poll_events() {
            match event {
                SearchEvent::Loading => self.loading = true,
                SearchEvent::Navigated { path, input } => {
                    self.loading = false;
                    match input {
                        InputAction::Clear => {
                            self.value.clear();
                            self.focused = false;
                        }
                        InputAction::Restore(query) => self.value = query,
                    }
                    nav.navigate(&path);
                }
                SearchEvent::NameResults { results } => {
                    self.loading = false;
                    self.name_results = Some(results);
                }
                SearchEvent::Error { message } => {
                    self.loading = false;
                    warn!(%message, "search worker error");
                }
            }
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// `None` until a name search has completed; `Some(&[])` is a valid
    /// "no match" result.
    pub fn name_results(&self) -> Option<&[UdtQueryResult]> {
        self.name_results.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}
