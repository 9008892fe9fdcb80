//! Query resolution engine for a CKB blockchain explorer.
//!
//! Turns free-form search input into a concrete navigation target:
//! classify the query shape, resolve it against the explorer lookup API,
//! and compute the destination view path. A debounced search-by-name
//! mode with last-request-wins discipline and a persisted mode
//! preference round out the engine.

pub mod config;
pub mod core;
pub mod infrastructure;
pub mod search_box;
pub mod store;

pub use crate::core::entity::{TypedEntity, UdtQueryResult};
pub use crate::core::error::{EntityGuess, SearchError};
pub use crate::core::mode::SearchMode;
pub use crate::core::query::{classify, normalize, NetworkType, QueryVerdict};
pub use crate::core::route::{destination_for, Destination, InputAction};
pub use crate::core::Navigator;
pub use crate::infrastructure::explorer::{
    classify_failure, ApiError, ErrorEnvelope, ExplorerApi, FetchError, HttpExplorerClient,
    NOT_FOUND_ADDRESS_CODE,
};
pub use crate::infrastructure::runtime::{
    resolve_identifier, SearchBridge, SearchCommand, SearchEvent, NAME_SEARCH_DEBOUNCE,
};
pub use crate::search_box::SearchBox;
pub use crate::store::{
    MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore, SEARCH_MODE_KEY,
};
