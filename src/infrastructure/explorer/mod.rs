//! Resolution client for the explorer lookup API.

mod client;
mod types;

pub use client::{ExplorerApi, HttpExplorerClient};
pub use types::{classify_failure, ApiError, ErrorEnvelope, FetchError, NOT_FOUND_ADDRESS_CODE};
