//! Wire shapes of the lookup API, and failure classification.

use serde::Deserialize;
use thiserror::Error;

use crate::core::entity::{TypedEntity, UdtQueryResult};
use crate::core::error::{EntityGuess, SearchError};

/// Error code the service attaches to 404 responses for addresses it
/// refuses to validate.
pub const NOT_FOUND_ADDRESS_CODE: i64 = 1010;

/// Envelope around a single resolved entity.
#[derive(Debug, Deserialize)]
pub(crate) struct EntityPayload {
    pub data: TypedEntity,
}

/// Envelope around name-query records.
#[derive(Debug, Deserialize)]
pub(crate) struct NameQueryPayload {
    #[serde(default)]
    pub data: Vec<NameQueryRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NameQueryRecord {
    pub attributes: UdtQueryResult,
}

/// One error object from the service's error payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    pub code: i64,
}

/// A non-success HTTP response: status plus whatever error objects the
/// body carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub status: u16,
    pub errors: Vec<ApiError>,
}

impl ErrorEnvelope {
    pub fn has_code(&self, code: i64) -> bool {
        self.errors.iter().any(|err| err.code == code)
    }
}

/// How a fetch failed, before domain classification.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("service returned status {}", .0.status)]
    Http(ErrorEnvelope),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("undecodable response: {0}")]
    Decode(String),
}

/// Collapse a fetch failure into the search error taxonomy.
///
/// A 404 carrying the address-not-found code is promoted to
/// `NotFound(Address)`: upstream validation rejects many addresses the
/// address view can still render, so the caller navigates there anyway.
pub fn classify_failure(err: FetchError) -> SearchError {
    match err {
        FetchError::Http(envelope)
            if envelope.status == 404 && envelope.has_code(NOT_FOUND_ADDRESS_CODE) =>
        {
            SearchError::NotFound(EntityGuess::Address)
        }
        FetchError::Http(envelope) => SearchError::Unknown(format!("status {}", envelope.status)),
        FetchError::Transport(message) => SearchError::Network(message),
        FetchError::Decode(message) => SearchError::Unknown(message),
    }
}
