//! Failure taxonomy for a single resolution attempt.

use thiserror::Error;

/// Best guess at what a not-found query was meant to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityGuess {
    Address,
}

/// Why a resolution attempt failed. Created per attempt, consumed by the
/// router, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Rejected before any network call: empty, or disallowed characters.
    #[error("query is malformed")]
    Malformed,

    /// Address prefix belongs to the other network.
    #[error("address belongs to the other network")]
    ChainMismatch,

    /// The service answered 404 but the query likely still names an
    /// entity of the guessed kind.
    #[error("no matching entity found")]
    NotFound(EntityGuess),

    /// Transport-level failure, no usable response.
    #[error("network failure: {0}")]
    Network(String),

    /// A response arrived but had an unexpected status or shape.
    #[error("unexpected response: {0}")]
    Unknown(String),
}
