//! Maps resolution outcomes to destination view paths.

use crate::core::entity::TypedEntity;
use crate::core::error::{EntityGuess, SearchError};

/// What happens to the input field once a destination is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Clear and blur; the query reached its destination.
    Clear,
    /// Put the query back so the user can edit and resubmit.
    Restore(String),
}

/// A computed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub path: String,
    pub input: InputAction,
}

impl Destination {
    fn found(path: String) -> Self {
        Self {
            path,
            input: InputAction::Clear,
        }
    }

    fn failed(path: String, query: &str) -> Self {
        Self {
            path,
            input: InputAction::Restore(query.to_string()),
        }
    }
}

/// Route one resolution outcome. `query` is the normalized string the
/// attempt was made with.
pub fn destination_for(outcome: &Result<TypedEntity, SearchError>, query: &str) -> Destination {
    match outcome {
        Ok(TypedEntity::Block { block_hash }) => Destination::found(format!("/block/{block_hash}")),
        Ok(TypedEntity::Transaction { transaction_hash }) => {
            Destination::found(format!("/transaction/{transaction_hash}"))
        }
        Ok(TypedEntity::Address { address_hash }) => {
            Destination::found(format!("/address/{address_hash}"))
        }
        // A lock hash resolves to the same view as its address.
        Ok(TypedEntity::LockHash { lock_hash }) => {
            Destination::found(format!("/address/{lock_hash}"))
        }
        Ok(TypedEntity::Udt {}) => Destination::found(format!("/sudt/{query}")),
        // Upstream validation 404s plenty of addresses the address view
        // can still render; navigate there anyway.
        Err(SearchError::NotFound(EntityGuess::Address)) => {
            Destination::found(format!("/address/{query}"))
        }
        Err(SearchError::ChainMismatch) => {
            Destination::failed(format!("/search/fail?type=chain_error&q={query}"), query)
        }
        Err(SearchError::Malformed | SearchError::Network(_) | SearchError::Unknown(_)) => {
            Destination::failed(format!("/search/fail?q={query}"), query)
        }
    }
}
