//! Entities the lookup service can resolve a query to.

use serde::Deserialize;

/// One resolved on-chain entity, discriminated by the service's `type`
/// field. Decoded once at the client boundary so nothing downstream
/// branches on raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "attributes", rename_all = "snake_case")]
pub enum TypedEntity {
    Block { block_hash: String },
    Transaction { transaction_hash: String },
    Address { address_hash: String },
    LockHash { lock_hash: String },
    /// The route for a UDT is built from the query itself, so no
    /// attributes are carried.
    Udt {},
}

/// One record in a search-by-name result set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UdtQueryResult {
    pub type_hash: String,
    pub symbol: Option<String>,
    pub full_name: Option<String>,
}
