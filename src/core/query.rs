//! Input normalization and query shape classification.
//!
//! Both checks are cheap and synchronous, so a query the lookup service
//! could never resolve is rejected without a round trip.

use serde::Deserialize;

/// Which CKB network the explorer is deployed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    Mainnet,
    Testnet,
}

impl NetworkType {
    /// Bech32 prefix of addresses on this network.
    pub fn address_prefix(self) -> &'static str {
        match self {
            NetworkType::Mainnet => "ckb",
            NetworkType::Testnet => "ckt",
        }
    }

    /// Address prefix that marks the opposite network.
    pub fn foreign_prefix(self) -> &'static str {
        match self {
            NetworkType::Mainnet => "ckt",
            NetworkType::Testnet => "ckb",
        }
    }

    /// Public lookup API endpoint for this network.
    pub fn default_api_url(self) -> &'static str {
        match self {
            NetworkType::Mainnet => "https://mainnet-api.explorer.nervos.org/api",
            NetworkType::Testnet => "https://testnet-api.explorer.nervos.org/api",
        }
    }
}

/// Trim surrounding whitespace and strip commas (users paste
/// thousands-separated block numbers).
pub fn normalize(raw: &str) -> String {
    raw.trim().replace(',', "")
}

/// Identifier queries are hex hashes or bech32 addresses; anything
/// outside ASCII alphanumerics can never resolve.
pub fn contains_special_char(query: &str) -> bool {
    query.chars().any(|ch| !ch.is_ascii_alphanumeric())
}

/// An address-like string whose prefix names the other network.
pub fn is_chain_type_mismatch(query: &str, network: NetworkType) -> bool {
    query.starts_with(network.foreign_prefix())
}

/// The lookup service only accepts `0x`-prefixed hashes; users routinely
/// paste the bare 64 hex digits.
pub fn add_prefix_for_hash(query: &str) -> String {
    let bare_hash = query.len() == 64 && query.chars().all(|ch| ch.is_ascii_hexdigit());
    if bare_hash {
        format!("0x{query}")
    } else {
        query.to_string()
    }
}

/// Outcome of classifying a normalized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryVerdict {
    /// Forward this string to the resolution client.
    Valid(String),
    /// Empty, or contains characters no identifier can carry.
    Malformed,
    /// Address prefix of the opposite network; resolvable nowhere.
    ChainMismatch,
}

/// Decide whether a normalized query is worth a network call.
pub fn classify(normalized: &str, network: NetworkType) -> QueryVerdict {
    if normalized.is_empty() || contains_special_char(normalized) {
        return QueryVerdict::Malformed;
    }
    if is_chain_type_mismatch(normalized, network) {
        return QueryVerdict::ChainMismatch;
    }
    QueryVerdict::Valid(add_prefix_for_hash(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TX_HASH: &str = "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2";

    #[test]
    fn test_normalize_trims_and_strips_commas() {
        assert_eq!(normalize("  12,345,678  "), "12345678");
        assert_eq!(normalize("\t0xabc \n"), "0xabc");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_special_chars_are_malformed() {
        assert_eq!(classify("abc$def", NetworkType::Mainnet), QueryVerdict::Malformed);
        assert_eq!(classify("0x12..34", NetworkType::Mainnet), QueryVerdict::Malformed);
        assert_eq!(classify("with space", NetworkType::Mainnet), QueryVerdict::Malformed);
    }

    #[test]
    fn test_empty_query_is_malformed() {
        assert_eq!(classify("", NetworkType::Mainnet), QueryVerdict::Malformed);
    }

    #[test]
    fn test_chain_type_mismatch_both_directions() {
        let testnet_addr = "ckt1qyqd5eyygtdmwdr7ge736zw6z0ju6wsw7rssu8fcve";
        let mainnet_addr = "ckb1qyqd5eyygtdmwdr7ge736zw6z0ju6wsw7rssu8fcve";

        assert_eq!(
            classify(testnet_addr, NetworkType::Mainnet),
            QueryVerdict::ChainMismatch
        );
        assert_eq!(
            classify(mainnet_addr, NetworkType::Testnet),
            QueryVerdict::ChainMismatch
        );
        assert!(matches!(
            classify(mainnet_addr, NetworkType::Mainnet),
            QueryVerdict::Valid(_)
        ));
        assert!(matches!(
            classify(testnet_addr, NetworkType::Testnet),
            QueryVerdict::Valid(_)
        ));
    }

    #[test]
    fn test_bare_hash_gets_prefixed() {
        assert_eq!(
            classify(TX_HASH, NetworkType::Mainnet),
            QueryVerdict::Valid(format!("0x{TX_HASH}"))
        );
    }

    #[test]
    fn test_prefixed_hash_and_block_number_pass_through() {
        let prefixed = format!("0x{TX_HASH}");
        assert_eq!(
            classify(&prefixed, NetworkType::Mainnet),
            QueryVerdict::Valid(prefixed.clone())
        );
        assert_eq!(
            classify("1234567", NetworkType::Mainnet),
            QueryVerdict::Valid("1234567".to_string())
        );
    }

    #[test]
    fn test_short_hex_is_not_prefixed() {
        assert_eq!(add_prefix_for_hash("abcdef"), "abcdef");
        assert_eq!(add_prefix_for_hash(TX_HASH), format!("0x{TX_HASH}"));
    }
}
