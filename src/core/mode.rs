//! Search mode toggle persisted across sessions.

/// Which lookup the search box performs on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Interpret input as a block number/hash, tx hash, address, or
    /// lock hash.
    #[default]
    ByIdentifier,
    /// Fuzzy lookup of token symbols and names.
    ByName,
}

impl SearchMode {
    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::ByIdentifier => "id",
            SearchMode::ByName => "name",
        }
    }

    /// Absent or unrecognized stored values fall back to the default.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("name") => SearchMode::ByName,
            _ => SearchMode::ByIdentifier,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SearchMode::ByIdentifier => SearchMode::ByName,
            SearchMode::ByName => SearchMode::ByIdentifier,
        }
    }
}
