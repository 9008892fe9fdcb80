//! Search-mode preference persistence across sessions.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ckb_search::{
    ExplorerApi, FetchError, MemoryPreferenceStore, NetworkType, SearchBox, SearchMode,
    SqlitePreferenceStore, TypedEntity, UdtQueryResult,
};

struct StubApi;

#[async_trait]
impl ExplorerApi for StubApi {
    async fn fetch_by_id(&self, _query: &str) -> Result<TypedEntity, FetchError> {
        Ok(TypedEntity::Udt {})
    }

    async fn fetch_by_name(&self, _query: &str) -> Result<Vec<UdtQueryResult>, FetchError> {
        Ok(Vec::new())
    }
}

const DEBOUNCE: Duration = Duration::from_millis(50);

#[test]
fn test_first_use_defaults_to_identifier_mode() {
    let search = SearchBox::new(
        Arc::new(StubApi),
        NetworkType::Mainnet,
        Box::new(MemoryPreferenceStore::new()),
        DEBOUNCE,
    )
    .unwrap();

    assert_eq!(search.mode(), SearchMode::ByIdentifier);
}

#[test]
fn test_toggled_mode_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("preferences.sqlite3");

    {
        let store = SqlitePreferenceStore::open(&db_path).unwrap();
        let mut search = SearchBox::new(
            Arc::new(StubApi),
            NetworkType::Mainnet,
            Box::new(store),
            DEBOUNCE,
        )
        .unwrap();
        search.toggle_mode();
        assert_eq!(search.mode(), SearchMode::ByName);
    }

    // A fresh search box over the same database starts in name mode.
    let store = SqlitePreferenceStore::open(&db_path).unwrap();
    let search = SearchBox::new(
        Arc::new(StubApi),
        NetworkType::Mainnet,
        Box::new(store),
        DEBOUNCE,
    )
    .unwrap();
    assert_eq!(search.mode(), SearchMode::ByName);
}

#[test]
fn test_toggling_back_persists_identifier_mode() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("preferences.sqlite3");

    {
        let store = SqlitePreferenceStore::open(&db_path).unwrap();
        let mut search = SearchBox::new(
            Arc::new(StubApi),
            NetworkType::Mainnet,
            Box::new(store),
            DEBOUNCE,
        )
        .unwrap();
        search.toggle_mode();
        search.toggle_mode();
    }

    let store = SqlitePreferenceStore::open(&db_path).unwrap();
    let search = SearchBox::new(
        Arc::new(StubApi),
        NetworkType::Mainnet,
        Box::new(store),
        DEBOUNCE,
    )
    .unwrap();
    assert_eq!(search.mode(), SearchMode::ByIdentifier);
}
