//! Durable client-side preference storage.

mod preference;

pub use preference::{
    MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore, SEARCH_MODE_KEY,
};
