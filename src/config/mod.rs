use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::core::query::NetworkType;
use crate::infrastructure::runtime::NAME_SEARCH_DEBOUNCE;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Network this explorer deployment serves.
    #[serde(default)]
    pub network: NetworkType,

    /// Override for the lookup API endpoint.
    pub api_url: Option<String>,

    /// Quiet period for the search-by-name debounce, in milliseconds.
    pub debounce_ms: Option<u64>,
}

impl Config {
    pub fn api_url(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| self.network.default_api_url().to_string())
    }

    pub fn debounce(&self) -> Duration {
        self.debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(NAME_SEARCH_DEBOUNCE)
    }
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CKB_SEARCH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("ckb-search").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("ckb-search").join("config.toml"));
    }

    directories::ProjectDirs::from("org", "nervos", "ckb-search")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("ckb-search"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("ckb-search"));
    }
    directories::ProjectDirs::from("org", "nervos", "ckb-search")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn preference_db_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("preferences.sqlite3"))
}
