//! Application configuration domain model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Seoul OpenAPI access
    #[serde(default)]
    pub api: ApiConfig,

    /// Local persistence
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Upstream API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Seoul OpenAPI host
    pub base_url: String,

    /// Server-held API key; never shipped to clients
    pub key: String,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Directory holding the favorites and recent-search records.
    /// `None` resolves to the platform data directory at load time.
    pub data_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://openapi.seoul.go.kr:8088".to_string(),
            key: String::new(),
        }
    }
}
