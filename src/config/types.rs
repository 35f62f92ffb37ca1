// Configuration type definitions

use serde::Deserialize;

/// Hosted backend connection section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BackendConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub owner_id: String,
}

impl BackendConfig {
    /// Remote access needs at least a URL; without one the app runs against
    /// the offline backend.
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }
}

/// Backup export section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExportConfig {
    /// Directory the backup CSV is written to; defaults to the current
    /// working directory.
    #[serde(default)]
    pub directory: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub export: ExportConfig,
}
