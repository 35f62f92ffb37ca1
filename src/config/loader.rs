use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

const CONFIG_DIR: &str = "listita";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration, falling back to defaults when the file is missing or
/// unparseable. A broken config file should degrade to offline mode, not
/// prevent startup.
pub fn load_config(override_path: Option<&Path>) -> Config {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return Config::default(),
        },
    };

    let contents = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Config::default(),
    };

    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring unparseable config {:?}: {}", path, e);
            Config::default()
        }
    }
}
