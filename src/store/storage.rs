use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::cache::ProductCache;
use super::product::SavedProduct;

const CONFIG_DIR: &str = "listita";
const PRODUCTS_FILE: &str = "products.toml";

#[derive(Serialize, Deserialize, Default)]
struct ProductsFile {
    #[serde(default)]
    products: Vec<SavedProduct>,
}

pub fn products_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(PRODUCTS_FILE))
}

/// Load the saved-product cache from disk.
///
/// A missing or unreadable file yields an empty cache; the cache is a local
/// convenience, never authoritative.
pub fn load_cache() -> ProductCache {
    let Some(path) = products_path() else {
        return ProductCache::new();
    };

    load_cache_from_path(&path)
}

pub fn load_cache_from_path(path: &Path) -> ProductCache {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return ProductCache::new(),
    };

    parse_products_toml(&contents)
}

pub fn parse_products_toml(content: &str) -> ProductCache {
    match toml::from_str::<ProductsFile>(content) {
        Ok(file) => ProductCache::from_products(file.products),
        Err(e) => {
            log::warn!("Ignoring unparseable products file: {}", e);
            ProductCache::new()
        }
    }
}

/// Persist the cache, creating parent directories as needed.
///
/// Best-effort: failures are logged, not surfaced, so a read-only config dir
/// never blocks adding items.
pub fn save_cache(cache: &ProductCache) {
    let Some(path) = products_path() else {
        return;
    };

    save_cache_to_path(cache, &path);
}

pub fn save_cache_to_path(cache: &ProductCache, path: &Path) {
    let file = ProductsFile {
        products: cache.products().to_vec(),
    };

    let contents = match toml::to_string_pretty(&file) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Could not serialize product cache: {}", e);
            return;
        }
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            log::warn!("Could not create config dir {:?}: {}", parent, e);
            return;
        }
    }

    if let Err(e) = fs::write(path, contents) {
        log::warn!("Could not save product cache to {:?}: {}", path, e);
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
