//! Tests for product cache persistence

use std::path::PathBuf;

use super::*;
use crate::store::ProductStore;

/// Unique scratch path so parallel tests never collide.
fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("listita-test-{}", uuid::Uuid::new_v4()))
        .join(name)
}

#[test]
fn test_load_missing_file_yields_empty_cache() {
    let path = scratch_path("missing.toml");
    let cache = load_cache_from_path(&path);
    assert!(cache.is_empty());
}

#[test]
fn test_parse_empty_content() {
    let cache = parse_products_toml("");
    assert!(cache.is_empty());
}

#[test]
fn test_parse_corrupt_content_yields_empty_cache() {
    let cache = parse_products_toml("this is { not toml");
    assert!(cache.is_empty());
}

#[test]
fn test_parse_products() {
    let content = r#"
[[products]]
id = "a9f2b6aa-22cf-4a42-93b6-21b0f7c9b0de"
name = "Pañales"
brand = "Dodot"
default_price = 12.5

[[products]]
id = "f0b7d3c1-6a4b-4f4a-8f5e-2d9c1e3a7b42"
name = "Babero"
"#;

    let cache = parse_products_toml(content);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.products()[0].name, "Pañales");
    assert_eq!(cache.products()[0].default_price, Some(12.5));
    assert!(cache.products()[1].default_price.is_none());
}

#[test]
fn test_save_and_reload_round_trip() {
    let path = scratch_path("products.toml");

    let mut cache = ProductCache::new();
    cache.upsert("Pañales", 12.5, Some("Dodot"), None);
    cache.upsert("Biberón", 0.0, Some("Avent"), Some("Natural"));

    save_cache_to_path(&cache, &path);
    let reloaded = load_cache_from_path(&path);

    assert_eq!(reloaded.products(), cache.products());

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_save_creates_parent_directories() {
    let path = scratch_path("nested/dir/products.toml");

    let mut cache = ProductCache::new();
    cache.upsert("Chupete", 3.5, None, None);
    save_cache_to_path(&cache, &path);

    assert!(path.exists());

    let _ = std::fs::remove_dir_all(path.ancestors().nth(3).unwrap());
}
