//! Tests for the saved-product cache

use super::*;

fn cache_with(names: &[&str]) -> ProductCache {
    let mut cache = ProductCache::new();
    for name in names {
        cache.upsert(name, 0.0, None, None);
    }
    cache
}

#[test]
fn test_new_cache_is_empty() {
    let cache = ProductCache::new();
    assert!(cache.is_empty());
    assert!(cache.search("anything").is_empty());
}

#[test]
fn test_search_matches_substring() {
    let cache = cache_with(&["Pañales", "Biberón", "Toallitas"]);

    let results = cache.search("añal");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Pañales");
}

#[test]
fn test_search_is_case_insensitive() {
    let cache = cache_with(&["Pañales"]);

    assert_eq!(cache.search("paña").len(), 1);
    assert_eq!(cache.search("PAÑA").len(), 1);
    assert_eq!(cache.search("PaÑa").len(), 1);
}

#[test]
fn test_search_trims_query() {
    let cache = cache_with(&["Biberón"]);

    assert_eq!(cache.search("  bib  ").len(), 1);
}

#[test]
fn test_search_empty_query_returns_nothing() {
    let cache = cache_with(&["Pañales"]);

    assert!(cache.search("").is_empty());
    assert!(cache.search("   ").is_empty());
}

#[test]
fn test_search_preserves_storage_order() {
    let cache = cache_with(&["Chupete rosa", "Babero", "Chupete azul"]);

    let results = cache.search("chupete");
    let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Chupete rosa", "Chupete azul"]);
}

#[test]
fn test_upsert_creates_new_product() {
    let mut cache = ProductCache::new();

    let product = cache.upsert("Pañales", 12.5, Some("Dodot"), None);

    assert_eq!(cache.len(), 1);
    assert_eq!(product.name, "Pañales");
    assert_eq!(product.default_price, Some(12.5));
    assert_eq!(product.brand.as_deref(), Some("Dodot"));
    assert!(product.model.is_none());
}

#[test]
fn test_upsert_matches_name_case_insensitively() {
    let mut cache = ProductCache::new();
    let first = cache.upsert("Pañales", 12.5, None, None);

    let second = cache.upsert("pañales", 14.0, Some("Dodot"), None);

    assert_eq!(cache.len(), 1);
    assert_eq!(second.id, first.id);
    assert_eq!(second.name, "Pañales"); // original casing kept
    assert_eq!(second.default_price, Some(14.0));
    assert_eq!(second.brand.as_deref(), Some("Dodot"));
}

#[test]
fn test_upsert_zero_price_stores_no_default() {
    let mut cache = ProductCache::new();

    let product = cache.upsert("Babero", 0.0, None, None);

    assert!(product.default_price.is_none());
}

#[test]
fn test_upsert_overwrites_mutable_fields() {
    let mut cache = ProductCache::new();
    cache.upsert("Biberón", 8.0, Some("Avent"), Some("Natural"));

    let updated = cache.upsert("Biberón", 0.0, None, None);

    assert!(updated.default_price.is_none());
    assert!(updated.brand.is_none());
    assert!(updated.model.is_none());
}

#[test]
fn test_upsert_trims_name() {
    let mut cache = ProductCache::new();

    let product = cache.upsert("  Babero  ", 0.0, None, None);

    assert_eq!(product.name, "Babero");
    assert_eq!(cache.search("babero").len(), 1);
}

#[test]
fn test_upsert_visible_to_next_search() {
    let mut cache = ProductCache::new();
    assert!(cache.search("chupete").is_empty());

    cache.upsert("Chupete", 3.5, None, None);

    assert_eq!(cache.search("chupete").len(), 1);
}

#[test]
fn test_detail_line_combinations() {
    let bare = SavedProduct::new("Babero");
    assert!(bare.detail_line().is_none());

    let branded = SavedProduct::new("Pañales").with_brand("Dodot");
    assert_eq!(branded.detail_line().as_deref(), Some("Dodot"));

    let full = SavedProduct::new("Biberón")
        .with_brand("Avent")
        .with_model("Natural 260ml");
    assert_eq!(full.detail_line().as_deref(), Some("Avent - Natural 260ml"));
}

mod search_properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Any query that is a substring of a stored name (case-insensitive)
        // must surface that product.
        #[test]
        fn prop_substring_queries_always_match(
            name in "[A-Za-zñÑáé]{2,12}",
            start in 0usize..6,
            len in 1usize..6,
        ) {
            let chars: Vec<char> = name.chars().collect();
            let start = start.min(chars.len() - 1);
            let end = (start + len).min(chars.len());
            let query: String = chars[start..end].iter().collect();

            let mut cache = ProductCache::new();
            cache.upsert(&name, 0.0, None, None);

            let results = cache.search(&query.to_uppercase());
            prop_assert!(
                results.iter().any(|p| p.name == name),
                "query {:?} should match {:?}", query, name
            );
        }
    }
}
