//! Tests for applying a selected suggestion to the form

use super::*;
use crate::form::{FormField, FormState};
use crate::store::{ProductCache, ProductStore, SavedProduct};

fn full_product() -> SavedProduct {
    SavedProduct::new("Pañales")
        .with_brand("Dodot")
        .with_default_price(12.5)
}

#[test]
fn test_selection_fills_name_price_brand() {
    let mut form = FormState::new();
    let mut autocomplete = AutocompleteState::new();

    apply_selection(&mut form, &mut autocomplete, &full_product());

    assert_eq!(form.name(), "Pañales");
    assert_eq!(form.price_text(), "12.5");
    assert_eq!(form.brand(), "Dodot");
    assert_eq!(form.model(), "");
}

#[test]
fn test_selection_hides_and_suppresses() {
    let mut form = FormState::new();
    let mut autocomplete = AutocompleteState::new();
    let store = {
        let mut cache = ProductCache::new();
        cache.upsert("Pañales", 12.5, Some("Dodot"), None);
        cache
    };
    autocomplete.on_text_change("paña", &store);
    assert!(autocomplete.is_visible());

    apply_selection(&mut form, &mut autocomplete, &full_product());

    assert!(!autocomplete.is_visible());
    assert!(autocomplete.suggestions().is_empty());
    assert!(autocomplete.is_search_suppressed());
}

#[test]
fn test_selection_refocuses_name_field() {
    let mut form = FormState::new();
    form.focused = FormField::Price;
    let mut autocomplete = AutocompleteState::new();

    apply_selection(&mut form, &mut autocomplete, &full_product());

    assert_eq!(form.focused, FormField::Name);
}

#[test]
fn test_product_without_price_leaves_price_untouched() {
    let mut form = FormState::new();
    form.set_price("7");
    let mut autocomplete = AutocompleteState::new();

    let product = SavedProduct::new("Babero");
    apply_selection(&mut form, &mut autocomplete, &product);

    assert_eq!(form.name(), "Babero");
    assert_eq!(form.price_text(), "7");
}

#[test]
fn test_product_without_brand_model_leaves_fields_untouched() {
    let mut form = FormState::new();
    form.set_brand("Chicco");
    form.set_model("Basic");
    let mut autocomplete = AutocompleteState::new();

    let product = SavedProduct::new("Babero").with_default_price(3.0);
    apply_selection(&mut form, &mut autocomplete, &product);

    assert_eq!(form.brand(), "Chicco");
    assert_eq!(form.model(), "Basic");
    assert_eq!(form.price_text(), "3");
}

// The end-to-end scenario: type "paña", pick the match, fields fill in.
#[test]
fn test_type_then_select_scenario() {
    let mut store = ProductCache::new();
    store.upsert("Pañales", 12.5, Some("Dodot"), None);

    let mut form = FormState::new();
    let mut autocomplete = AutocompleteState::new();

    form.set_name("paña");
    autocomplete.on_text_change("paña", &store);
    assert_eq!(autocomplete.suggestions().len(), 1);

    let chosen = autocomplete.suggestions()[0].clone();
    apply_selection(&mut form, &mut autocomplete, &chosen);

    assert_eq!(form.name(), "Pañales");
    assert_eq!(form.price_text(), "12.5");
    assert_eq!(form.brand(), "Dodot");

    // The refill's own text change must not reopen the dropdown...
    autocomplete.on_text_change("Pañales", &store);
    assert!(!autocomplete.is_visible());

    // ...but the next keystroke resumes searching.
    autocomplete.on_text_change("Pañales r", &store);
    assert!(!autocomplete.is_visible()); // no match for "pañales r"
    autocomplete.on_text_change("Pañal", &store);
    assert!(autocomplete.is_visible());
}

#[test]
fn test_format_price_drops_trailing_zeroes() {
    assert_eq!(format_price(12.5), "12.5");
    assert_eq!(format_price(12.0), "12");
    assert_eq!(format_price(0.99), "0.99");
    assert_eq!(format_price(0.0), "0");
}
