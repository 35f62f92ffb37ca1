//! Tests for form submission against the remote backend

use std::cell::RefCell;

use uuid::Uuid;

use super::*;
use crate::autocomplete::AutocompleteState;
use crate::remote::{Backend, BackendError, ListItem, NewItem, ShoppingList};
use crate::store::{ProductCache, ProductStore};

/// Recording backend double; fails `add_item` when `fail` is set.
#[derive(Default)]
struct MockBackend {
    fail: bool,
    added: RefCell<Vec<(Uuid, NewItem)>>,
}

impl MockBackend {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn add_count(&self) -> usize {
        self.added.borrow().len()
    }
}

impl Backend for MockBackend {
    fn add_item(&self, list_id: Uuid, item: NewItem) -> Result<(), BackendError> {
        if self.fail {
            return Err(BackendError::Network("connection refused".to_string()));
        }
        self.added.borrow_mut().push((list_id, item));
        Ok(())
    }

    fn fetch_lists(&self) -> Result<Vec<ShoppingList>, BackendError> {
        Ok(Vec::new())
    }

    fn fetch_items(&self, _list_ids: &[Uuid]) -> Result<Vec<ListItem>, BackendError> {
        Ok(Vec::new())
    }
}

fn filled_form() -> FormState {
    let mut form = FormState::new();
    form.set_name("Pañales");
    form.set_price("12.5");
    form.set_brand("Dodot");
    form.set_model("Sensitive");
    form
}

#[test]
fn test_successful_submit_adds_upserts_and_clears() {
    let mut form = filled_form();
    let mut autocomplete = AutocompleteState::new();
    let mut store = ProductCache::new();
    let backend = MockBackend::default();
    let list_id = Uuid::new_v4();

    let outcome = submit_item(&mut form, &mut autocomplete, &mut store, &backend, list_id).unwrap();

    assert_eq!(outcome, SubmitOutcome::Submitted);

    // Remote call happened with the form values
    let added = backend.added.borrow();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].0, list_id);
    assert_eq!(added[0].1.name, "Pañales");
    assert_eq!(added[0].1.price, 12.5);
    assert_eq!(added[0].1.brand.as_deref(), Some("Dodot"));
    assert_eq!(added[0].1.model.as_deref(), Some("Sensitive"));

    // Cache was updated and the form cleared
    assert_eq!(store.len(), 1);
    assert_eq!(store.search("paña").len(), 1);
    assert_eq!(form.name(), "");
    assert_eq!(form.price_text(), "");
}

#[test]
fn test_blank_name_blocks_silently() {
    let mut form = FormState::new();
    form.set_name("  ");
    form.set_price("3");
    let mut autocomplete = AutocompleteState::new();
    let mut store = ProductCache::new();
    let backend = MockBackend::default();

    let outcome = submit_item(
        &mut form,
        &mut autocomplete,
        &mut store,
        &backend,
        Uuid::new_v4(),
    )
    .unwrap();

    assert_eq!(outcome, SubmitOutcome::Blocked);
    assert_eq!(backend.add_count(), 0);
    assert!(store.is_empty());
    // Fields untouched
    assert_eq!(form.price_text(), "3");
}

#[test]
fn test_backend_failure_preserves_form_and_cache() {
    let mut form = filled_form();
    let mut autocomplete = AutocompleteState::new();
    let mut store = ProductCache::new();
    let backend = MockBackend::failing();

    let result = submit_item(
        &mut form,
        &mut autocomplete,
        &mut store,
        &backend,
        Uuid::new_v4(),
    );

    assert!(matches!(result, Err(BackendError::Network(_))));

    // Everything the user typed survives for a retry
    assert_eq!(form.name(), "Pañales");
    assert_eq!(form.price_text(), "12.5");
    assert_eq!(form.brand(), "Dodot");
    assert_eq!(form.model(), "Sensitive");

    // The cache must not offer a product that was never added
    assert!(store.is_empty());
}

#[test]
fn test_name_is_trimmed_on_submit() {
    let mut form = FormState::new();
    form.set_name("  Babero ");
    let mut autocomplete = AutocompleteState::new();
    let mut store = ProductCache::new();
    let backend = MockBackend::default();

    submit_item(
        &mut form,
        &mut autocomplete,
        &mut store,
        &backend,
        Uuid::new_v4(),
    )
    .unwrap();

    assert_eq!(backend.added.borrow()[0].1.name, "Babero");
}

#[test]
fn test_unparseable_price_submits_zero() {
    let mut form = FormState::new();
    form.set_name("Babero");
    form.set_price("gratis");
    let mut autocomplete = AutocompleteState::new();
    let mut store = ProductCache::new();
    let backend = MockBackend::default();

    submit_item(
        &mut form,
        &mut autocomplete,
        &mut store,
        &backend,
        Uuid::new_v4(),
    )
    .unwrap();

    assert_eq!(backend.added.borrow()[0].1.price, 0.0);
    // Zero price is stored as "no default price"
    assert!(store.search("babero")[0].default_price.is_none());
}

#[test]
fn test_submit_drops_suggestion_state() {
    let mut form = filled_form();
    let mut autocomplete = AutocompleteState::new();
    let mut store = ProductCache::new();
    store.upsert("Pañales viejos", 1.0, None, None);
    autocomplete.on_text_change("paña", &store);
    assert!(autocomplete.is_visible());

    let backend = MockBackend::default();
    submit_item(
        &mut form,
        &mut autocomplete,
        &mut store,
        &backend,
        Uuid::new_v4(),
    )
    .unwrap();

    assert!(!autocomplete.is_visible());
    assert!(autocomplete.suggestions().is_empty());
}
