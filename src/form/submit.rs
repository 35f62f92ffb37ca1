use uuid::Uuid;

use crate::autocomplete::AutocompleteState;
use crate::remote::{Backend, BackendError, NewItem};
use crate::store::ProductStore;

use super::form_state::{FormState, parse_price};

/// What happened to a submit attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The item was added remotely, the cache updated and the form cleared.
    Submitted,
    /// Empty name: silently blocked, nothing touched.
    Blocked,
}

/// Submit the add-item form against the remote backend.
///
/// The remote call completes before any local mutation: on failure the form
/// keeps the user's input, the cache is not touched, and the error propagates
/// for display. Only a successful add upserts the product into the cache (so
/// items that were never added are not offered as suggestions later), clears
/// the form and drops the suggestion state.
pub fn submit_item(
    form: &mut FormState,
    autocomplete: &mut AutocompleteState,
    store: &mut dyn ProductStore,
    backend: &dyn Backend,
    list_id: Uuid,
) -> Result<SubmitOutcome, BackendError> {
    let name = form.name().trim().to_string();
    if name.is_empty() {
        return Ok(SubmitOutcome::Blocked);
    }

    let price = parse_price(form.price_text());
    let brand = form.brand_value();
    let model = form.model_value();

    backend.add_item(
        list_id,
        NewItem {
            name: name.clone(),
            price,
            brand: brand.clone(),
            model: model.clone(),
        },
    )?;

    store.upsert(&name, price, brand.as_deref(), model.as_deref());

    form.clear();
    autocomplete.reset();

    Ok(SubmitOutcome::Submitted)
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod submit_tests;
