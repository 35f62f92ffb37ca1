use crate::form::FormState;
use crate::store::SavedProduct;

use super::state::AutocompleteState;

/// Copy a chosen suggestion into the form.
///
/// Fields the product does not carry are left untouched, so a half-filled form
/// keeps the user's input. The dropdown is hidden and emptied, the next search
/// is suppressed, and focus returns to the name field.
pub fn apply_selection(
    form: &mut FormState,
    autocomplete: &mut AutocompleteState,
    product: &SavedProduct,
) {
    autocomplete.mark_selected();

    form.set_name(&product.name);
    if let Some(price) = product.default_price {
        form.set_price(&format_price(price));
    }
    if let Some(brand) = &product.brand {
        form.set_brand(brand);
    }
    if let Some(model) = &product.model {
        form.set_model(model);
    }

    form.focus_name();
}

/// Shortest decimal text for a price: "12.5", not "12.50"; "12", not "12.0".
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{}", price)
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
