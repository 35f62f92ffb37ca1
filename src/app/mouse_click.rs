use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::autocomplete::{apply_selection, suggestion_index_at};
use crate::form::FormField;
use crate::layout::{Region, region_at};

use super::state::App;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    handle_left_press(app, mouse.column, mouse.row);
}

/// Route a left press by the regions recorded during the last render.
///
/// Presses on the dropdown apply the clicked suggestion; presses anywhere
/// else count as "outside" and hide it immediately, the delayed blur hide
/// notwithstanding.
fn handle_left_press(app: &mut App, column: u16, row: u16) {
    match region_at(&app.regions, column, row) {
        Some(Region::SuggestionDropdown) => {
            let Some(dropdown) = app.regions.dropdown else {
                return;
            };
            let clicked = suggestion_index_at(dropdown, row)
                .and_then(|idx| app.autocomplete.suggestion_at(idx).cloned());
            if let Some(product) = clicked {
                apply_selection(&mut app.form, &mut app.autocomplete, &product);
                app.on_name_changed();
            }
        }
        Some(Region::FormField(FormField::Name)) => {
            app.focus_form_field(FormField::Name);
        }
        Some(Region::FormField(field)) => {
            // A press on another field is outside the dropdown, which hides
            // immediately rather than waiting out the blur delay.
            app.autocomplete.on_outside_press();
            app.focus_form_field(field);
        }
        _ => app.autocomplete.on_outside_press(),
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
