use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_textarea::Input;

use crate::autocomplete::apply_selection;
use crate::form::FormField;

use super::mouse_click::handle_mouse_event;
use super::state::{App, Tab};

/// Poll for one terminal event and route it into the app.
pub fn handle_events(app: &mut App, timeout: Duration) -> io::Result<()> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            _ => {}
        }
    }
    Ok(())
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl+C quits from anywhere, even mid-edit.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.lists.opened().is_some() {
        handle_list_view_key(app, key);
    } else {
        handle_browser_key(app, key);
    }
}

/// Keys inside an opened list: the item form plus the suggestion dropdown.
fn handle_list_view_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.autocomplete.is_visible() {
                app.autocomplete.on_escape();
            } else {
                app.close_list();
            }
        }
        KeyCode::Tab => app.focus_form_field(app.form.focused.next()),
        KeyCode::BackTab => app.focus_form_field(app.form.focused.previous()),
        KeyCode::Down if app.autocomplete.is_visible() => app.autocomplete.highlight_next(),
        KeyCode::Up if app.autocomplete.is_visible() => app.autocomplete.highlight_previous(),
        KeyCode::Enter => {
            // Enter applies the highlighted suggestion; with nothing
            // highlighted it submits the form even while the dropdown shows.
            match app.autocomplete.highlighted().cloned() {
                Some(product) => {
                    apply_selection(&mut app.form, &mut app.autocomplete, &product);
                    // The programmatic refill consumes the one-shot search
                    // suppression, so the user's next edit searches again.
                    app.on_name_changed();
                }
                None => app.submit_form(),
            }
        }
        _ => {
            let focused = app.form.focused;
            let changed = app.form.field_mut(focused).input(Input::from(key));
            if changed && focused == FormField::Name {
                app.on_name_changed();
            }
        }
    }
}

/// Keys on the tabbed browser screens.
fn handle_browser_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Right => app.switch_tab(app.tab.next()),
        KeyCode::BackTab | KeyCode::Left => app.switch_tab(app.tab.previous()),
        _ => match app.tab {
            Tab::Lists | Tab::Archived => handle_lists_tab_key(app, key),
            Tab::Products => handle_products_tab_key(app, key),
        },
    }
}

fn handle_lists_tab_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.lists.select_next(app.tab.shows_archived()),
        KeyCode::Up | KeyCode::Char('k') => app.lists.select_previous(),
        KeyCode::Enter => app.open_selected_list(),
        KeyCode::Char('r') => app.refresh_lists(),
        KeyCode::Char('b') => app.download_backup(),
        _ => {}
    }
}

/// The Artículos tab types into its filter, so plain letters are not
/// shortcuts here.
fn handle_products_tab_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.products.query().is_empty() {
                app.should_quit = true;
            } else {
                app.products.clear_query();
            }
        }
        KeyCode::Backspace => app.products.pop_char(),
        KeyCode::Char(ch) => app.products.push_char(ch),
        _ => {}
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
