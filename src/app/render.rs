use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Tabs},
};

use crate::autocomplete::render_dropdown;
use crate::form::FormField;
use crate::lists::{render_items_pane, render_lists_pane};
use crate::notification::render_notification;
use crate::products::render_products_pane;

use super::state::{App, Tab};

const TABS: [Tab; 3] = [Tab::Lists, Tab::Archived, Tab::Products];

/// Draw one frame, re-recording the layout regions for mouse routing.
pub fn render(app: &mut App, frame: &mut Frame) {
    app.regions.reset();

    let [tabs_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_tabs(app, frame, tabs_area);

    if app.lists.opened().is_some() {
        render_opened_list(app, frame, content_area);
    } else {
        match app.tab {
            Tab::Lists | Tab::Archived => {
                app.regions.lists_pane = Some(content_area);
                render_lists_pane(&app.lists, app.tab.shows_archived(), frame, content_area);
            }
            Tab::Products => {
                render_products_pane(&app.products, app.store.products(), frame, content_area);
            }
        }
    }

    render_footer(app, frame, footer_area);
    render_notification(&app.notification, frame, frame.area());
}

fn render_tabs(app: &mut App, frame: &mut Frame, area: Rect) {
    app.regions.tabs = Some(area);

    let selected = TABS.iter().position(|t| *t == app.tab).unwrap_or(0);
    let tabs = Tabs::new(TABS.map(Tab::title))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

/// The opened list: its items on top, the add-item form below, and the
/// suggestion dropdown floating over both.
fn render_opened_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let [items_area, form_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(6)]).areas(area);

    let (title, items) = match app.lists.opened() {
        Some(opened) => (opened.list.name.clone(), opened.items.clone()),
        None => return,
    };
    render_items_pane(&items, &title, frame, items_area);

    let [top_row, bottom_row] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(form_area);
    let [name_area, price_area] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .areas(top_row);
    let [brand_area, model_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(bottom_row);

    for (field, field_area) in [
        (FormField::Name, name_area),
        (FormField::Price, price_area),
        (FormField::Brand, brand_area),
        (FormField::Model, model_area),
    ] {
        app.regions.record_form_field(field, field_area);
        frame.render_widget(app.form.field_ref(field), field_area);
    }

    // Drawn last so it floats over the form; the rect feeds mouse hit-testing.
    app.regions.dropdown = render_dropdown(&app.autocomplete, frame, name_area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = if app.lists.opened().is_some() {
        if app.autocomplete.is_visible() {
            "↑/↓ sugerencias · Enter seleccionar/añadir · Esc cerrar sugerencias · Tab campo"
        } else {
            "Enter añadir artículo · Tab campo · Esc volver"
        }
    } else {
        match app.tab {
            Tab::Lists | Tab::Archived => {
                "↑/↓ mover · Enter abrir · r recargar · b copia de seguridad · Tab pestaña · q salir"
            }
            Tab::Products => "escribe para filtrar · Esc limpiar/salir · Tab pestaña",
        }
    };

    let footer = Paragraph::new(Line::from(hints)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
