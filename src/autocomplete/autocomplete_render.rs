//! Suggestion dropdown rendering
//!
//! Renders the autocomplete dropdown anchored under the name field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::widgets::popup;

use super::selection::format_price;
use super::state::AutocompleteState;

// Dropdown display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const MAX_POPUP_WIDTH: u16 = 56;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;

/// Render the suggestion dropdown below the name field.
///
/// Returns the popup rect so the caller can record it for mouse hit-testing,
/// or `None` when nothing was drawn.
pub fn render_dropdown(
    autocomplete: &AutocompleteState,
    frame: &mut Frame,
    name_area: Rect,
) -> Option<Rect> {
    if !autocomplete.is_visible() {
        return None;
    }
    let suggestions = autocomplete.suggestions();
    if suggestions.is_empty() {
        return None;
    }

    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    let max_line_width = suggestions
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .map(|p| {
            let mut width = p.name.width();
            if let Some(detail) = p.detail_line() {
                width += detail.width() + 2;
            }
            if let Some(price) = p.default_price {
                width += format_price(price).width() + 4;
            }
            width as u16
        })
        .max()
        .unwrap_or(20);
    let popup_width = (max_line_width + POPUP_PADDING).min(MAX_POPUP_WIDTH);

    let popup_area = popup::popup_below_anchor(name_area, frame.area(), popup_width, popup_height);

    let items: Vec<ListItem> = suggestions
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .enumerate()
        .map(|(i, product)| {
            let highlighted = Some(i) == autocomplete.highlighted_index();

            let mut spans = vec![Span::styled(
                product.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if let Some(detail) = product.detail_line() {
                spans.push(Span::styled(
                    format!("  {}", detail),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if let Some(price) = product.default_price {
                spans.push(Span::styled(
                    format!("  {} €", format_price(price)),
                    Style::default().fg(Color::Yellow),
                ));
            }

            let line = Line::from(spans);
            if highlighted {
                ListItem::new(line).style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sugerencias ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, popup_area);

    Some(popup_area)
}

/// Map a click row inside the dropdown rect to a suggestion index.
pub fn suggestion_index_at(popup_area: Rect, row: u16) -> Option<usize> {
    // First row is the border
    if row <= popup_area.y || row >= popup_area.y + popup_area.height.saturating_sub(1) {
        return None;
    }
    Some((row - popup_area.y - 1) as usize)
}
