use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem as ListRow, Paragraph},
};

use crate::autocomplete::format_price;
use crate::remote::ListItem;

use super::lists_state::ListsState;

/// Render the list browser for the Listas / Archivadas tabs.
pub fn render_lists_pane(state: &ListsState, archived: bool, frame: &mut Frame, area: Rect) {
    let visible = state.visible(archived);

    let title = if archived {
        " Listas Archivadas "
    } else {
        " Tus Listas "
    };

    if visible.is_empty() {
        let message = if archived {
            "No hay listas archivadas"
        } else {
            "No tienes listas todavía"
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(paragraph, area);
        return;
    }

    let rows: Vec<ListRow> = visible
        .iter()
        .enumerate()
        .map(|(i, list)| {
            let mut spans = vec![Span::raw(list.name.clone())];
            if let Some(code) = &list.access_code {
                spans.push(Span::styled(
                    format!("  código {}", code),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            let line = Line::from(spans);
            if i == state.selected_index() {
                ListRow::new(line).style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListRow::new(line)
            }
        })
        .collect();

    let list = List::new(rows).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

/// Render the items of the opened list above the add-item form.
pub fn render_items_pane(items: &[ListItem], title: &str, frame: &mut Frame, area: Rect) {
    if items.is_empty() {
        let paragraph = Paragraph::new("Lista vacía — añade el primer artículo")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)));
        frame.render_widget(paragraph, area);
        return;
    }

    let rows: Vec<ListRow> = items.iter().map(item_row).collect();
    let list = List::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title)),
    );
    frame.render_widget(list, area);
}

fn item_row(item: &ListItem) -> ListRow<'static> {
    let (marker, marker_style) = if item.is_purchased {
        ("✓", Style::default().fg(Color::Green))
    } else {
        ("·", Style::default().fg(Color::DarkGray))
    };

    let mut spans = vec![
        Span::styled(format!("{} ", marker), marker_style),
        Span::raw(item.name.clone()),
    ];

    let detail: Vec<&str> = [item.brand.as_deref(), item.model.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !detail.is_empty() {
        spans.push(Span::styled(
            format!("  {}", detail.join(" - ")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if item.price > 0.0 {
        spans.push(Span::styled(
            format!("  {} €", format_price(item.price)),
            Style::default().fg(Color::Yellow),
        ));
    }

    if item.is_picked_up {
        spans.push(Span::styled(
            "  recogido",
            Style::default().fg(Color::Green),
        ));
    }

    ListRow::new(Line::from(spans))
}
