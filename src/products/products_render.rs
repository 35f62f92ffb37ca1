use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::autocomplete::format_price;
use crate::store::SavedProduct;

use super::products_state::ProductsState;

/// Render the Artículos tab: filter line on top, cached products below.
pub fn render_products_pane(
    state: &ProductsState,
    products: &[SavedProduct],
    frame: &mut Frame,
    area: Rect,
) {
    let [filter_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let filter = Paragraph::new(state.query()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filtrar (escribe para buscar) ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(filter, filter_area);

    let filtered = state.filtered(products);

    if filtered.is_empty() {
        let message = if products.is_empty() {
            "Todavía no hay artículos guardados"
        } else {
            "Ningún artículo coincide con el filtro"
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Artículos "));
        frame.render_widget(paragraph, list_area);
        return;
    }

    let rows: Vec<ListItem> = filtered
        .iter()
        .filter_map(|&idx| products.get(idx))
        .map(product_row)
        .collect();

    let list = List::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Artículos ({}) ", filtered.len())),
    );
    frame.render_widget(list, list_area);
}

fn product_row(product: &SavedProduct) -> ListItem<'static> {
    let mut spans = vec![Span::raw(product.name.clone())];

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

    ListItem::new(Line::from(spans))
}
