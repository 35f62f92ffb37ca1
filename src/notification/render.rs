use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationLevel, NotificationState};
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;

/// Render the current notification in the bottom-right corner, above
/// everything else.
pub fn render_notification(state: &NotificationState, frame: &mut Frame, area: Rect) {
    let Some(notification) = state.current() else {
        return;
    };

    let (title, color) = match notification.level {
        NotificationLevel::Info => (" Aviso ", Color::Cyan),
        NotificationLevel::Success => (" Éxito ", Color::Green),
        NotificationLevel::Error => (" Error ", Color::Red),
    };

    let text_width = notification.message.width() as u16;
    let width = (text_width + 4).min(MAX_WIDTH).min(area.width);
    let inner_width = width.saturating_sub(2).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);
    let height = (lines + 2).min(area.height);

    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    popup::clear_area(frame, popup_area);

    let paragraph = Paragraph::new(Line::from(notification.message.clone()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, popup_area);
}
