use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly below an anchor rect (e.g. the suggestion dropdown
/// under the name field), clamped to the frame.
pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = anchor.x;
    let popup_y = (anchor.y + anchor.height).min(frame_area.height.saturating_sub(1));

    let max_height = frame_area.height.saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(frame_area.width.saturating_sub(popup_x)),
        height: height.min(max_height),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
