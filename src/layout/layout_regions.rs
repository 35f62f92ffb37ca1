use ratatui::layout::Rect;

use crate::form::FormField;

/// Which UI component a screen position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Tabs,
    ListsPane,
    FormField(FormField),
    SuggestionDropdown,
}

/// Where each component was drawn on the last frame.
///
/// Recorded during render and consulted when routing mouse events; a `None`
/// means the component was not on screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutRegions {
    pub tabs: Option<Rect>,
    pub lists_pane: Option<Rect>,
    pub name_field: Option<Rect>,
    pub brand_field: Option<Rect>,
    pub model_field: Option<Rect>,
    pub price_field: Option<Rect>,
    pub dropdown: Option<Rect>,
}

impl LayoutRegions {
    /// Forget the previous frame before re-recording.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_form_field(&mut self, field: FormField, area: Rect) {
        match field {
            FormField::Name => self.name_field = Some(area),
            FormField::Brand => self.brand_field = Some(area),
            FormField::Model => self.model_field = Some(area),
            FormField::Price => self.price_field = Some(area),
        }
    }
}
