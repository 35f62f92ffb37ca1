use ratatui::layout::Rect;

use crate::form::FormField;

use super::layout_regions::{LayoutRegions, Region};

fn contains(area: Option<Rect>, column: u16, row: u16) -> bool {
    match area {
        Some(rect) => {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        }
        None => false,
    }
}

/// Which component is at the given screen position, if any.
///
/// The dropdown floats over other components, so it is checked first.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    if contains(regions.dropdown, column, row) {
        return Some(Region::SuggestionDropdown);
    }
    if contains(regions.name_field, column, row) {
        return Some(Region::FormField(FormField::Name));
    }
    if contains(regions.brand_field, column, row) {
        return Some(Region::FormField(FormField::Brand));
    }
    if contains(regions.model_field, column, row) {
        return Some(Region::FormField(FormField::Model));
    }
    if contains(regions.price_field, column, row) {
        return Some(Region::FormField(FormField::Price));
    }
    if contains(regions.tabs, column, row) {
        return Some(Region::Tabs);
    }
    if contains(regions.lists_pane, column, row) {
        return Some(Region::ListsPane);
    }
    None
}
