mod lists_render;
mod lists_state;

pub use lists_render::{render_items_pane, render_lists_pane};
pub use lists_state::{ListsState, OpenedList};
