mod autocomplete_render;
mod selection;
mod state;

pub use autocomplete_render::{render_dropdown, suggestion_index_at};
pub use selection::{apply_selection, format_price};
pub use state::{AutocompleteState, BLUR_HIDE_DELAY, MIN_QUERY_LEN};
