mod events;
mod mouse_click;
mod render;
mod state;

pub use events::{handle_events, handle_key_event};
pub use mouse_click::handle_mouse_event;
pub use render::render;
pub use state::{App, Tab};
