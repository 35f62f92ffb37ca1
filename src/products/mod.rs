mod products_render;
mod products_state;

pub use products_render::render_products_pane;
pub use products_state::ProductsState;
