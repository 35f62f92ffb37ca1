mod backend;
mod http;
mod types;

pub use backend::{Backend, BackendError, OfflineBackend};
pub use http::HttpBackend;
pub use types::{ListItem, NewItem, ShoppingList};
