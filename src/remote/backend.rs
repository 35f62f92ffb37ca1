use thiserror::Error;
use uuid::Uuid;

use super::types::{ListItem, NewItem, ShoppingList};

/// Errors from the hosted backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("El servidor respondió {code}: {message}")]
    Api { code: u16, message: String },

    #[error("Respuesta inesperada del servidor: {0}")]
    Parse(String),

    #[error("Sin conexión (modo offline)")]
    Offline,
}

/// Command/query interface to the hosted list store.
///
/// The app never talks HTTP directly; it goes through this trait so tests can
/// substitute a recording double.
pub trait Backend {
    /// Add an item to a list. Must complete before any local state is cleared.
    fn add_item(&self, list_id: Uuid, item: NewItem) -> Result<(), BackendError>;

    /// All lists owned by the configured user, archived ones included.
    fn fetch_lists(&self) -> Result<Vec<ShoppingList>, BackendError>;

    /// All items belonging to the given lists.
    fn fetch_items(&self, list_ids: &[Uuid]) -> Result<Vec<ListItem>, BackendError>;
}

/// Backend used with `--offline`: every remote operation fails fast, keeping
/// local state (form input, product cache) intact.
#[derive(Debug, Default)]
pub struct OfflineBackend;

impl Backend for OfflineBackend {
    fn add_item(&self, _list_id: Uuid, _item: NewItem) -> Result<(), BackendError> {
        Err(BackendError::Offline)
    }

    fn fetch_lists(&self) -> Result<Vec<ShoppingList>, BackendError> {
        Err(BackendError::Offline)
    }

    fn fetch_items(&self, _list_ids: &[Uuid]) -> Result<Vec<ListItem>, BackendError> {
        Err(BackendError::Offline)
    }
}
