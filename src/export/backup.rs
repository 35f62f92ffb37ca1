//! CSV backup of all lists joined with their items.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::autocomplete::format_price;
use crate::remote::{Backend, BackendError, ListItem, ShoppingList};

pub const BACKUP_HEADERS: [&str; 10] = [
    "Lista",
    "Producto",
    "Precio",
    "Marca",
    "Modelo",
    "Estado",
    "Comprador",
    "Teléfono Comprador",
    "Fecha Compra",
    "Recogido",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("No se pudo escribir la copia: {0}")]
    Io(#[from] std::io::Error),

    #[error("No se pudo generar el CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Result of a backup that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    /// No lists to export. Reported as its own notification, not an error.
    Empty,
}

pub fn backup_filename(date: NaiveDate) -> String {
    format!("backup_listas_bebe_{}.csv", date.format("%Y-%m-%d"))
}

/// Fetch every list and item and write the joined backup CSV into `directory`.
///
/// Lists are fetched first; with none there is nothing to export and the item
/// fetch is skipped entirely.
pub fn export_backup(
    backend: &dyn Backend,
    directory: &Path,
    date: NaiveDate,
) -> Result<ExportOutcome, ExportError> {
    let lists = backend.fetch_lists()?;
    if lists.is_empty() {
        return Ok(ExportOutcome::Empty);
    }

    let list_ids: Vec<_> = lists.iter().map(|l| l.id).collect();
    let items = backend.fetch_items(&list_ids)?;

    let path = directory.join(backup_filename(date));
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(BACKUP_HEADERS)?;
    for row in backup_rows(&lists, &items) {
        writer.write_record(&row)?;
    }
    writer.flush().map_err(std::io::Error::from)?;

    log::debug!("Backup written to {:?} ({} items)", path, items.len());
    Ok(ExportOutcome::Saved(path))
}

/// Join items with their lists into backup rows. Items whose list is missing
/// from the fetch are kept under "Desconocida".
pub fn backup_rows(lists: &[ShoppingList], items: &[ListItem]) -> Vec<[String; 10]> {
    items
        .iter()
        .map(|item| {
            let list_name = lists
                .iter()
                .find(|l| l.id == item.list_id)
                .map(|l| l.name.as_str())
                .unwrap_or("Desconocida");

            let estado = if item.is_purchased {
                "Comprado"
            } else {
                "Pendiente"
            };
            let recogido = if item.is_picked_up { "Sí" } else { "No" };

            [
                list_name.to_string(),
                item.name.clone(),
                format_price(item.price),
                item.brand.clone().unwrap_or_default(),
                item.model.clone().unwrap_or_default(),
                estado.to_string(),
                item.purchaser_name.clone().unwrap_or_default(),
                item.purchaser_phone.clone().unwrap_or_default(),
                item.purchase_date.clone().unwrap_or_default(),
                recogido.to_string(),
            ]
        })
        .collect()
}

#[cfg(test)]
#[path = "backup_tests.rs"]
mod backup_tests;
