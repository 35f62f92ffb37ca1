mod backup;

pub use backup::{
    BACKUP_HEADERS, ExportError, ExportOutcome, backup_filename, backup_rows, export_backup,
};
