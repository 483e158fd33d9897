use crate::error::ExportError;
use crate::model::ModelTables;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes every table, keyed by table name, as one pretty-printed document.
pub fn export_json<P: AsRef<Path>>(tables: &ModelTables, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(tables)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    tracing::info!(path = %path_ref.display(), "Exported tables to JSON");
    Ok(())
}
