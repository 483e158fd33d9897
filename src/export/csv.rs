use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExportError;
use crate::model::{ElementCategory, ModelTables, TableRow};

/// Writes one `<table>.csv` per category into `dir`, creating it if needed.
/// Returns the written paths in category order.
pub fn export_csv<P: AsRef<Path>>(
    tables: &ModelTables,
    dir: P,
) -> Result<Vec<PathBuf>, ExportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| ExportError::FileCreate {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(ElementCategory::ALL.len());
    for category in ElementCategory::ALL {
        let path = dir.join(format!("{}.csv", category.table_name()));
        match category {
            ElementCategory::Door => write_table(&path, &tables.doors)?,
            ElementCategory::Window => write_table(&path, &tables.windows)?,
            ElementCategory::Beam => write_table(&path, &tables.beams)?,
            ElementCategory::Column => write_table(&path, &tables.columns)?,
            ElementCategory::Space => write_table(&path, &tables.spaces)?,
            ElementCategory::Floor => write_table(&path, &tables.floors)?,
        }
        written.push(path);
    }

    info!(dir = %dir.display(), "Exported {} tables to CSV", written.len());
    Ok(written)
}

fn write_table<R: TableRow>(path: &Path, rows: &[R]) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(R::HEADERS)?;
    for row in rows {
        writer.write_record(row.cells())?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
