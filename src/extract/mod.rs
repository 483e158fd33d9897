//! Model-to-table extraction.
//!
//! Opens an IFC file, resolves its unit factors, indexes storey containment
//! and element quantities once, then builds one normalized table per
//! element category.

pub mod containment;
pub mod elements;
pub mod naming;
pub mod quantities;
pub mod units;

use std::path::Path;

use tracing::{info, warn};

use crate::error::ExtractError;
use crate::model::{ElementCategory, ModelTables};
use crate::parser::IfcModel;

pub use containment::ContainmentIndex;
pub use elements::Extractor;
pub use naming::{split_name_and_id, NO_ID};
pub use quantities::{Quantity, QuantityIndex};
pub use units::resolve_unit_factors;

/// Extracts the door, window, beam, column, space and floor tables from an
/// IFC file.
///
/// Any failure while opening or walking the model aborts the whole run; no
/// partial tables are returned. Missing attributes and quantities are not
/// failures, they show up as `"Unknown"` fields.
///
/// # Errors
///
/// Returns [`ExtractError`] if the file cannot be read, is not a STEP file,
/// or holds references to entities that do not exist.
///
/// # Example
///
/// ```no_run
/// use ifc_assistant::extract::extract_ifc_data;
///
/// let tables = extract_ifc_data("model.ifc")?;
/// for door in &tables.doors {
///     println!("{} ({}) on {}", door.name, door.id, door.location);
/// }
/// # Ok::<(), ifc_assistant::error::ExtractError>(())
/// ```
pub fn extract_ifc_data<P: AsRef<Path>>(path: P) -> Result<ModelTables, ExtractError> {
    let result = IfcModel::open(path)
        .map_err(ExtractError::from)
        .and_then(|model| extract_tables(&model));
    if let Err(err) = &result {
        warn!(error = %err, "extraction failed");
    }
    result
}

/// Builds all six tables from an already opened model.
pub fn extract_tables(model: &IfcModel) -> Result<ModelTables, ExtractError> {
    let extractor = Extractor {
        model,
        factors: resolve_unit_factors(model)?,
        containment: ContainmentIndex::for_elements(model)?,
        space_containment: ContainmentIndex::for_spaces(model)?,
        quantities: QuantityIndex::build(model)?,
    };

    let tables = ModelTables {
        project_name: model.project_name(),
        schema: model.schema().to_string(),
        unit_factors: extractor.factors,
        doors: extractor.openings(ElementCategory::Door)?,
        windows: extractor.openings(ElementCategory::Window)?,
        beams: extractor.beams(),
        columns: extractor.columns()?,
        spaces: extractor.spaces(),
        floors: extractor.floors()?,
    };

    info!(
        project = %tables.project_name,
        doors = tables.doors.len(),
        windows = tables.windows.len(),
        beams = tables.beams.len(),
        columns = tables.columns.len(),
        spaces = tables.spaces.len(),
        floors = tables.floors.len(),
        "extracted model tables"
    );
    Ok(tables)
}
