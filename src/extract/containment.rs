use std::collections::HashMap;

use tracing::debug;

use crate::error::ModelError;
use crate::model::UNKNOWN;
use crate::parser::{schema, IfcModel};

/// Element id → name of the building storey holding it.
///
/// Built once per extraction from one relationship kind. When several
/// relationships place the same element in a storey, the first in file
/// order wins.
#[derive(Debug, Default)]
pub struct ContainmentIndex {
    storeys: HashMap<u64, String>,
}

impl ContainmentIndex {
    /// Doors, windows, beams and columns: `IFCRELCONTAINEDINSPATIALSTRUCTURE`.
    pub fn for_elements(model: &IfcModel) -> Result<Self, ModelError> {
        Self::build(
            model,
            schema::REL_CONTAINED_IN_SPATIAL_STRUCTURE,
            "RelatedElements",
            "RelatingStructure",
        )
    }

    /// Spaces hang off their storey through `IFCRELAGGREGATES`.
    pub fn for_spaces(model: &IfcModel) -> Result<Self, ModelError> {
        Self::build(model, schema::REL_AGGREGATES, "RelatedObjects", "RelatingObject")
    }

    fn build(
        model: &IfcModel,
        relationship: &[&str],
        related: &str,
        relating: &str,
    ) -> Result<Self, ModelError> {
        let mut storeys = HashMap::new();

        for rel in model.by_type(relationship) {
            let Some(structure) = model.related(rel, relating)?.into_iter().next() else {
                continue;
            };
            if !IfcModel::is_a(structure, schema::BUILDING_STOREY) {
                continue;
            }
            let name = IfcModel::label(structure, "Name").unwrap_or(UNKNOWN);

            for element in IfcModel::reference_ids(rel, related) {
                storeys.entry(element).or_insert_with(|| name.to_string());
            }
        }

        debug!(relationship = relationship[0], placed = storeys.len(), "storey index built");
        Ok(Self { storeys })
    }

    /// Storey name for `element_id`, or `"Unknown"` when nothing contains it.
    #[must_use]
    pub fn location(&self, element_id: u64) -> &str {
        self.storeys.get(&element_id).map_or(UNKNOWN, String::as_str)
    }
}
