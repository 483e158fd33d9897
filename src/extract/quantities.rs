use std::collections::HashMap;

use tracing::debug;

use crate::error::ModelError;
use crate::model::DimensionKind;
use crate::parser::{schema, IfcModel, StepEntity};

/// One simple quantity from an element quantity set.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub name: String,
    pub kind: DimensionKind,
    pub value: f64,
}

/// Element id → the quantities attached to it through
/// `IFCRELDEFINESBYPROPERTIES` / `IFCELEMENTQUANTITY`, in relationship and
/// set order.
#[derive(Debug, Default)]
pub struct QuantityIndex {
    sets: HashMap<u64, Vec<Quantity>>,
    by_element: HashMap<u64, Vec<u64>>,
}

impl QuantityIndex {
    pub fn build(model: &IfcModel) -> Result<Self, ModelError> {
        let mut index = Self::default();

        for rel in model.by_type(schema::REL_DEFINES_BY_PROPERTIES) {
            // IFC4 allows a set of definitions here, IFC2X3 a single one.
            let mut set_ids = Vec::new();
            for definition in model.related(rel, "RelatingPropertyDefinition")? {
                if !IfcModel::is_a(definition, schema::ELEMENT_QUANTITY) {
                    continue;
                }
                if !index.sets.contains_key(&definition.id) {
                    let quantities = read_quantity_set(model, definition)?;
                    index.sets.insert(definition.id, quantities);
                }
                set_ids.push(definition.id);
            }
            if set_ids.is_empty() {
                continue;
            }

            for element in IfcModel::reference_ids(rel, "RelatedObjects") {
                index
                    .by_element
                    .entry(element)
                    .or_default()
                    .extend(set_ids.iter().copied());
            }
        }

        debug!(
            sets = index.sets.len(),
            elements = index.by_element.len(),
            "quantity index built"
        );
        Ok(index)
    }

    /// Quantities of `element_id`; later entries should override earlier ones.
    pub fn for_element(&self, element_id: u64) -> impl Iterator<Item = &Quantity> + '_ {
        self.by_element
            .get(&element_id)
            .into_iter()
            .flatten()
            .filter_map(|set| self.sets.get(set))
            .flatten()
    }
}

fn read_quantity_set(model: &IfcModel, set: &StepEntity) -> Result<Vec<Quantity>, ModelError> {
    let mut quantities = Vec::new();

    for quantity in model.related(set, "Quantities")? {
        let (kind, attribute) = if IfcModel::is_a(quantity, schema::QUANTITY_LENGTH) {
            (DimensionKind::Length, "LengthValue")
        } else if IfcModel::is_a(quantity, schema::QUANTITY_AREA) {
            (DimensionKind::Area, "AreaValue")
        } else if IfcModel::is_a(quantity, schema::QUANTITY_VOLUME) {
            (DimensionKind::Volume, "VolumeValue")
        } else {
            continue;
        };

        let Some(value) = IfcModel::real(quantity, attribute)? else {
            continue;
        };
        quantities.push(Quantity {
            name: IfcModel::text(quantity, "Name").unwrap_or_default().to_string(),
            kind,
            value,
        });
    }

    Ok(quantities)
}
