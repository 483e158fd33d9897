//! Per-category record builders.

use tracing::debug;

use super::containment::ContainmentIndex;
use super::naming::split_name_and_id;
use super::quantities::QuantityIndex;
use crate::error::ModelError;
use crate::model::{
    ColumnRecord, DimensionKind, ElementCategory, FloorRecord, Measure, MeasureUnit,
    MemberRecord, OpeningRecord, SpaceRecord, UnitFactors,
};
use crate::parser::{IfcModel, StepEntity};

/// Everything the per-category builders share during one run.
pub struct Extractor<'a> {
    pub model: &'a IfcModel,
    pub factors: UnitFactors,
    pub containment: ContainmentIndex,
    pub space_containment: ContainmentIndex,
    pub quantities: QuantityIndex,
}

impl Extractor<'_> {
    fn measure(&self, value: f64, kind: DimensionKind, unit: MeasureUnit) -> Measure {
        Measure::new(value * self.factors.get(kind), unit)
    }

    /// A length read straight off the entity. Types that do not declare the
    /// attribute report `None`.
    fn direct_length(
        &self,
        entity: &StepEntity,
        attribute: &'static str,
    ) -> Result<Option<Measure>, ModelError> {
        Ok(IfcModel::real(entity, attribute)?
            .map(|v| self.measure(v, DimensionKind::Length, MeasureUnit::Millimeter)))
    }

    fn name_and_id(entity: &StepEntity, category: ElementCategory) -> (String, String) {
        split_name_and_id(IfcModel::label(entity, "Name").unwrap_or(category.unnamed()))
    }

    fn entities(&self, category: ElementCategory) -> impl Iterator<Item = &StepEntity> + '_ {
        self.model.by_type(category.entity_types())
    }

    /// Doors or windows, dimensioned by their overall height and width.
    pub fn openings(&self, category: ElementCategory) -> Result<Vec<OpeningRecord>, ModelError> {
        self.entities(category)
            .map(|entity| {
                let (name, id) = Self::name_and_id(entity, category);
                Ok(OpeningRecord {
                    name,
                    id,
                    location: self.containment.location(entity.id).to_string(),
                    width: self.direct_length(entity, "OverallWidth")?,
                    height: self.direct_length(entity, "OverallHeight")?,
                })
            })
            .collect()
    }

    /// Beams or columns, dimensioned from their element quantity sets.
    fn member(
        &self,
        entity: &StepEntity,
        category: ElementCategory,
        volume_unit: MeasureUnit,
    ) -> MemberRecord {
        let (name, id) = Self::name_and_id(entity, category);
        let mut record = MemberRecord {
            name,
            id,
            location: self.containment.location(entity.id).to_string(),
            length: None,
            cross_section_area: None,
            volume: None,
        };

        for quantity in self.quantities.for_element(entity.id) {
            match quantity.kind {
                DimensionKind::Length => {
                    record.length =
                        Some(self.measure(quantity.value, quantity.kind, MeasureUnit::Millimeter));
                }
                DimensionKind::Area if quantity.name.contains("CrossSectionArea") => {
                    record.cross_section_area =
                        Some(self.measure(quantity.value, quantity.kind, MeasureUnit::SquareMeter));
                }
                DimensionKind::Area => {}
                DimensionKind::Volume => {
                    record.volume = Some(self.measure(quantity.value, quantity.kind, volume_unit));
                }
            }
        }

        record
    }

    pub fn beams(&self) -> Vec<MemberRecord> {
        self.entities(ElementCategory::Beam)
            .map(|entity| self.member(entity, ElementCategory::Beam, MeasureUnit::CubicMeter))
            .collect()
    }

    /// Column volumes keep the `mm³` suffix existing reports were built on.
    pub fn columns(&self) -> Result<Vec<ColumnRecord>, ModelError> {
        self.entities(ElementCategory::Column)
            .map(|entity| {
                Ok(ColumnRecord {
                    member: self.member(
                        entity,
                        ElementCategory::Column,
                        MeasureUnit::CubicMillimeter,
                    ),
                    height: self.direct_length(entity, "OverallHeight")?,
                    width: self.direct_length(entity, "OverallWidth")?,
                })
            })
            .collect()
    }

    /// Spaces take area and height from quantities only. Every space is kept:
    /// both fields always exist on the record, resolved or not.
    pub fn spaces(&self) -> Vec<SpaceRecord> {
        let unnamed = ElementCategory::Space.unnamed();
        self.entities(ElementCategory::Space)
            .map(|entity| {
                let mut record = SpaceRecord {
                    space_type: IfcModel::label(entity, "LongName").unwrap_or(unnamed).to_string(),
                    name: IfcModel::label(entity, "Name").unwrap_or(unnamed).to_string(),
                    location: self.space_containment.location(entity.id).to_string(),
                    area: None,
                    height: None,
                };
                for quantity in self.quantities.for_element(entity.id) {
                    match quantity.kind {
                        DimensionKind::Area => {
                            record.area = Some(self.measure(
                                quantity.value,
                                quantity.kind,
                                MeasureUnit::SquareMeter,
                            ));
                        }
                        DimensionKind::Length => {
                            record.height = Some(self.measure(
                                quantity.value,
                                quantity.kind,
                                MeasureUnit::Millimeter,
                            ));
                        }
                        DimensionKind::Volume => {}
                    }
                }
                record
            })
            .collect()
    }

    pub fn floors(&self) -> Result<Vec<FloorRecord>, ModelError> {
        self.entities(ElementCategory::Floor)
            .map(|entity| {
                let record = FloorRecord {
                    name: IfcModel::label(entity, "Name")
                        .unwrap_or(ElementCategory::Floor.unnamed())
                        .to_string(),
                    elevation: self.direct_length(entity, "Elevation")?,
                };
                debug!(floor = %record.name, "extracted floor");
                Ok(record)
            })
            .collect()
    }
}
