use std::path::Path;

use tracing::info;

use crate::error::{ModelError, ParseError};
use crate::parser::schema::{self, attribute_index};
use crate::parser::step::{StepEntity, StepFile, StepValue};

/// Read-only view over an opened IFC file with attribute access by name.
#[derive(Debug)]
pub struct IfcModel {
    step: StepFile,
}

impl IfcModel {
    /// Reads and parses an IFC file.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::FileRead`] if the file cannot be read and
    /// [`ParseError::InvalidStep`] if its content is not a STEP file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ParseError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_step(&content)?;
        info!(
            path = %path.display(),
            schema = %model.schema(),
            entities = model.step.len(),
            "opened IFC model"
        );
        Ok(model)
    }

    pub fn from_step(content: &str) -> Result<Self, ParseError> {
        Ok(Self {
            step: StepFile::parse(content)?,
        })
    }

    #[must_use]
    pub fn schema(&self) -> &str {
        &self.step.schema
    }

    /// Entities of the given types (a type and its subtypes), in file order.
    pub fn by_type<'a>(
        &'a self,
        types: &'a [&'a str],
    ) -> impl Iterator<Item = &'a StepEntity> + 'a {
        self.step.entities_of_type(types)
    }

    /// Resolves a reference found on `from`.
    pub fn resolve(&self, from: &StepEntity, id: u64) -> Result<&StepEntity, ModelError> {
        self.step
            .get_entity(id)
            .ok_or(ModelError::DanglingReference { from: from.id, to: id })
    }

    #[must_use]
    pub fn is_a(entity: &StepEntity, types: &[&str]) -> bool {
        types.contains(&entity.entity_type.as_str())
    }

    /// Value of a declared, non-null attribute.
    #[must_use]
    pub fn attribute<'a>(entity: &'a StepEntity, attribute: &str) -> Option<&'a StepValue> {
        let index = attribute_index(&entity.entity_type, attribute)?;
        entity
            .values
            .get(index)
            .filter(|v| !matches!(v, StepValue::Null | StepValue::Derived))
    }

    #[must_use]
    pub fn text<'a>(entity: &'a StepEntity, attribute: &str) -> Option<&'a str> {
        Self::attribute(entity, attribute).and_then(StepValue::as_str)
    }

    /// Text attribute that is set and not blank.
    #[must_use]
    pub fn label<'a>(entity: &'a StepEntity, attribute: &str) -> Option<&'a str> {
        Self::text(entity, attribute).filter(|s| !s.trim().is_empty())
    }

    #[must_use]
    pub fn enumeration<'a>(entity: &'a StepEntity, attribute: &str) -> Option<&'a str> {
        Self::attribute(entity, attribute).and_then(StepValue::as_enum)
    }

    /// Numeric attribute. A present value of another kind is a model error.
    pub fn real(entity: &StepEntity, attribute: &'static str) -> Result<Option<f64>, ModelError> {
        match Self::attribute(entity, attribute) {
            None => Ok(None),
            Some(value) => value.as_real().map(Some).ok_or_else(|| ModelError::UnexpectedValue {
                id: entity.id,
                entity_type: entity.entity_type.clone(),
                attribute,
                expected: "a number",
            }),
        }
    }

    /// Entities referenced by an attribute holding a reference or a list of them.
    pub fn related<'a>(
        &'a self,
        entity: &StepEntity,
        attribute: &str,
    ) -> Result<Vec<&'a StepEntity>, ModelError> {
        Self::attribute(entity, attribute)
            .map(StepValue::references)
            .unwrap_or_default()
            .into_iter()
            .map(|id| self.resolve(entity, id))
            .collect()
    }

    /// Raw reference ids of an attribute, without resolving them.
    #[must_use]
    pub fn reference_ids(entity: &StepEntity, attribute: &str) -> Vec<u64> {
        Self::attribute(entity, attribute)
            .map(StepValue::references)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn project_name(&self) -> String {
        self.by_type(schema::PROJECT)
            .next()
            .and_then(|p| Self::label(p, "Name"))
            .map_or_else(|| "Unknown Project".to_string(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = "ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#1=IFCPROJECT('p',$,'Tower',$,$,$,$,$,$);
#2=IFCDOOR('d',$,'Door',$,$,$,$,$,$,0.9);
#3=IFCCOLUMN('c',$,'Col',$,$,$,$,$);
#4=IFCRELAGGREGATES('r',$,$,$,#1,(#2,#99));
#5=IFCDOOR('e',$,'Bad',$,$,$,$,$,'tall',$);
ENDSEC;
";

    fn model() -> IfcModel {
        IfcModel::from_step(MODEL).unwrap()
    }

    #[test]
    fn null_attribute_reads_as_absent() {
        let m = model();
        let door = m.by_type(&["IFCDOOR"]).next().unwrap();
        assert_eq!(IfcModel::real(door, "OverallHeight").unwrap(), None);
        assert_eq!(IfcModel::real(door, "OverallWidth").unwrap(), Some(0.9));
    }

    #[test]
    fn blank_label_reads_as_absent() {
        let m = IfcModel::from_step(
            "ISO-10303-21;HEADER;FILE_SCHEMA(('IFC4'));ENDSEC;DATA;
#1=IFCPROJECT('p',$,'  ',$,$,$,$,$,$);
ENDSEC;",
        )
        .unwrap();
        let project = m.by_type(schema::PROJECT).next().unwrap();
        assert_eq!(IfcModel::text(project, "Name"), Some("  "));
        assert_eq!(IfcModel::label(project, "Name"), None);
        assert_eq!(m.project_name(), "Unknown Project");
    }

    #[test]
    fn undeclared_attribute_is_absent() {
        let m = model();
        let column = m.by_type(&["IFCCOLUMN"]).next().unwrap();
        assert!(IfcModel::attribute(column, "OverallHeight").is_none());
    }

    #[test]
    fn wrong_value_kind_is_an_error() {
        let m = model();
        let bad = m.by_type(&["IFCDOOR"]).nth(1).unwrap();
        assert!(IfcModel::real(bad, "OverallHeight").is_err());
    }

    #[test]
    fn dangling_reference_is_reported() {
        let m = model();
        let rel = m.by_type(&["IFCRELAGGREGATES"]).next().unwrap();
        let err = m.related(rel, "RelatedObjects").unwrap_err();
        assert_eq!(err.to_string(), "#4 references missing entity #99");
        assert_eq!(IfcModel::reference_ids(rel, "RelatedObjects"), vec![2, 99]);
    }

    #[test]
    fn project_name_and_schema() {
        let m = model();
        assert_eq!(m.project_name(), "Tower");
        assert_eq!(m.schema(), "IFC2X3");
    }
}
