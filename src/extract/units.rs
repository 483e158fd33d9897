//! Unit factor resolution from the model's declared SI units.

use tracing::debug;

use crate::error::ModelError;
use crate::model::{DimensionKind, UnitFactors};
use crate::parser::{schema, IfcModel};

/// Derives length, area and volume factors from the first
/// `IFCUNITASSIGNMENT` in the model. Kinds without a recognized SI unit keep
/// the factor 1; conversion-based units are ignored.
pub fn resolve_unit_factors(model: &IfcModel) -> Result<UnitFactors, ModelError> {
    let mut factors = UnitFactors::default();

    let Some(assignment) = model.by_type(schema::UNIT_ASSIGNMENT).next() else {
        debug!("no unit assignment, assuming SI base units");
        return Ok(factors);
    };

    for unit in model.related(assignment, "Units")? {
        if !IfcModel::is_a(unit, schema::SI_UNIT) {
            continue;
        }
        let Some(kind) = IfcModel::enumeration(unit, "UnitType").and_then(dimension_kind) else {
            continue;
        };
        let Some(name) = IfcModel::enumeration(unit, "Name") else {
            continue;
        };
        let canonical = canonical_unit_name(IfcModel::enumeration(unit, "Prefix"), name);

        match unit_factor(kind, &canonical) {
            Some(factor) => factors.set(kind, factor),
            None => debug!(unit = %canonical, ?kind, "unrecognized unit, keeping default factor"),
        }
    }

    debug!(
        length = factors.length,
        area = factors.area,
        volume = factors.volume,
        "resolved unit factors"
    );
    Ok(factors)
}

fn dimension_kind(unit_type: &str) -> Option<DimensionKind> {
    match unit_type {
        "LENGTHUNIT" => Some(DimensionKind::Length),
        "AREAUNIT" => Some(DimensionKind::Area),
        "VOLUMEUNIT" => Some(DimensionKind::Volume),
        _ => None,
    }
}

/// Folds an SI prefix and unit name into one name:
/// `(.MILLI., .METRE.)` becomes `MILLIMETER`,
/// `(.CENTI., .SQUARE_METRE.)` becomes `SQUARE_CENTIMETER`.
fn canonical_unit_name(prefix: Option<&str>, name: &str) -> String {
    let base = name.replace("METRE", "METER");
    match prefix {
        Some(prefix) if base.contains("METER") && !base.contains(&format!("{prefix}METER")) => {
            base.replacen("METER", &format!("{prefix}METER"), 1)
        }
        _ => base,
    }
}

fn unit_factor(kind: DimensionKind, name: &str) -> Option<f64> {
    match (kind, name) {
        (DimensionKind::Length, "MILLIMETER") => Some(1000.0),
        (DimensionKind::Length, "CENTIMETER") => Some(100.0),
        (DimensionKind::Length, "METER")
        | (DimensionKind::Area, "SQUARE_METER")
        | (DimensionKind::Volume, "CUBIC_METER") => Some(1.0),
        (DimensionKind::Area, "SQUARE_CENTIMETER") => Some(10_000.0),
        (DimensionKind::Volume, "CUBIC_CENTIMETER") => Some(1_000_000.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn model_with_units(units: &str) -> IfcModel {
        IfcModel::from_step(&format!(
            "ISO-10303-21;\nHEADER;\nFILE_SCHEMA(('IFC4'));\nENDSEC;\nDATA;\n{units}\nENDSEC;\n"
        ))
        .unwrap()
    }

    #[test]
    fn defaults_to_one_without_units() {
        let model = model_with_units("#1=IFCWALL('w',$,$,$);");
        assert_eq!(resolve_unit_factors(&model).unwrap(), UnitFactors::default());
    }

    #[test]
    fn millimeter_length_unit() {
        let model = model_with_units(
            "#1=IFCSIUNIT(*,.LENGTHUNIT.,.MILLI.,.METRE.);
#2=IFCSIUNIT(*,.AREAUNIT.,$,.SQUARE_METRE.);
#3=IFCSIUNIT(*,.VOLUMEUNIT.,$,.CUBIC_METRE.);
#4=IFCUNITASSIGNMENT((#1,#2,#3));",
        );
        let factors = resolve_unit_factors(&model).unwrap();
        assert_eq!(factors.length, 1000.0);
        assert_eq!(factors.area, 1.0);
        assert_eq!(factors.volume, 1.0);
    }

    #[test]
    fn centimeter_units_across_kinds() {
        let model = model_with_units(
            "#1=IFCSIUNIT(*,.LENGTHUNIT.,.CENTI.,.METRE.);
#2=IFCSIUNIT(*,.AREAUNIT.,.CENTI.,.SQUARE_METRE.);
#3=IFCSIUNIT(*,.VOLUMEUNIT.,.CENTI.,.CUBIC_METRE.);
#4=IFCUNITASSIGNMENT((#1,#2,#3));",
        );
        let factors = resolve_unit_factors(&model).unwrap();
        assert_eq!(factors.get(DimensionKind::Length), 100.0);
        assert_eq!(factors.get(DimensionKind::Area), 10_000.0);
        assert_eq!(factors.get(DimensionKind::Volume), 1_000_000.0);
    }

    #[test]
    fn literal_unit_names_are_accepted() {
        let model = model_with_units(
            "#1=IFCSIUNIT(*,.LENGTHUNIT.,$,.MILLIMETER.);
#2=IFCUNITASSIGNMENT((#1));",
        );
        assert_eq!(resolve_unit_factors(&model).unwrap().length, 1000.0);
    }

    #[test]
    fn unrecognized_and_non_si_units_keep_defaults() {
        let model = model_with_units(
            "#1=IFCSIUNIT(*,.LENGTHUNIT.,.KILO.,.METRE.);
#2=IFCCONVERSIONBASEDUNIT(#9,.AREAUNIT.,'square foot',#8);
#3=IFCUNITASSIGNMENT((#1,#2));
#8=IFCMEASUREWITHUNIT(IFCAREAMEASURE(0.0929),#1);
#9=IFCDIMENSIONALEXPONENTS(2,0,0,0,0,0,0);",
        );
        assert_eq!(resolve_unit_factors(&model).unwrap(), UnitFactors::default());
    }

    #[test]
    fn only_first_assignment_is_consulted() {
        let model = model_with_units(
            "#1=IFCSIUNIT(*,.LENGTHUNIT.,$,.METRE.);
#2=IFCSIUNIT(*,.LENGTHUNIT.,.MILLI.,.METRE.);
#3=IFCUNITASSIGNMENT((#1));
#4=IFCUNITASSIGNMENT((#2));",
        );
        assert_eq!(resolve_unit_factors(&model).unwrap().length, 1.0);
    }

    #[test]
    fn canonical_names() {
        assert_eq!(canonical_unit_name(Some("MILLI"), "METRE"), "MILLIMETER");
        assert_eq!(canonical_unit_name(None, "CUBIC_METRE"), "CUBIC_METER");
        assert_eq!(canonical_unit_name(Some("CENTI"), "SQUARE_METRE"), "SQUARE_CENTIMETER");
        assert_eq!(canonical_unit_name(Some("MILLI"), "MILLIMETER"), "MILLIMETER");
        assert_eq!(canonical_unit_name(Some("MILLI"), "GRAM"), "GRAM");
    }
}
