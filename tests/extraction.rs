mod common;

use common::{office_tables, write_model, OFFICE};
use ifc_assistant::extract::extract_ifc_data;
use ifc_assistant::model::measure::render;
use ifc_assistant::model::UnitFactors;
use pretty_assertions::assert_eq;

#[test]
fn resolves_millimetre_length_unit() {
    let tables = office_tables();
    assert_eq!(
        tables.unit_factors,
        UnitFactors {
            length: 1000.0,
            area: 1.0,
            volume: 1.0,
        }
    );
    assert_eq!(tables.project_name, "Office Block");
    assert_eq!(tables.schema, "IFC4");
}

#[test]
fn doors_carry_scaled_dimensions_and_split_ids() {
    let tables = office_tables();
    let first = &tables.doors[0];
    assert_eq!(first.name, "Single Flush");
    assert_eq!(first.id, "100");
    assert_eq!(first.location, "Level 1");
    assert_eq!(render(first.width), "900 mm");
    assert_eq!(render(first.height), "2100 mm");

    let second = &tables.doors[1];
    assert_eq!(second.location, "Level 2");
    assert_eq!(render(second.width), "Unknown");
}

#[test]
fn window_without_id_gets_placeholder() {
    let tables = office_tables();
    assert_eq!(tables.windows.len(), 1);
    assert_eq!(tables.windows[0].id, "N/A");
    assert_eq!(render(tables.windows[0].width), "1500 mm");
}

#[test]
fn beam_and_column_volume_suffixes_differ() {
    let tables = office_tables();
    let beam = &tables.beams[0];
    assert_eq!(render(beam.length), "4000 mm");
    assert_eq!(render(beam.cross_section_area), "0.0078 m²");
    assert_eq!(render(beam.volume), "2.5 m³");

    let column = &tables.columns[0];
    assert_eq!(render(column.member.volume), "2.5 mm³");
    assert_eq!(column.member.location, "Level 2");
    // IFCCOLUMN declares no overall dimensions
    assert_eq!(render(column.height), "Unknown");
    assert_eq!(render(column.width), "Unknown");
}

#[test]
fn every_space_is_kept() {
    let tables = office_tables();
    assert_eq!(tables.spaces.len(), 2);

    let office = &tables.spaces[0];
    assert_eq!(office.space_type, "Office");
    assert_eq!(office.name, "101");
    assert_eq!(office.location, "Level 1");
    assert_eq!(render(office.area), "12.5 m²");
    assert_eq!(render(office.height), "2800 mm");

    let storage = &tables.spaces[1];
    assert_eq!(storage.location, "Unknown");
    assert_eq!(render(storage.area), "Unknown");
    assert_eq!(render(storage.height), "Unknown");
}

#[test]
fn floors_report_elevation() {
    let tables = office_tables();
    let floors: Vec<(String, String)> = tables
        .floors
        .iter()
        .map(|f| (f.name.clone(), render(f.elevation)))
        .collect();
    assert_eq!(
        floors,
        vec![
            ("Level 1".to_string(), "0 mm".to_string()),
            ("Level 2".to_string(), "3500 mm".to_string()),
        ]
    );
}

#[test]
fn model_without_units_uses_base_factors() {
    let content = OFFICE
        .replace("#2=IFCUNITASSIGNMENT((#3,#4,#5));\n", "")
        .replace(",#2);", ",$);");
    let (_dir, path) = write_model(&content);
    let tables = extract_ifc_data(&path).unwrap();
    assert_eq!(tables.unit_factors, UnitFactors::default());
    assert_eq!(render(tables.doors[0].width), "0.9 mm");
}

#[test]
fn missing_file_is_reported() {
    let err = extract_ifc_data("/nonexistent/model.ifc").unwrap_err();
    assert!(err.to_string().starts_with("Error processing IFC file"));
}

#[test]
fn dangling_relationship_aborts_extraction() {
    let content = OFFICE.replace("(#21,#31),#11)", "(#21,#31),#99)");
    let (_dir, path) = write_model(&content);
    let err = extract_ifc_data(&path).unwrap_err();
    assert!(err.to_string().contains("#99"));
}

#[test]
fn non_step_content_is_rejected() {
    let (_dir, path) = write_model("not an ifc file");
    let err = extract_ifc_data(&path).unwrap_err();
    assert!(err.to_string().starts_with("Error processing IFC file"));
}

const UNNAMED: &str = "ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#1=IFCBUILDINGSTOREY('0Lvl1',$,$,$,$,$,$,$,.ELEMENT.,0.);
#2=IFCBUILDINGSTOREY('0Lvl2',$,'',$,$,$,$,$,.ELEMENT.,3.);
#10=IFCDOOR('0Door1',$,$,$,$,$,$,$,$,$);
#11=IFCDOOR('0Door2',$,'',$,$,$,$,$,$,$);
#12=IFCWINDOW('0Win1',$,'  ',$,$,$,$,$,$,$);
#20=IFCBEAM('0Beam1',$,$,$,$,$,$,$,$);
#21=IFCCOLUMN('0Col1',$,'',$,$,$,$,$,$);
#30=IFCSPACE('0Sp1',$,$,$,$,$,$,'',.ELEMENT.,$,$);
#31=IFCSPACE('0Sp2',$,'',$,$,$,$,$,.ELEMENT.,$,$);
#40=IFCRELCONTAINEDINSPATIALSTRUCTURE('0Rel1',$,$,$,(#10,#11),#2);
ENDSEC;
END-ISO-10303-21;
";

#[test]
fn null_and_blank_names_fall_back_to_category_placeholder() {
    let (_dir, path) = write_model(UNNAMED);
    let tables = extract_ifc_data(&path).unwrap();

    let doors: Vec<(&str, &str, &str)> = tables
        .doors
        .iter()
        .map(|d| (d.name.as_str(), d.id.as_str(), d.location.as_str()))
        .collect();
    // the containing storey's name is blank too
    assert_eq!(
        doors,
        vec![
            ("Unnamed Door", "N/A", "Unknown"),
            ("Unnamed Door", "N/A", "Unknown"),
        ]
    );
    assert_eq!(tables.windows[0].name, "Unnamed Window");
    assert_eq!(tables.beams[0].name, "Unnamed Beam");
    assert_eq!(tables.columns[0].member.name, "Unnamed Column");

    let spaces: Vec<(&str, &str)> = tables
        .spaces
        .iter()
        .map(|s| (s.space_type.as_str(), s.name.as_str()))
        .collect();
    assert_eq!(
        spaces,
        vec![
            ("Unnamed Space", "Unnamed Space"),
            ("Unnamed Space", "Unnamed Space"),
        ]
    );

    let floors: Vec<&str> = tables.floors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(floors, vec!["Unnamed Floor", "Unnamed Floor"]);
    assert_eq!(tables.project_name, "Unknown Project");
}
