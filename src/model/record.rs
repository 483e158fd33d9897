//! Normalized per-element records. Field names serialize to the column
//! headers the tables are reported with.

use serde::Serialize;

use super::measure::{render, serialize_measure, Measure};

/// Column layout shared by CSV export and the terminal browser.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// A door or window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Width", serialize_with = "serialize_measure")]
    pub width: Option<Measure>,
    #[serde(rename = "Height", serialize_with = "serialize_measure")]
    pub height: Option<Measure>,
}

impl TableRow for OpeningRecord {
    const HEADERS: &'static [&'static str] = &["Name", "ID", "Location", "Width", "Height"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.id.clone(),
            self.location.clone(),
            render(self.width),
            render(self.height),
        ]
    }
}

/// A beam, or the quantity part of a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Length", serialize_with = "serialize_measure")]
    pub length: Option<Measure>,
    #[serde(rename = "Cross Section Area", serialize_with = "serialize_measure")]
    pub cross_section_area: Option<Measure>,
    #[serde(rename = "Volume", serialize_with = "serialize_measure")]
    pub volume: Option<Measure>,
}

impl TableRow for MemberRecord {
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "ID",
        "Location",
        "Length",
        "Cross Section Area",
        "Volume",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.id.clone(),
            self.location.clone(),
            render(self.length),
            render(self.cross_section_area),
            render(self.volume),
        ]
    }
}

/// A column: member quantities plus the overall dimensions some schemas
/// declare on the entity itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnRecord {
    #[serde(flatten)]
    pub member: MemberRecord,
    #[serde(rename = "Height", serialize_with = "serialize_measure")]
    pub height: Option<Measure>,
    #[serde(rename = "Width", serialize_with = "serialize_measure")]
    pub width: Option<Measure>,
}

impl TableRow for ColumnRecord {
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "ID",
        "Location",
        "Length",
        "Cross Section Area",
        "Volume",
        "Height",
        "Width",
    ];

    fn cells(&self) -> Vec<String> {
        let mut cells = self.member.cells();
        cells.push(render(self.height));
        cells.push(render(self.width));
        cells
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceRecord {
    #[serde(rename = "Type")]
    pub space_type: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Area", serialize_with = "serialize_measure")]
    pub area: Option<Measure>,
    #[serde(rename = "Height", serialize_with = "serialize_measure")]
    pub height: Option<Measure>,
}

impl TableRow for SpaceRecord {
    const HEADERS: &'static [&'static str] = &["Type", "Name", "Location", "Area", "Height"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.space_type.clone(),
            self.name.clone(),
            self.location.clone(),
            render(self.area),
            render(self.height),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Elevation", serialize_with = "serialize_measure")]
    pub elevation: Option<Measure>,
}

impl TableRow for FloorRecord {
    const HEADERS: &'static [&'static str] = &["Name", "Elevation"];

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), render(self.elevation)]
    }
}
