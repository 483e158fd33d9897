//! Lookups over extracted tables.
//!
//! Every query returns a JSON string: `{<field>: <value>}` on success,
//! `{"error": <message>}` on a miss. Values are the stored record strings,
//! unit suffix included.

use std::collections::HashSet;

use serde_json::{json, Map, Value};

use super::error::QueryError;
use crate::extract::NO_ID;
use crate::model::measure::render;
use crate::model::{
    ColumnRecord, ElementCategory, FloorRecord, MemberRecord, ModelTables, OpeningRecord,
    SpaceRecord,
};

/// A record that can be looked up by name and, where present, ID.
pub trait Identified {
    fn name(&self) -> &str;

    fn id(&self) -> &str {
        NO_ID
    }
}

impl Identified for OpeningRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for MemberRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ColumnRecord {
    fn name(&self) -> &str {
        &self.member.name
    }

    fn id(&self) -> &str {
        &self.member.id
    }
}

impl Identified for SpaceRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for FloorRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

/// First record carrying `name`.
fn first_named<'r, R: Identified>(
    records: &'r [R],
    name: &str,
    category: ElementCategory,
) -> Result<&'r R, QueryError> {
    records
        .iter()
        .find(|r| r.name() == name)
        .ok_or(QueryError::NotFound(category))
}

/// Record matching `name`, disambiguated by `id` when several share the name.
fn resolve<'r, R: Identified>(
    records: &'r [R],
    name: &str,
    id: Option<&str>,
    category: ElementCategory,
) -> Result<&'r R, QueryError> {
    let matches: Vec<&R> = records.iter().filter(|r| r.name() == name).collect();
    if matches.is_empty() {
        return Err(QueryError::NotFound(category));
    }

    match id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => matches
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or(QueryError::IdNotFound(category)),
        None if matches.len() == 1 => Ok(matches[0]),
        None => Err(QueryError::Ambiguous {
            category,
            name: name.to_string(),
        }),
    }
}

/// Distinct names in first-seen order.
fn unique<'r>(names: impl Iterator<Item = &'r str>) -> Vec<&'r str> {
    let mut seen = HashSet::new();
    names.filter(|name| seen.insert(*name)).collect()
}

fn field(key: &str, value: impl Into<Value>) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value.into());
    Value::Object(map)
}

fn finish(result: Result<Value, QueryError>) -> String {
    result.unwrap_or_else(|e| e.to_json()).to_string()
}

/// Read-only access to one extraction run's tables.
#[derive(Debug, Clone, Copy)]
pub struct QueryContext<'a> {
    tables: &'a ModelTables,
}

impl<'a> QueryContext<'a> {
    #[must_use]
    pub fn new(tables: &'a ModelTables) -> Self {
        Self { tables }
    }

    fn listable(
        element_type: &str,
        unsupported: QueryError,
    ) -> Result<ElementCategory, QueryError> {
        ElementCategory::from_table_name(element_type)
            .filter(|c| c.is_listable())
            .ok_or(unsupported)
    }

    fn names_and_ids(&self, category: ElementCategory) -> Vec<(&'a str, &'a str)> {
        fn pairs<R: Identified>(records: &[R]) -> Vec<(&str, &str)> {
            records.iter().map(|r| (r.name(), r.id())).collect()
        }
        let t = self.tables;
        match category {
            ElementCategory::Door => pairs(&t.doors),
            ElementCategory::Window => pairs(&t.windows),
            ElementCategory::Beam => pairs(&t.beams),
            ElementCategory::Column => pairs(&t.columns),
            ElementCategory::Space => pairs(&t.spaces),
            ElementCategory::Floor => pairs(&t.floors),
        }
    }

    /// Distinct names of one building-element category.
    #[must_use]
    pub fn list_elements_type(&self, element_type: &str) -> String {
        finish(Self::listable(element_type, QueryError::UnsupportedCategory).map(|category| {
            let names = unique(self.names_and_ids(category).into_iter().map(|(n, _)| n));
            field(category.table_name(), names)
        }))
    }

    /// Every element of a category as `{"Name", "ID"}` pairs.
    #[must_use]
    pub fn list_all_elements_with_ids(&self, element_type: &str) -> String {
        finish(Self::listable(element_type, QueryError::UnsupportedListing).map(|category| {
            let rows: Vec<Value> = self
                .names_and_ids(category)
                .into_iter()
                .map(|(name, id)| json!({ "Name": name, "ID": id }))
                .collect();
            field(category.table_name(), rows)
        }))
    }

    #[must_use]
    pub fn list_spaces(&self) -> String {
        self.list_names(ElementCategory::Space)
    }

    #[must_use]
    pub fn list_floors(&self) -> String {
        self.list_names(ElementCategory::Floor)
    }

    fn list_names(&self, category: ElementCategory) -> String {
        let names = unique(self.names_and_ids(category).into_iter().map(|(n, _)| n));
        finish(if names.is_empty() {
            Err(QueryError::Empty(category))
        } else {
            Ok(field(category.table_name(), names))
        })
    }

    fn space(&self, name: &str) -> Result<&'a SpaceRecord, QueryError> {
        first_named(&self.tables.spaces, name, ElementCategory::Space)
    }

    #[must_use]
    pub fn get_space_area(&self, space_name: &str) -> String {
        finish(self.space(space_name).map(|s| field("area", render(s.area))))
    }

    #[must_use]
    pub fn get_space_height(&self, space_name: &str) -> String {
        finish(self.space(space_name).map(|s| field("height", render(s.height))))
    }

    #[must_use]
    pub fn get_space_location(&self, space_name: &str) -> String {
        finish(self.space(space_name).map(|s| field("location", s.location.as_str())))
    }

    #[must_use]
    pub fn get_window_width(&self, window_name: &str) -> String {
        finish(
            first_named(&self.tables.windows, window_name, ElementCategory::Window)
                .map(|w| field("width", render(w.width))),
        )
    }

    #[must_use]
    pub fn get_window_height(&self, window_name: &str) -> String {
        finish(
            first_named(&self.tables.windows, window_name, ElementCategory::Window)
                .map(|w| field("height", render(w.height))),
        )
    }

    #[must_use]
    pub fn get_window_location(&self, window_name: &str, window_id: Option<&str>) -> String {
        finish(
            resolve(&self.tables.windows, window_name, window_id, ElementCategory::Window)
                .map(|w| field("location", w.location.as_str())),
        )
    }

    #[must_use]
    pub fn get_door_width(&self, door_name: &str) -> String {
        finish(
            first_named(&self.tables.doors, door_name, ElementCategory::Door)
                .map(|d| field("width", render(d.width))),
        )
    }

    #[must_use]
    pub fn get_door_height(&self, door_name: &str) -> String {
        finish(
            first_named(&self.tables.doors, door_name, ElementCategory::Door)
                .map(|d| field("height", render(d.height))),
        )
    }

    #[must_use]
    pub fn get_door_location(&self, door_name: &str, door_id: Option<&str>) -> String {
        finish(
            resolve(&self.tables.doors, door_name, door_id, ElementCategory::Door)
                .map(|d| field("location", d.location.as_str())),
        )
    }

    #[must_use]
    pub fn get_beam_length(&self, beam_name: &str, beam_id: Option<&str>) -> String {
        finish(
            resolve(&self.tables.beams, beam_name, beam_id, ElementCategory::Beam)
                .map(|b| field("length", render(b.length))),
        )
    }

    #[must_use]
    pub fn get_beam_volume(&self, beam_name: &str, beam_id: Option<&str>) -> String {
        finish(
            resolve(&self.tables.beams, beam_name, beam_id, ElementCategory::Beam)
                .map(|b| field("volume", render(b.volume))),
        )
    }

    #[must_use]
    pub fn get_beam_cross_section_area(&self, beam_name: &str) -> String {
        finish(
            first_named(&self.tables.beams, beam_name, ElementCategory::Beam)
                .map(|b| field("cross_section_area", render(b.cross_section_area))),
        )
    }

    #[must_use]
    pub fn get_beam_location(&self, beam_name: &str, beam_id: Option<&str>) -> String {
        finish(
            resolve(&self.tables.beams, beam_name, beam_id, ElementCategory::Beam)
                .map(|b| field("location", b.location.as_str())),
        )
    }

    #[must_use]
    pub fn get_column_length(&self, column_name: &str, column_id: Option<&str>) -> String {
        finish(
            resolve(&self.tables.columns, column_name, column_id, ElementCategory::Column)
                .map(|c| field("length", render(c.member.length))),
        )
    }

    #[must_use]
    pub fn get_column_cross_section_area(&self, column_name: &str) -> String {
        finish(
            first_named(&self.tables.columns, column_name, ElementCategory::Column)
                .map(|c| field("cross_section_area", render(c.member.cross_section_area))),
        )
    }

    #[must_use]
    pub fn get_column_volume(&self, column_name: &str, column_id: Option<&str>) -> String {
        finish(
            resolve(&self.tables.columns, column_name, column_id, ElementCategory::Column)
                .map(|c| field("volume", render(c.member.volume))),
        )
    }

    #[must_use]
    pub fn get_column_location(&self, column_name: &str, column_id: Option<&str>) -> String {
        finish(
            resolve(&self.tables.columns, column_name, column_id, ElementCategory::Column)
                .map(|c| field("location", c.member.location.as_str())),
        )
    }

    #[must_use]
    pub fn get_floor_elevation(&self, floor_name: &str) -> String {
        finish(
            first_named(&self.tables.floors, floor_name, ElementCategory::Floor)
                .map(|f| field("elevation", render(f.elevation))),
        )
    }
}
