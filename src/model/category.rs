use serde::Serialize;
use std::fmt;

/// The element categories the assistant extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Door,
    Window,
    Beam,
    Column,
    Space,
    Floor,
}

impl ElementCategory {
    pub const ALL: [ElementCategory; 6] = [
        ElementCategory::Door,
        ElementCategory::Window,
        ElementCategory::Beam,
        ElementCategory::Column,
        ElementCategory::Space,
        ElementCategory::Floor,
    ];

    /// IFC entity types belonging to the category, subtypes included.
    #[must_use]
    pub fn entity_types(self) -> &'static [&'static str] {
        match self {
            ElementCategory::Door => &["IFCDOOR", "IFCDOORSTANDARDCASE"],
            ElementCategory::Window => &["IFCWINDOW", "IFCWINDOWSTANDARDCASE"],
            ElementCategory::Beam => &["IFCBEAM", "IFCBEAMSTANDARDCASE"],
            ElementCategory::Column => &["IFCCOLUMN", "IFCCOLUMNSTANDARDCASE"],
            ElementCategory::Space => &["IFCSPACE"],
            ElementCategory::Floor => &["IFCBUILDINGSTOREY"],
        }
    }

    /// Plural table name, e.g. `doors`.
    #[must_use]
    pub fn table_name(self) -> &'static str {
        match self {
            ElementCategory::Door => "doors",
            ElementCategory::Window => "windows",
            ElementCategory::Beam => "beams",
            ElementCategory::Column => "columns",
            ElementCategory::Space => "spaces",
            ElementCategory::Floor => "floors",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ElementCategory::Door => "Door",
            ElementCategory::Window => "Window",
            ElementCategory::Beam => "Beam",
            ElementCategory::Column => "Column",
            ElementCategory::Space => "Space",
            ElementCategory::Floor => "Floor",
        }
    }

    /// Name recorded for an element whose Name attribute is unset.
    #[must_use]
    pub fn unnamed(self) -> &'static str {
        match self {
            ElementCategory::Door => "Unnamed Door",
            ElementCategory::Window => "Unnamed Window",
            ElementCategory::Beam => "Unnamed Beam",
            ElementCategory::Column => "Unnamed Column",
            ElementCategory::Space => "Unnamed Space",
            ElementCategory::Floor => "Unnamed Floor",
        }
    }

    /// Categories the listing tools answer for.
    #[must_use]
    pub fn is_listable(self) -> bool {
        matches!(
            self,
            ElementCategory::Door
                | ElementCategory::Window
                | ElementCategory::Beam
                | ElementCategory::Column
        )
    }

    /// Parses a table name, ignoring case.
    #[must_use]
    pub fn from_table_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.table_name() == name)
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_round_trip() {
        for category in ElementCategory::ALL {
            assert_eq!(ElementCategory::from_table_name(category.table_name()), Some(category));
        }
        assert_eq!(ElementCategory::from_table_name(" Doors "), Some(ElementCategory::Door));
        assert_eq!(ElementCategory::from_table_name("walls"), None);
    }

    #[test]
    fn only_building_elements_are_listable() {
        let listable: Vec<_> = ElementCategory::ALL
            .into_iter()
            .filter(|c| c.is_listable())
            .map(ElementCategory::table_name)
            .collect();
        assert_eq!(listable, vec!["doors", "windows", "beams", "columns"]);
    }
}
