use serde::Serialize;

use super::{
    ColumnRecord, ElementCategory, FloorRecord, MemberRecord, OpeningRecord, SpaceRecord,
    UnitFactors,
};

/// Everything one extraction run produces. Built once, then only read.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelTables {
    pub project_name: String,
    pub schema: String,
    pub unit_factors: UnitFactors,
    pub doors: Vec<OpeningRecord>,
    pub windows: Vec<OpeningRecord>,
    pub beams: Vec<MemberRecord>,
    pub columns: Vec<ColumnRecord>,
    pub spaces: Vec<SpaceRecord>,
    pub floors: Vec<FloorRecord>,
}

impl ModelTables {
    #[must_use]
    pub fn count(&self, category: ElementCategory) -> usize {
        match category {
            ElementCategory::Door => self.doors.len(),
            ElementCategory::Window => self.windows.len(),
            ElementCategory::Beam => self.beams.len(),
            ElementCategory::Column => self.columns.len(),
            ElementCategory::Space => self.spaces.len(),
            ElementCategory::Floor => self.floors.len(),
        }
    }

    #[must_use]
    pub fn total_records(&self) -> usize {
        ElementCategory::ALL.iter().map(|c| self.count(*c)).sum()
    }
}
