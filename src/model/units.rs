use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    Length,
    Area,
    Volume,
}

/// Multipliers applied to raw model values, one per dimension kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitFactors {
    pub length: f64,
    pub area: f64,
    pub volume: f64,
}

impl Default for UnitFactors {
    fn default() -> Self {
        Self {
            length: 1.0,
            area: 1.0,
            volume: 1.0,
        }
    }
}

impl UnitFactors {
    #[must_use]
    pub fn get(&self, kind: DimensionKind) -> f64 {
        match kind {
            DimensionKind::Length => self.length,
            DimensionKind::Area => self.area,
            DimensionKind::Volume => self.volume,
        }
    }

    pub(crate) fn set(&mut self, kind: DimensionKind, factor: f64) {
        match kind {
            DimensionKind::Length => self.length = factor,
            DimensionKind::Area => self.area = factor,
            DimensionKind::Volume => self.volume = factor,
        }
    }
}
