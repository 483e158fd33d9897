use serde::Serializer;
use std::fmt;

/// Sentinel for a dimension that could not be resolved.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureUnit {
    Millimeter,
    SquareMeter,
    CubicMeter,
    CubicMillimeter,
}

impl MeasureUnit {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            MeasureUnit::Millimeter => "mm",
            MeasureUnit::SquareMeter => "m²",
            MeasureUnit::CubicMeter => "m³",
            MeasureUnit::CubicMillimeter => "mm³",
        }
    }
}

/// A scaled value and the unit suffix it is reported with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub unit: MeasureUnit,
}

impl Measure {
    #[must_use]
    pub fn new(value: f64, unit: MeasureUnit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_number(self.value), self.unit.suffix())
    }
}

/// Shortest decimal form after rounding to six places, so `0.9 * 1000`
/// prints as `900` rather than carrying floating point noise.
#[must_use]
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

/// `"900 mm"` for a resolved dimension, `"Unknown"` otherwise.
#[must_use]
pub fn render(measure: Option<Measure>) -> String {
    measure.map_or_else(|| UNKNOWN.to_string(), |m| m.to_string())
}

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
pub(crate) fn serialize_measure<S: Serializer>(
    measure: &Option<Measure>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&render(*measure))
}
