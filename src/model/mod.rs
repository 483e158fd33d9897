pub mod category;
pub mod measure;
pub mod record;
pub mod tables;
pub mod units;

pub use category::ElementCategory;
pub use measure::{Measure, MeasureUnit, UNKNOWN};
pub use record::{ColumnRecord, FloorRecord, MemberRecord, OpeningRecord, SpaceRecord, TableRow};
pub use tables::ModelTables;
pub use units::{DimensionKind, UnitFactors};
