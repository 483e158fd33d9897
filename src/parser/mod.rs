pub mod model;
pub mod schema;
pub mod step;

pub use crate::error::{ModelError, ParseError};
pub use model::IfcModel;
pub use step::{StepEntity, StepFile, StepValue};
