pub mod context;
pub mod error;
pub mod tools;

pub use context::{Identified, QueryContext};
pub use error::QueryError;
pub use tools::{dispatch, QueryTool};
