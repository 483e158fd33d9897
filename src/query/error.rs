use serde_json::{json, Value};
use thiserror::Error;

use crate::model::ElementCategory;

/// Recoverable lookup failures. Reported to the caller as `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("I have limited functions and can only retrieve information for types of doors, columns, beams and windows in your model.")]
    UnsupportedCategory,

    #[error("I can currently only retrieve information for lists of doors, columns, beams and windows in your model.")]
    UnsupportedListing,

    #[error("{}", not_found_message(.0))]
    NotFound(ElementCategory),

    #[error("{} ID not found.", .0.label())]
    IdNotFound(ElementCategory),

    #[error("Multiple {} with the name '{name}' found. Please provide the name and the ID of the {}.", .category.table_name(), .category.label().to_lowercase())]
    Ambiguous {
        category: ElementCategory,
        name: String,
    },

    #[error("{}", empty_message(.0))]
    Empty(ElementCategory),

    #[error("Unknown tool '{0}'.")]
    UnknownTool(String),

    #[error("Invalid arguments for '{tool}': {message}")]
    InvalidArguments { tool: &'static str, message: String },
}

impl QueryError {
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn not_found_message(category: &ElementCategory) -> String {
    match *category {
        ElementCategory::Space => {
            "Space or room not found. Please give the correct name of the room.".to_string()
        }
        other => format!(
            "{} not found. Please give the correct name of the {}.",
            other.label(),
            other.label().to_lowercase()
        ),
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn empty_message(category: &ElementCategory) -> String {
    match *category {
        ElementCategory::Space => "No rooms or spaces found in the model.".to_string(),
        other => format!("No {} found in the model.", other.table_name()),
    }
}
