//! The closed set of query tools offered to the chat model.

use serde_json::{json, Map, Value};
use tracing::debug;

use super::context::QueryContext;
use super::error::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryTool {
    ListElementsType,
    ListAllElementsWithIds,
    ListSpaces,
    GetSpaceArea,
    GetSpaceHeight,
    GetSpaceLocation,
    GetWindowWidth,
    GetWindowHeight,
    GetWindowLocation,
    GetDoorWidth,
    GetDoorHeight,
    GetDoorLocation,
    GetBeamLength,
    GetBeamVolume,
    GetBeamCrossSectionArea,
    GetBeamLocation,
    GetColumnLength,
    GetColumnCrossSectionArea,
    GetColumnVolume,
    GetColumnLocation,
    GetFloorElevation,
    ListFloors,
}

/// What a tool takes besides the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Params {
    None,
    ElementType,
    Name(&'static str),
    NameAndId(&'static str, &'static str),
}

impl QueryTool {
    pub const ALL: [QueryTool; 22] = [
        QueryTool::ListElementsType,
        QueryTool::ListAllElementsWithIds,
        QueryTool::ListSpaces,
        QueryTool::GetSpaceArea,
        QueryTool::GetSpaceHeight,
        QueryTool::GetSpaceLocation,
        QueryTool::GetWindowWidth,
        QueryTool::GetWindowHeight,
        QueryTool::GetWindowLocation,
        QueryTool::GetDoorWidth,
        QueryTool::GetDoorHeight,
        QueryTool::GetDoorLocation,
        QueryTool::GetBeamLength,
        QueryTool::GetBeamVolume,
        QueryTool::GetBeamCrossSectionArea,
        QueryTool::GetBeamLocation,
        QueryTool::GetColumnLength,
        QueryTool::GetColumnCrossSectionArea,
        QueryTool::GetColumnVolume,
        QueryTool::GetColumnLocation,
        QueryTool::GetFloorElevation,
        QueryTool::ListFloors,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            QueryTool::ListElementsType => "list_elements_type",
            QueryTool::ListAllElementsWithIds => "list_all_elements_with_ids",
            QueryTool::ListSpaces => "list_spaces",
            QueryTool::GetSpaceArea => "get_space_area",
            QueryTool::GetSpaceHeight => "get_space_height",
            QueryTool::GetSpaceLocation => "get_space_location",
            QueryTool::GetWindowWidth => "get_window_width",
            QueryTool::GetWindowHeight => "get_window_height",
            QueryTool::GetWindowLocation => "get_window_location",
            QueryTool::GetDoorWidth => "get_door_width",
            QueryTool::GetDoorHeight => "get_door_height",
            QueryTool::GetDoorLocation => "get_door_location",
            QueryTool::GetBeamLength => "get_beam_length",
            QueryTool::GetBeamVolume => "get_beam_volume",
            QueryTool::GetBeamCrossSectionArea => "get_beam_cross_section_area",
            QueryTool::GetBeamLocation => "get_beam_location",
            QueryTool::GetColumnLength => "get_column_length",
            QueryTool::GetColumnCrossSectionArea => "get_column_cross_section_area",
            QueryTool::GetColumnVolume => "get_column_volume",
            QueryTool::GetColumnLocation => "get_column_location",
            QueryTool::GetFloorElevation => "get_floor_elevation",
            QueryTool::ListFloors => "list_floors",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            QueryTool::ListElementsType => {
                "get the type of doors, columns, beams, or windows used in the project"
            }
            QueryTool::ListAllElementsWithIds => {
                "get a list of all doors, columns, beams or windows, including their IDs."
            }
            QueryTool::ListSpaces => "get a list of all rooms or spaces available in the model.",
            QueryTool::GetSpaceArea => "get the area of a space or room.",
            QueryTool::GetSpaceHeight => "get the height of a room or space.",
            QueryTool::GetSpaceLocation => "get the location of a room or space.",
            QueryTool::GetWindowWidth => "get the width of a window.",
            QueryTool::GetWindowHeight => "get the height of a window.",
            QueryTool::GetWindowLocation => {
                "get the location of a specific window based on its ID."
            }
            QueryTool::GetDoorWidth => "get the width of a door.",
            QueryTool::GetDoorHeight => "get the height of a door.",
            QueryTool::GetDoorLocation => "get the location of a specific door based on its ID.",
            QueryTool::GetBeamLength => "get the length of a specific beam based on its ID.",
            QueryTool::GetBeamVolume => "get the volume of a specific beam based on its ID.",
            QueryTool::GetBeamCrossSectionArea => "get the cross section area of a beam.",
            QueryTool::GetBeamLocation => "get the location of a specific beam based on its ID.",
            QueryTool::GetColumnLength => "get the length of a specific column based on its ID.",
            QueryTool::GetColumnCrossSectionArea => "get the cross section area of a column.",
            QueryTool::GetColumnVolume => "get the volume of a specific column based on its ID.",
            QueryTool::GetColumnLocation => {
                "get the location of a specific column based on its ID."
            }
            QueryTool::GetFloorElevation => {
                "get the elevation of a specific floor based on its name."
            }
            QueryTool::ListFloors => "get a list of all floors or levels in the model.",
        }
    }

    fn params(self) -> Params {
        match self {
            QueryTool::ListSpaces | QueryTool::ListFloors => Params::None,
            QueryTool::ListElementsType | QueryTool::ListAllElementsWithIds => Params::ElementType,
            QueryTool::GetSpaceArea | QueryTool::GetSpaceHeight | QueryTool::GetSpaceLocation => {
                Params::Name("space_name")
            }
            QueryTool::GetWindowWidth | QueryTool::GetWindowHeight => Params::Name("window_name"),
            QueryTool::GetWindowLocation => Params::NameAndId("window_name", "window_id"),
            QueryTool::GetDoorWidth | QueryTool::GetDoorHeight => Params::Name("door_name"),
            QueryTool::GetDoorLocation => Params::NameAndId("door_name", "door_id"),
            QueryTool::GetBeamCrossSectionArea => Params::Name("beam_name"),
            QueryTool::GetBeamLength | QueryTool::GetBeamVolume | QueryTool::GetBeamLocation => {
                Params::NameAndId("beam_name", "beam_id")
            }
            QueryTool::GetColumnCrossSectionArea => Params::Name("column_name"),
            QueryTool::GetColumnLength
            | QueryTool::GetColumnVolume
            | QueryTool::GetColumnLocation => Params::NameAndId("column_name", "column_id"),
            QueryTool::GetFloorElevation => Params::Name("floor_name"),
        }
    }

    /// JSON schema of the tool's arguments.
    #[must_use]
    pub fn parameters(self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        match self.params() {
            Params::None => {}
            Params::ElementType => {
                properties.insert(
                    "element_type".to_string(),
                    json!({
                        "type": "string",
                        "description": "The type of element to get. Must be one of: 'doors', 'columns', 'beams', 'windows'."
                    }),
                );
                required.push("element_type");
            }
            Params::Name(name) | Params::NameAndId(name, _) => {
                let noun = name.trim_end_matches("_name");
                properties.insert(
                    name.to_string(),
                    json!({
                        "type": "string",
                        "description": format!("The name of the {noun}.")
                    }),
                );
                required.push(name);
            }
        }
        if let Params::NameAndId(name, id) = self.params() {
            let noun = name.trim_end_matches("_name");
            properties.insert(
                id.to_string(),
                json!({
                    "type": "string",
                    "description": format!("The ID of the {noun}, needed when several share the name.")
                }),
            );
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Function-calling definition as sent to the chat service.
    #[must_use]
    pub fn definition(self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name(),
                "description": self.description(),
                "parameters": self.parameters(),
            }
        })
    }

    /// Definitions for every tool.
    #[must_use]
    pub fn definitions() -> Vec<Value> {
        Self::ALL.into_iter().map(QueryTool::definition).collect()
    }

    /// Runs the tool against `ctx`. Argument problems come back as
    /// `{"error": ...}` like any other miss.
    #[must_use]
    pub fn invoke(self, ctx: &QueryContext<'_>, args: &Value) -> String {
        debug!(tool = self.name(), %args, "invoking query tool");
        match self.call(ctx, args) {
            Ok(output) => output,
            Err(err) => err.to_json().to_string(),
        }
    }

    fn call(self, ctx: &QueryContext<'_>, args: &Value) -> Result<String, QueryError> {
        let (name_param, id_param) = match self.params() {
            Params::None => (None, None),
            Params::ElementType => (Some("element_type"), None),
            Params::Name(name) => (Some(name), None),
            Params::NameAndId(name, id) => (Some(name), Some(id)),
        };
        let name = match name_param {
            Some(param) => self.required(args, param)?,
            None => String::new(),
        };
        let id = id_param.and_then(|param| optional_string(args, param));
        let id = id.as_deref();

        let output = match self {
            QueryTool::ListElementsType => ctx.list_elements_type(&name),
            QueryTool::ListAllElementsWithIds => ctx.list_all_elements_with_ids(&name),
            QueryTool::ListSpaces => ctx.list_spaces(),
            QueryTool::ListFloors => ctx.list_floors(),
            QueryTool::GetSpaceArea => ctx.get_space_area(&name),
            QueryTool::GetSpaceHeight => ctx.get_space_height(&name),
            QueryTool::GetSpaceLocation => ctx.get_space_location(&name),
            QueryTool::GetWindowWidth => ctx.get_window_width(&name),
            QueryTool::GetWindowHeight => ctx.get_window_height(&name),
            QueryTool::GetWindowLocation => ctx.get_window_location(&name, id),
            QueryTool::GetDoorWidth => ctx.get_door_width(&name),
            QueryTool::GetDoorHeight => ctx.get_door_height(&name),
            QueryTool::GetDoorLocation => ctx.get_door_location(&name, id),
            QueryTool::GetBeamLength => ctx.get_beam_length(&name, id),
            QueryTool::GetBeamVolume => ctx.get_beam_volume(&name, id),
            QueryTool::GetBeamCrossSectionArea => ctx.get_beam_cross_section_area(&name),
            QueryTool::GetBeamLocation => ctx.get_beam_location(&name, id),
            QueryTool::GetColumnLength => ctx.get_column_length(&name, id),
            QueryTool::GetColumnCrossSectionArea => ctx.get_column_cross_section_area(&name),
            QueryTool::GetColumnVolume => ctx.get_column_volume(&name, id),
            QueryTool::GetColumnLocation => ctx.get_column_location(&name, id),
            QueryTool::GetFloorElevation => ctx.get_floor_elevation(&name),
        };
        Ok(output)
    }

    fn required(self, args: &Value, param: &str) -> Result<String, QueryError> {
        optional_string(args, param).ok_or_else(|| QueryError::InvalidArguments {
            tool: self.name(),
            message: format!("missing string argument '{param}'"),
        })
    }
}

/// Chat models sometimes send IDs as numbers; accept both.
fn optional_string(args: &Value, param: &str) -> Option<String> {
    match args.get(param)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Runs a tool by name, as requested by the chat model.
#[must_use]
pub fn dispatch(ctx: &QueryContext<'_>, tool_name: &str, args: &Value) -> String {
    match QueryTool::from_name(tool_name) {
        Some(tool) => tool.invoke(ctx, args),
        None => {
            debug!(tool = tool_name, "unknown tool requested");
            QueryError::UnknownTool(tool_name.to_string())
                .to_json()
                .to_string()
        }
    }
}
