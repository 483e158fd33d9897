mod common;

use common::office_tables;
use ifc_assistant::query::{dispatch, QueryContext, QueryTool};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn parsed(output: &str) -> Value {
    serde_json::from_str(output).expect("query output is JSON")
}

#[test]
fn door_location_needs_id_when_name_is_shared() {
    let tables = office_tables();
    let ctx = QueryContext::new(&tables);

    assert_eq!(
        parsed(&ctx.get_door_location("Single Flush", None)),
        json!({"error": "Multiple doors with the name 'Single Flush' found. Please provide the name and the ID of the door."})
    );
    assert_eq!(
        parsed(&ctx.get_door_location("Single Flush", Some("999"))),
        json!({"error": "Door ID not found."})
    );
    assert_eq!(
        parsed(&ctx.get_door_location("Single Flush", Some("101"))),
        json!({"location": "Level 2"})
    );
    assert_eq!(
        parsed(&ctx.get_door_location("Double Swing", None)),
        json!({"error": "Door not found. Please give the correct name of the door."})
    );
}

#[test]
fn width_is_not_suffixed_twice() {
    let tables = office_tables();
    let ctx = QueryContext::new(&tables);
    assert_eq!(parsed(&ctx.get_door_width("Single Flush")), json!({"width": "900 mm"}));
    assert_eq!(parsed(&ctx.get_window_height("W1")), json!({"height": "1200 mm"}));
}

#[test]
fn listing_is_limited_to_element_categories() {
    let tables = office_tables();
    let ctx = QueryContext::new(&tables);

    assert_eq!(
        parsed(&ctx.list_elements_type("Doors")),
        json!({"doors": ["Single Flush"]})
    );
    assert_eq!(
        parsed(&ctx.list_all_elements_with_ids("doors")),
        json!({"doors": [
            {"Name": "Single Flush", "ID": "100"},
            {"Name": "Single Flush", "ID": "101"}
        ]})
    );
    assert!(parsed(&ctx.list_elements_type("spaces"))["error"].is_string());
}

#[test]
fn spaces_and_floors() {
    let tables = office_tables();
    let ctx = QueryContext::new(&tables);

    assert_eq!(parsed(&ctx.list_spaces()), json!({"spaces": ["101", "102"]}));
    assert_eq!(parsed(&ctx.get_space_area("101")), json!({"area": "12.5 m²"}));
    assert_eq!(parsed(&ctx.get_space_height("102")), json!({"height": "Unknown"}));
    assert_eq!(parsed(&ctx.get_space_location("101")), json!({"location": "Level 1"}));
    assert_eq!(parsed(&ctx.list_floors()), json!({"floors": ["Level 1", "Level 2"]}));
    assert_eq!(
        parsed(&ctx.get_floor_elevation("Level 2")),
        json!({"elevation": "3500 mm"})
    );
}

#[test]
fn beam_and_column_queries() {
    let tables = office_tables();
    let ctx = QueryContext::new(&tables);

    assert_eq!(parsed(&ctx.get_beam_volume("HEB 200", None)), json!({"volume": "2.5 m³"}));
    assert_eq!(
        parsed(&ctx.get_column_volume("C30", Some("400"))),
        json!({"volume": "2.5 mm³"})
    );
    assert_eq!(
        parsed(&ctx.get_beam_cross_section_area("HEB 200")),
        json!({"cross_section_area": "0.0078 m²"})
    );
    assert_eq!(
        parsed(&ctx.get_column_location("C30", None)),
        json!({"location": "Level 2"})
    );
}

#[test]
fn dispatch_by_tool_name() {
    let tables = office_tables();
    let ctx = QueryContext::new(&tables);

    let output = dispatch(
        &ctx,
        "get_beam_length",
        &json!({"beam_name": "HEB 200", "beam_id": 300}),
    );
    assert_eq!(parsed(&output), json!({"length": "4000 mm"}));

    let unknown = dispatch(&ctx, "get_wall_area", &json!({}));
    assert!(parsed(&unknown)["error"].is_string());

    let missing = dispatch(&ctx, "get_door_width", &json!({}));
    assert!(parsed(&missing)["error"].is_string());
}

#[test]
fn every_tool_has_a_definition() {
    let definitions = QueryTool::definitions();
    assert_eq!(definitions.len(), 22);
    for definition in &definitions {
        assert_eq!(definition["type"], "function");
        let name = definition["function"]["name"].as_str().unwrap();
        assert!(QueryTool::from_name(name).is_some());
    }
}
