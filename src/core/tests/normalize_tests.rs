//! Normalization tests
//!
//! Tests for turning the merged tree into group and source tables:
//! - Group re-keying and id validation
//! - Source-binding inversion and injectivity
//! - Preset selection

use super::fixtures::{full_press_input, FULL_CONFIG};
use crate::core::{
    error::SchemaError,
    keys::Key,
    normalize::{build_group_table, invert_bijection, normalize},
    parser::parse_vdf,
    resolver::{resolve, FULL_PRESS},
    types::{ConfigNode, GroupMode, OutputAction},
};
use indexmap::IndexMap;
use proptest::prelude::*;

fn normalize_str(content: &str) -> Result<crate::core::ControllerMappings, SchemaError> {
    normalize(parse_vdf(content).unwrap(), None)
}

#[test]
fn test_full_config_tables() {
    let mappings = normalize_str(FULL_CONFIG).unwrap();

    assert_eq!(mappings.title.as_deref(), Some("Keyboard (WASD) and Mouse"));
    assert_eq!(mappings.groups.len(), 7);
    assert_eq!(mappings.groups["1"].mode, Some(GroupMode::Dpad));
    assert_eq!(
        mappings.groups["3"].mode,
        Some(GroupMode::Other("four_buttons".to_string()))
    );

    assert_eq!(mappings.sources.len(), 7);
    assert_eq!(mappings.sources["right_trackpad active"], "0");
    assert_eq!(mappings.sources["switch active"], "4");
}

#[test]
fn test_group_ids_key_the_table() {
    let node = parse_vdf(r#""group" { "id" "10" "mode" "dpad" } "group" { "id" "11" }"#)
        .unwrap()
        .shift_remove("group")
        .unwrap();

    let table = build_group_table(node).unwrap();
    let ids: Vec<&str> = table.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["10", "11"]);
    assert_eq!(table["10"].id, "10");
    assert_eq!(table["11"].mode, None);
    assert!(table["11"].inputs.is_empty());
}

#[test]
fn test_single_group_is_accepted() {
    let node = parse_vdf(r#""group" { "id" "0" "mode" "trigger" }"#)
        .unwrap()
        .shift_remove("group")
        .unwrap();

    let table = build_group_table(node).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table["0"].mode, Some(GroupMode::Trigger));
}

#[test]
fn test_missing_group_id() {
    let node = parse_vdf(r#""group" { "id" "0" } "group" { "mode" "dpad" }"#)
        .unwrap()
        .shift_remove("group")
        .unwrap();

    assert_eq!(
        build_group_table(node),
        Err(SchemaError::MissingGroupId { index: 1 })
    );
}

#[test]
fn test_malformed_group_id() {
    let node = parse_vdf(r#""group" { "id" "0" } "group" { "id" "1" "id" "2" }"#)
        .unwrap()
        .shift_remove("group")
        .unwrap();

    match build_group_table(node) {
        Err(SchemaError::Malformed { field, .. }) => {
            assert_eq!(field, "controller_mappings.group #1.id")
        }
        other => panic!("Expected Malformed error, got: {:?}", other),
    }

    let node = parse_vdf(r#""group" { "id" { "value" "0" } }"#)
        .unwrap()
        .shift_remove("group")
        .unwrap();
    assert!(matches!(
        build_group_table(node),
        Err(SchemaError::Malformed { .. })
    ));
}

#[test]
fn test_duplicate_group_id() {
    let node = parse_vdf(r#""group" { "id" "3" } "group" { "id" "3" }"#)
        .unwrap()
        .shift_remove("group")
        .unwrap();

    assert_eq!(
        build_group_table(node),
        Err(SchemaError::DuplicateGroupId("3".to_string()))
    );
}

#[test]
fn test_two_ids_bound_to_one_source() {
    let result = normalize_str(
        r#""controller_mappings" {
            "preset" { "group_source_bindings" {
                "0" "joystick active"
                "1" "joystick active"
            } }
        }"#,
    );

    assert_eq!(
        result,
        Err(SchemaError::NonInjectiveSourceBindings {
            key: "joystick active".to_string()
        })
    );
}

#[test]
fn test_one_id_bound_twice() {
    let result = normalize_str(
        r#""controller_mappings" {
            "preset" { "group_source_bindings" {
                "0" "joystick active"
                "0" "switch active"
            } }
        }"#,
    );

    assert_eq!(
        result,
        Err(SchemaError::NonInjectiveSourceBindings {
            key: "0".to_string()
        })
    );
}

#[test]
fn test_missing_structure() {
    assert_eq!(
        normalize_str(r#""other" "1""#),
        Err(SchemaError::MissingField("controller_mappings".to_string()))
    );
    assert_eq!(
        normalize_str(r#""controller_mappings" { "group" { "id" "0" } }"#),
        Err(SchemaError::MissingField("controller_mappings.preset".to_string()))
    );
    assert!(matches!(
        normalize_str(r#""controller_mappings" { "preset" { "id" "0" } }"#),
        Err(SchemaError::MissingField(_))
    ));
}

#[test]
fn test_no_groups_is_empty_table() {
    let mappings = normalize_str(
        r#""controller_mappings" { "preset" { "group_source_bindings" { } } }"#,
    )
    .unwrap();

    assert!(mappings.groups.is_empty());
    assert!(mappings.sources.is_empty());
}

const TWO_PRESETS: &str = r#"
"controller_mappings"
{
    "preset" { "id" "0" "name" "Default" "group_source_bindings" { "0" "joystick active" } }
    "preset" { "id" "1" "name" "Driving" "group_source_bindings" { "0" "switch active" } }
}
"#;

#[test]
fn test_first_preset_is_default() {
    let mappings = normalize_str(TWO_PRESETS).unwrap();
    assert_eq!(mappings.sources.get("joystick active").map(String::as_str), Some("0"));
    assert!(!mappings.sources.contains_key("switch active"));
}

#[test]
fn test_preset_selected_by_name() {
    let mappings = normalize(parse_vdf(TWO_PRESETS).unwrap(), Some("Driving")).unwrap();
    assert_eq!(mappings.sources.get("switch active").map(String::as_str), Some("0"));

    assert_eq!(
        normalize(parse_vdf(TWO_PRESETS).unwrap(), Some("Flying")),
        Err(SchemaError::UnknownPreset("Flying".to_string()))
    );
}

#[test]
fn test_group_inputs_stay_addressable() {
    let mappings = normalize_str(FULL_CONFIG).unwrap();
    let inputs = &mappings.groups["2"].inputs;

    let binding = inputs["dpad_north"]
        .get("activators")
        .and_then(|a| a.get("Full_Press"))
        .and_then(|p| p.get("bindings"))
        .and_then(|b| b.get("binding"))
        .and_then(ConfigNode::as_str);
    assert_eq!(binding, Some("key_press W, w"));
}

proptest! {
    #[test]
    fn prop_inversion_round_trips(
        entries in prop::collection::hash_map("[0-9]{1,3}", "[a-z_ ]{1,12}", 0..20)
    ) {
        let mapping: IndexMap<String, String> = entries.into_iter().collect();
        let injective = {
            let mut values: Vec<&String> = mapping.values().collect();
            values.sort();
            values.dedup();
            values.len() == mapping.len()
        };

        match invert_bijection(mapping.clone()) {
            Ok(inverted) => {
                prop_assert!(injective);
                let back = invert_bijection(inverted).unwrap();
                prop_assert_eq!(back, mapping);
            }
            Err(SchemaError::NonInjectiveSourceBindings { .. }) => prop_assert!(!injective),
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }
}

#[test]
fn test_repeated_inputs_keep_first_block() {
    let content = format!(
        r#""group" {{ "id" "0" "mode" "trigger" "inputs" {{ {} }} "inputs" {{ }} }}"#,
        full_press_input("click", "key_press A")
    );
    let node = parse_vdf(&content).unwrap().shift_remove("group").unwrap();

    let table = build_group_table(node).unwrap();
    assert_eq!(
        resolve(&table["0"].inputs, "click", FULL_PRESS),
        Ok(OutputAction::Key(Key::A))
    );
}

#[test]
fn test_scalar_inputs_is_malformed() {
    let node = parse_vdf(r#""group" { "id" "4" "mode" "trigger" "inputs" "click" }"#)
        .unwrap()
        .shift_remove("group")
        .unwrap();

    match build_group_table(node) {
        Err(SchemaError::Malformed { field, expected }) => {
            assert_eq!(field, "controller_mappings.group #0.inputs");
            assert_eq!(expected, "a block");
        }
        other => panic!("Expected Malformed error, got: {:?}", other),
    }
}
