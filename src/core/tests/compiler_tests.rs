//! Region compiler tests
//!
//! Tests for per-region compilation:
//! - Trackpad modes (absolute_mouse, scrollwheel, dpad, unsupported)
//! - Mode-independent joystick and diamond
//! - Switches and triggers requiring their mode
//! - Slot-level degradation

use super::fixtures::{full_press_input, single_group_config};
use crate::core::{
    compiler::compile_region,
    error::SchemaError,
    keys::{Key, MouseButton},
    normalize::normalize,
    parser::parse_vdf,
    types::{Group, OutputAction, PhysicalRegion, RegionBindingBundle, ZoneSet},
};

/// Builds the single group of a one-group document
fn group(mode: &str, inputs: &[(&str, &str)]) -> Group {
    let inputs: String = inputs
        .iter()
        .map(|(name, binding)| full_press_input(name, binding))
        .collect::<Vec<_>>()
        .join("\n");
    let config = single_group_config(mode, &inputs, "joystick active");
    let mut mappings = normalize(parse_vdf(&config).unwrap(), None).unwrap();
    mappings.groups.shift_remove("7").unwrap()
}

fn dpad_group(mode: &str) -> Group {
    group(
        mode,
        &[
            ("dpad_north", "key_press UP_ARROW"),
            ("dpad_west", "key_press LEFT_ARROW"),
            ("dpad_south", "key_press DOWN_ARROW"),
            ("dpad_east", "key_press RIGHT_ARROW"),
            ("click", "key_press SPACE"),
        ],
    )
}

fn arrows() -> ZoneSet {
    ZoneSet {
        north: OutputAction::Key(Key::Up),
        west: OutputAction::Key(Key::Left),
        south: OutputAction::Key(Key::Down),
        east: OutputAction::Key(Key::Right),
    }
}

#[test]
fn test_trackpad_dpad_zone_set() {
    let bundle = compile_region(PhysicalRegion::LeftTrackpad, &dpad_group("dpad")).unwrap();
    assert_eq!(
        bundle,
        Some(RegionBindingBundle::PadZones {
            zones: arrows(),
            clicked: true,
        })
    );
}

#[test]
fn test_trackpad_absolute_mouse() {
    let g = group("absolute_mouse", &[("click", "mouse_button LEFT")]);
    assert_eq!(
        compile_region(PhysicalRegion::RightTrackpad, &g),
        Ok(Some(RegionBindingBundle::PadMouse {
            click: OutputAction::MouseButton(MouseButton::Left),
        }))
    );
}

#[test]
fn test_trackpad_scrollwheel() {
    let g = group("scrollwheel", &[]);
    assert_eq!(
        compile_region(PhysicalRegion::LeftTrackpad, &g),
        Ok(Some(RegionBindingBundle::PadScroll {
            click: OutputAction::None,
        }))
    );
}

#[test]
fn test_trackpad_unsupported_mode_is_skipped() {
    let g = group("mouse_joystick", &[("click", "key_press SPACE")]);
    assert_eq!(compile_region(PhysicalRegion::LeftTrackpad, &g), Ok(None));
}

#[test]
fn test_trackpad_without_mode_is_skipped() {
    let g = Group {
        id: "9".to_string(),
        mode: None,
        inputs: Default::default(),
    };
    assert_eq!(compile_region(PhysicalRegion::RightTrackpad, &g), Ok(None));
}

#[test]
fn test_joystick_is_mode_independent() {
    for mode in ["dpad", "joystick_move", "buttons"] {
        let bundle = compile_region(PhysicalRegion::Joystick, &dpad_group(mode)).unwrap();
        assert_eq!(
            bundle,
            Some(RegionBindingBundle::StickZones {
                zones: arrows(),
                click: OutputAction::Key(Key::Space),
            })
        );
    }
}

#[test]
fn test_diamond_missing_button_degrades_slot_only() {
    let g = group(
        "four_buttons",
        &[
            ("button_a", "key_press SPACE"),
            ("button_b", "key_press E"),
            ("button_x", "key_press R"),
        ],
    );

    assert_eq!(
        compile_region(PhysicalRegion::ButtonDiamond, &g),
        Ok(Some(RegionBindingBundle::Diamond {
            a: OutputAction::Key(Key::Space),
            b: OutputAction::Key(Key::E),
            x: OutputAction::Key(Key::R),
            y: OutputAction::None,
        }))
    );
}

#[test]
fn test_switches_cluster() {
    let g = group(
        "switches",
        &[
            ("left_bumper", "mouse_button RIGHT"),
            ("right_bumper", "mouse_wheel SCROLL_DOWN"),
            ("button_escape", "key_press ESC"),
            ("button_menu", "key_press TAB"),
            ("button_back_left", "key_press Q"),
            ("button_back_right", "key_press F"),
        ],
    );

    assert_eq!(
        compile_region(PhysicalRegion::Switches, &g),
        Ok(Some(RegionBindingBundle::Switches {
            left_bumper: OutputAction::MouseButton(MouseButton::Right),
            right_bumper: OutputAction::None,
            start: OutputAction::Key(Key::Esc),
            back: OutputAction::Key(Key::Tab),
            left_grip: OutputAction::Key(Key::Q),
            right_grip: OutputAction::Key(Key::F),
        }))
    );
}

#[test]
fn test_switches_require_switches_mode() {
    let g = group("dpad", &[("left_bumper", "key_press Q")]);
    assert_eq!(compile_region(PhysicalRegion::Switches, &g), Ok(None));
}

#[test]
fn test_triggers_require_trigger_mode() {
    let g = group("trigger", &[("click", "mouse_button RIGHT")]);
    assert_eq!(
        compile_region(PhysicalRegion::LeftTrigger, &g),
        Ok(Some(RegionBindingBundle::Trigger {
            click: OutputAction::MouseButton(MouseButton::Right),
        }))
    );

    let g = group("analog", &[("click", "mouse_button RIGHT")]);
    assert_eq!(compile_region(PhysicalRegion::RightTrigger, &g), Ok(None));
}

#[test]
fn test_unknown_key_aborts_region() {
    let g = group("trigger", &[("click", "key_press RETURN")]);
    assert_eq!(
        compile_region(PhysicalRegion::LeftTrigger, &g),
        Err(SchemaError::UnknownKey("RETURN".to_string()))
    );
}
