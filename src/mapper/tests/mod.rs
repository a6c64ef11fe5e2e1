// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Event mapper tests
//!
//! Replays compiled tables onto a DryRunMapper and checks the call
//! sequence the external mapper would receive.

use crate::{
    core::{compile, normalize, parse_vdf, ControllerButton, Key, MouseButton, OutputAction, Pos},
    mapper::{DryRunMapper, MapperCall},
};

fn plan(content: &str) -> Vec<MapperCall> {
    let table = compile(&normalize(parse_vdf(content).unwrap(), None).unwrap()).unwrap();
    let mut mapper = DryRunMapper::new();
    table.apply(&mut mapper);
    mapper.into_calls()
}

fn steam_homepage() -> MapperCall {
    MapperCall::ButtonAction {
        button: ControllerButton::Steam,
        action: OutputAction::Key(Key::HomePage),
    }
}

#[test]
fn test_empty_table_only_sets_fixed_binding() {
    let calls = plan(r#""controller_mappings" { "preset" { "group_source_bindings" { } } }"#);
    assert_eq!(calls, vec![steam_homepage()]);
}

#[test]
fn test_right_pad_mouse_uses_right_pad_button() {
    let calls = plan(
        r#""controller_mappings" {
            "group" { "id" "0" "mode" "absolute_mouse" "inputs" {
                "click" { "activators" { "Full_Press" { "bindings" { "binding" "mouse_button LEFT" } } } }
            } }
            "preset" { "group_source_bindings" { "0" "right_trackpad active" } }
        }"#,
    );

    assert_eq!(
        calls,
        vec![
            MapperCall::PadMouse(Pos::Right),
            MapperCall::ButtonAction {
                button: ControllerButton::RPad,
                action: OutputAction::MouseButton(MouseButton::Left),
            },
            steam_homepage(),
        ]
    );
}

#[test]
fn test_joystick_click_goes_to_left_pad() {
    let calls = plan(
        r#""controller_mappings" {
            "group" { "id" "0" "mode" "dpad" "inputs" {
                "click" { "activators" { "Full_Press" { "bindings" { "binding" "key_press SPACE" } } } }
            } }
            "preset" { "group_source_bindings" { "0" "joystick active" } }
        }"#,
    );

    assert!(matches!(calls[0], MapperCall::StickButtons(_)));
    assert_eq!(
        calls[1],
        MapperCall::ButtonAction {
            button: ControllerButton::LPad,
            action: OutputAction::Key(Key::Space),
        }
    );
}

#[test]
fn test_triggers_keep_their_side() {
    let calls = plan(
        r#""controller_mappings" {
            "group" { "id" "0" "mode" "trigger" }
            "group" { "id" "1" "mode" "trigger" }
            "preset" { "group_source_bindings" {
                "0" "left_trigger active"
                "1" "right_trigger active"
            } }
        }"#,
    );

    assert_eq!(
        &calls[..2],
        &[
            MapperCall::TrigButton {
                side: Pos::Left,
                action: OutputAction::None,
            },
            MapperCall::TrigButton {
                side: Pos::Right,
                action: OutputAction::None,
            },
        ]
    );
}

#[test]
fn test_call_display() {
    let call = MapperCall::ButtonAction {
        button: ControllerButton::Steam,
        action: OutputAction::Key(Key::HomePage),
    };
    assert_eq!(call.to_string(), "set_button_action(STEAM, KEY_HOMEPAGE)");
}
