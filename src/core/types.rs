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

//! src/core/types.rs
//!
//! Core type definitions for binding compilation
//!
//! This module defines the fundamental types used throughout the application:
//! - `ConfigNode`: The merged configuration tree (scalar / sequence / mapping)
//! - `Group`: One group of physical-input configuration within a preset
//! - `OutputAction`: The canonical action a binding resolves to
//! - `PhysicalRegion`: The controller regions a preset can bind groups to
//! - `RegionBindingBundle`: The compiled result for one region
//!
//! All output types implement serialization so a compiled table can be
//! dumped for inspection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::keys::{Key, MouseButton};

/// One level of the merged tree: unique keys in first-appearance order.
pub type ConfigMap = IndexMap<String, ConfigNode>;

/// Input name → raw input node (the node holding `activators`).
pub type InputsTable = IndexMap<String, ConfigNode>;

/// Group identifier → group.
pub type GroupTable = IndexMap<String, Group>;

/// Physical-region source name (e.g. `"left_trackpad active"`) → group identifier.
pub type SourceBindingMap = IndexMap<String, String>;

/// A value in the merged configuration tree
///
/// The VDF format never produces sequences on its own. A `Sequence` only
/// appears where a key was repeated at one level, and then holds every
/// occurrence in source order. A key seen once is never wrapped.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigNode {
    /// A plain string value
    Scalar(String),
    /// All occurrences of a repeated key
    Sequence(Vec<ConfigNode>),
    /// A nested `{ ... }` block
    Mapping(ConfigMap),
}

impl ConfigNode {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigNode::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            ConfigNode::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up `key` when this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// The first occurrence of a possibly repeated value.
    ///
    /// Returns `self` for anything that is not a sequence.
    pub fn first(&self) -> Option<&ConfigNode> {
        match self {
            ConfigNode::Sequence(items) => items.first(),
            other => Some(other),
        }
    }

    /// Every occurrence as a vector, consuming the node.
    ///
    /// A non-sequence value counts as a single occurrence.
    pub fn into_occurrences(self) -> Vec<ConfigNode> {
        match self {
            ConfigNode::Sequence(items) => items,
            other => vec![other],
        }
    }
}

/// Behavioural category a group declares with its `mode` field
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GroupMode {
    AbsoluteMouse,
    Scrollwheel,
    Dpad,
    Trigger,
    Switches,
    /// Any mode this crate does not compile specially
    Other(String),
}

impl From<&str> for GroupMode {
    fn from(mode: &str) -> Self {
        match mode {
            "absolute_mouse" => GroupMode::AbsoluteMouse,
            "scrollwheel" => GroupMode::Scrollwheel,
            "dpad" => GroupMode::Dpad,
            "trigger" => GroupMode::Trigger,
            "switches" => GroupMode::Switches,
            other => GroupMode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for GroupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupMode::AbsoluteMouse => write!(f, "absolute_mouse"),
            GroupMode::Scrollwheel => write!(f, "scrollwheel"),
            GroupMode::Dpad => write!(f, "dpad"),
            GroupMode::Trigger => write!(f, "trigger"),
            GroupMode::Switches => write!(f, "switches"),
            GroupMode::Other(other) => write!(f, "{}", other),
        }
    }
}

/// A named cluster of physical-input configuration within a preset
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    /// The group's own `id` field
    pub id: String,

    /// Declared mode; `None` when the group has no `mode` field
    pub mode: Option<GroupMode>,

    /// Input name → input node
    pub inputs: InputsTable,
}

/// Canonical resolved action for one input slot
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum OutputAction {
    Key(Key),
    MouseButton(MouseButton),
    /// Leave the slot unbound
    #[default]
    None,
}

impl OutputAction {
    pub fn is_none(&self) -> bool {
        matches!(self, OutputAction::None)
    }
}

impl fmt::Display for OutputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputAction::Key(key) => write!(f, "{}", key),
            OutputAction::MouseButton(button) => write!(f, "{}", button),
            OutputAction::None => write!(f, "-"),
        }
    }
}

/// Left or right member of a paired control
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Pos {
    Left,
    Right,
}

/// Physical buttons of the controller that accept a button action
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ControllerButton {
    A,
    B,
    X,
    Y,
    /// Left bumper
    Lb,
    /// Right bumper
    Rb,
    Start,
    Back,
    /// Left back grip
    LGrip,
    /// Right back grip
    RGrip,
    /// Left trackpad click (also the joystick click)
    LPad,
    /// Right trackpad click
    RPad,
    /// Central mode button
    Steam,
}

impl fmt::Display for ControllerButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControllerButton::A => "A",
            ControllerButton::B => "B",
            ControllerButton::X => "X",
            ControllerButton::Y => "Y",
            ControllerButton::Lb => "LB",
            ControllerButton::Rb => "RB",
            ControllerButton::Start => "START",
            ControllerButton::Back => "BACK",
            ControllerButton::LGrip => "LGRIP",
            ControllerButton::RGrip => "RGRIP",
            ControllerButton::LPad => "LPAD",
            ControllerButton::RPad => "RPAD",
            ControllerButton::Steam => "STEAM",
        };
        write!(f, "{}", name)
    }
}

/// Controller regions a preset can bind a group to
///
/// Declaration order is the compilation order.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum PhysicalRegion {
    LeftTrackpad,
    RightTrackpad,
    Joystick,
    ButtonDiamond,
    Switches,
    LeftTrigger,
    RightTrigger,
}

impl PhysicalRegion {
    /// Every region, in compilation order.
    pub const ALL: [PhysicalRegion; 7] = [
        PhysicalRegion::LeftTrackpad,
        PhysicalRegion::RightTrackpad,
        PhysicalRegion::Joystick,
        PhysicalRegion::ButtonDiamond,
        PhysicalRegion::Switches,
        PhysicalRegion::LeftTrigger,
        PhysicalRegion::RightTrigger,
    ];

    /// Source name used by `group_source_bindings`.
    pub fn source_name(self) -> &'static str {
        match self {
            PhysicalRegion::LeftTrackpad => "left_trackpad active",
            PhysicalRegion::RightTrackpad => "right_trackpad active",
            PhysicalRegion::Joystick => "joystick active",
            PhysicalRegion::ButtonDiamond => "button_diamond active",
            PhysicalRegion::Switches => "switch active",
            PhysicalRegion::LeftTrigger => "left_trigger active",
            PhysicalRegion::RightTrigger => "right_trigger active",
        }
    }
}

impl fmt::Display for PhysicalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhysicalRegion::LeftTrackpad => "Left trackpad",
            PhysicalRegion::RightTrackpad => "Right trackpad",
            PhysicalRegion::Joystick => "Joystick",
            PhysicalRegion::ButtonDiamond => "Button diamond",
            PhysicalRegion::Switches => "Switches",
            PhysicalRegion::LeftTrigger => "Left trigger",
            PhysicalRegion::RightTrigger => "Right trigger",
        };
        write!(f, "{}", name)
    }
}

/// Four directional zones, in north / west / south / east order
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ZoneSet {
    pub north: OutputAction,
    pub west: OutputAction,
    pub south: OutputAction,
    pub east: OutputAction,
}

impl ZoneSet {
    /// Zones as an array in north, west, south, east order.
    pub fn to_array(&self) -> [OutputAction; 4] {
        [self.north, self.west, self.south, self.east]
    }
}

/// Compiled bindings for one physical region
///
/// The variant follows the mode of the group bound to the region.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RegionBindingBundle {
    /// `absolute_mouse` trackpad: pointer emulation plus a click button
    PadMouse { click: OutputAction },

    /// `scrollwheel` trackpad: scroll emulation plus a click button
    PadScroll { click: OutputAction },

    /// `dpad` trackpad: four zones on the pad button area
    PadZones { zones: ZoneSet, clicked: bool },

    /// Joystick: four directional zones plus the stick click
    StickZones { zones: ZoneSet, click: OutputAction },

    /// The A/B/X/Y face buttons
    Diamond {
        a: OutputAction,
        b: OutputAction,
        x: OutputAction,
        y: OutputAction,
    },

    /// Bumpers, start/back and the two back grips
    Switches {
        left_bumper: OutputAction,
        right_bumper: OutputAction,
        start: OutputAction,
        back: OutputAction,
        left_grip: OutputAction,
        right_grip: OutputAction,
    },

    /// A trigger acting as a single button
    Trigger { click: OutputAction },
}

/// The one binding that can not be configured from a VDF file
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FixedBinding {
    pub button: ControllerButton,
    pub action: OutputAction,
}

impl FixedBinding {
    /// The central mode button always opens the home page.
    pub const STEAM_HOMEPAGE: FixedBinding = FixedBinding {
        button: ControllerButton::Steam,
        action: OutputAction::Key(Key::HomePage),
    };
}
