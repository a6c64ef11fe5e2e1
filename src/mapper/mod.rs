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

//! Hand-off to the event mapper
//!
//! The compiled [`BindingTable`] is consumed by an event mapper that owns the
//! virtual devices and emits OS input events. This module defines that
//! contract as the [`EventMapper`] trait and replays a table onto it.
//!
//! Every call is a "set action for control X" request and is idempotent.
//! An [`OutputAction::None`] means "leave this control unbound", never
//! "explicitly unbind it".
//!
//! # Example
//! ```
//! use sc_vdf_mapper::core::{compile, normalize, parse_vdf};
//! use sc_vdf_mapper::mapper::{DryRunMapper, MapperCall};
//!
//! let root = parse_vdf(r#""controller_mappings" { "preset" { "group_source_bindings" { } } }"#)?;
//! let table = compile(&normalize(root, None)?)?;
//!
//! // Safe: records the calls instead of touching a device
//! let mut mapper = DryRunMapper::new();
//! table.apply(&mut mapper);
//! assert!(matches!(mapper.calls(), [MapperCall::ButtonAction { .. }]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use crate::core::{
    BindingTable, ControllerButton, OutputAction, PhysicalRegion, Pos, RegionBindingBundle,
    ZoneSet,
};

/// Receiver of compiled bindings
///
/// Implemented by whatever owns the virtual input devices.
pub trait EventMapper {
    /// Use a trackpad as an absolute pointer.
    fn set_pad_mouse(&mut self, pad: Pos);

    /// Use a trackpad as a scroll wheel.
    fn set_pad_scroll(&mut self, pad: Pos);

    /// Split a trackpad into four button zones.
    fn set_pad_buttons(&mut self, pad: Pos, zones: &ZoneSet, clicked: bool);

    /// Split the joystick into four directional buttons.
    fn set_stick_buttons(&mut self, zones: &ZoneSet);

    /// Use a trigger as a button.
    fn set_trig_button(&mut self, side: Pos, action: OutputAction);

    /// Bind a physical button.
    fn set_button_action(&mut self, button: ControllerButton, action: OutputAction);
}

impl BindingTable {
    /// Replay the table onto `mapper`
    ///
    /// Regions are applied in table order, the fixed central binding last.
    pub fn apply<M: EventMapper + ?Sized>(&self, mapper: &mut M) {
        for (region, bundle) in self.regions() {
            apply_region(mapper, *region, bundle);
        }

        let fixed = self.fixed_binding();
        mapper.set_button_action(fixed.button, fixed.action);
    }
}

fn apply_region<M: EventMapper + ?Sized>(
    mapper: &mut M,
    region: PhysicalRegion,
    bundle: &RegionBindingBundle,
) {
    let (pos, pad_button) = match region {
        PhysicalRegion::RightTrackpad | PhysicalRegion::RightTrigger => {
            (Pos::Right, ControllerButton::RPad)
        }
        _ => (Pos::Left, ControllerButton::LPad),
    };

    match bundle {
        RegionBindingBundle::PadMouse { click } => {
            mapper.set_pad_mouse(pos);
            mapper.set_button_action(pad_button, *click);
        }
        RegionBindingBundle::PadScroll { click } => {
            mapper.set_pad_scroll(pos);
            mapper.set_button_action(pad_button, *click);
        }
        RegionBindingBundle::PadZones { zones, clicked } => {
            mapper.set_pad_buttons(pos, zones, *clicked);
        }
        RegionBindingBundle::StickZones { zones, click } => {
            mapper.set_stick_buttons(zones);
            // The stick click shares the left pad button
            mapper.set_button_action(ControllerButton::LPad, *click);
        }
        RegionBindingBundle::Diamond { a, b, x, y } => {
            mapper.set_button_action(ControllerButton::A, *a);
            mapper.set_button_action(ControllerButton::B, *b);
            mapper.set_button_action(ControllerButton::X, *x);
            mapper.set_button_action(ControllerButton::Y, *y);
        }
        RegionBindingBundle::Switches {
            left_bumper,
            right_bumper,
            start,
            back,
            left_grip,
            right_grip,
        } => {
            mapper.set_button_action(ControllerButton::Lb, *left_bumper);
            mapper.set_button_action(ControllerButton::Rb, *right_bumper);
            mapper.set_button_action(ControllerButton::Start, *start);
            mapper.set_button_action(ControllerButton::Back, *back);
            mapper.set_button_action(ControllerButton::LGrip, *left_grip);
            mapper.set_button_action(ControllerButton::RGrip, *right_grip);
        }
        RegionBindingBundle::Trigger { click } => {
            mapper.set_trig_button(pos, *click);
        }
    }
}

/// One recorded event-mapper call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapperCall {
    PadMouse(Pos),
    PadScroll(Pos),
    PadButtons {
        pad: Pos,
        zones: ZoneSet,
        clicked: bool,
    },
    StickButtons(ZoneSet),
    TrigButton {
        side: Pos,
        action: OutputAction,
    },
    ButtonAction {
        button: ControllerButton,
        action: OutputAction,
    },
}

impl fmt::Display for MapperCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zones = |z: &ZoneSet| {
            format!(
                "[N: {}, W: {}, S: {}, E: {}]",
                z.north, z.west, z.south, z.east
            )
        };

        match self {
            MapperCall::PadMouse(pad) => write!(f, "set_pad_mouse({:?})", pad),
            MapperCall::PadScroll(pad) => write!(f, "set_pad_scroll({:?})", pad),
            MapperCall::PadButtons { pad, zones: z, clicked } => {
                write!(f, "set_pad_buttons({:?}, {}, clicked={})", pad, zones(z), clicked)
            }
            MapperCall::StickButtons(z) => write!(f, "set_stick_buttons({})", zones(z)),
            MapperCall::TrigButton { side, action } => {
                write!(f, "set_trig_button({:?}, {})", side, action)
            }
            MapperCall::ButtonAction { button, action } => {
                write!(f, "set_button_action({}, {})", button, action)
            }
        }
    }
}

/// Mapper that records calls instead of driving a device
#[derive(Debug, Default)]
pub struct DryRunMapper {
    calls: Vec<MapperCall>,
}

impl DryRunMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> &[MapperCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<MapperCall> {
        self.calls
    }
}

impl EventMapper for DryRunMapper {
    fn set_pad_mouse(&mut self, pad: Pos) {
        self.calls.push(MapperCall::PadMouse(pad));
    }

    fn set_pad_scroll(&mut self, pad: Pos) {
        self.calls.push(MapperCall::PadScroll(pad));
    }

    fn set_pad_buttons(&mut self, pad: Pos, zones: &ZoneSet, clicked: bool) {
        self.calls.push(MapperCall::PadButtons {
            pad,
            zones: *zones,
            clicked,
        });
    }

    fn set_stick_buttons(&mut self, zones: &ZoneSet) {
        self.calls.push(MapperCall::StickButtons(*zones));
    }

    fn set_trig_button(&mut self, side: Pos, action: OutputAction) {
        self.calls.push(MapperCall::TrigButton { side, action });
    }

    fn set_button_action(&mut self, button: ControllerButton, action: OutputAction) {
        self.calls.push(MapperCall::ButtonAction { button, action });
    }
}

#[cfg(test)]
mod tests;
