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

//! src/core/compiler.rs
//!
//! Per-region compilation
//!
//! Each physical region compiles its group into one [`RegionBindingBundle`]:
//!
//! | Region          | Mode             | Bundle        |
//! |-----------------|------------------|---------------|
//! | trackpads       | `absolute_mouse` | `PadMouse`    |
//! | trackpads       | `scrollwheel`    | `PadScroll`   |
//! | trackpads       | `dpad`           | `PadZones`    |
//! | joystick        | any              | `StickZones`  |
//! | button diamond  | any              | `Diamond`     |
//! | switch cluster  | `switches`       | `Switches`    |
//! | triggers        | `trigger`        | `Trigger`     |
//!
//! Any other combination yields no bundle: the region is skipped rather than
//! treated as an error. Every slot resolves independently, so one missing
//! input only leaves that slot unbound.

use tracing::debug;

use crate::core::error::SchemaError;
use crate::core::resolver::{resolve, FULL_PRESS};
use crate::core::types::{
    Group, GroupMode, InputsTable, OutputAction, PhysicalRegion, RegionBindingBundle, ZoneSet,
};

/// Compile the group bound to `region`
///
/// Returns `Ok(None)` when the group's mode is not handled for this region.
pub fn compile_region(
    region: PhysicalRegion,
    group: &Group,
) -> Result<Option<RegionBindingBundle>, SchemaError> {
    let inputs = &group.inputs;

    let bundle = match (region, group.mode.as_ref()) {
        (PhysicalRegion::LeftTrackpad | PhysicalRegion::RightTrackpad, mode) => match mode {
            Some(GroupMode::AbsoluteMouse) => Some(RegionBindingBundle::PadMouse {
                click: full_press(inputs, "click")?,
            }),
            Some(GroupMode::Scrollwheel) => Some(RegionBindingBundle::PadScroll {
                click: full_press(inputs, "click")?,
            }),
            Some(GroupMode::Dpad) => Some(RegionBindingBundle::PadZones {
                zones: dpad_zones(inputs)?,
                clicked: true,
            }),
            _ => None,
        },

        (PhysicalRegion::Joystick, _) => Some(RegionBindingBundle::StickZones {
            zones: dpad_zones(inputs)?,
            click: full_press(inputs, "click")?,
        }),

        (PhysicalRegion::ButtonDiamond, _) => Some(RegionBindingBundle::Diamond {
            a: full_press(inputs, "button_a")?,
            b: full_press(inputs, "button_b")?,
            x: full_press(inputs, "button_x")?,
            y: full_press(inputs, "button_y")?,
        }),

        (PhysicalRegion::Switches, Some(GroupMode::Switches)) => {
            Some(RegionBindingBundle::Switches {
                left_bumper: full_press(inputs, "left_bumper")?,
                right_bumper: full_press(inputs, "right_bumper")?,
                start: full_press(inputs, "button_escape")?,
                back: full_press(inputs, "button_menu")?,
                left_grip: full_press(inputs, "button_back_left")?,
                right_grip: full_press(inputs, "button_back_right")?,
            })
        }

        (PhysicalRegion::LeftTrigger | PhysicalRegion::RightTrigger, Some(GroupMode::Trigger)) => {
            Some(RegionBindingBundle::Trigger {
                click: full_press(inputs, "click")?,
            })
        }

        (PhysicalRegion::Switches | PhysicalRegion::LeftTrigger | PhysicalRegion::RightTrigger, _) => {
            None
        }
    };

    if bundle.is_none() {
        debug!(
            region = %region,
            group = %group.id,
            mode = group.mode.as_ref().map(|m| m.to_string()).unwrap_or_default(),
            "Unsupported mode for region, skipping"
        );
    }

    Ok(bundle)
}

fn full_press(inputs: &InputsTable, input_name: &str) -> Result<OutputAction, SchemaError> {
    resolve(inputs, input_name, FULL_PRESS)
}

/// The four `dpad_*` inputs as a zone set
fn dpad_zones(inputs: &InputsTable) -> Result<ZoneSet, SchemaError> {
    Ok(ZoneSet {
        north: full_press(inputs, "dpad_north")?,
        west: full_press(inputs, "dpad_west")?,
        south: full_press(inputs, "dpad_south")?,
        east: full_press(inputs, "dpad_east")?,
    })
}
