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

//! src/core/table.rs
//!
//! Binding table assembly
//!
//! Visits every [`PhysicalRegion`] in its fixed order (trackpads, joystick,
//! button diamond, switch cluster, triggers). A region whose source name is
//! not bound by the preset is skipped. Otherwise its group is compiled and
//! the resulting bundle appended. The central-button binding is added last,
//! whatever the configuration says.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::compiler::compile_region;
use crate::core::error::SchemaError;
use crate::core::normalize::ControllerMappings;
use crate::core::types::{FixedBinding, PhysicalRegion, RegionBindingBundle};

/// Compiled bindings for one configuration load
///
/// Built once by [`compile`] and not modified afterwards.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BindingTable {
    regions: Vec<(PhysicalRegion, RegionBindingBundle)>,
    fixed: FixedBinding,
}

impl BindingTable {
    /// Compiled regions in compilation order.
    pub fn regions(&self) -> &[(PhysicalRegion, RegionBindingBundle)] {
        &self.regions
    }

    /// The bundle compiled for `region`, if any.
    pub fn get(&self, region: PhysicalRegion) -> Option<&RegionBindingBundle> {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, bundle)| bundle)
    }

    /// The non-configurable central-button binding.
    pub fn fixed_binding(&self) -> FixedBinding {
        self.fixed
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Compile normalized mappings into a binding table
///
/// # Errors
/// Returns a SchemaError when a bound source names a group that does not
/// exist, or when any binding names an unknown key or button. Nothing is
/// returned for a partially compiled table.
///
/// # Example
/// ```
/// use sc_vdf_mapper::core::{compile, normalize, parse_vdf, PhysicalRegion};
///
/// let root = parse_vdf(r#"
/// "controller_mappings" {
///     "group" { "id" "0" "mode" "trigger"
///         "inputs" { "click" { "activators" { "Full_Press" {
///             "bindings" { "binding" "mouse_button RIGHT" } } } } } }
///     "preset" { "group_source_bindings" { "0" "left_trigger active" } }
/// }"#)?;
/// let table = compile(&normalize(root, None)?)?;
///
/// assert!(table.get(PhysicalRegion::LeftTrigger).is_some());
/// assert!(table.get(PhysicalRegion::RightTrigger).is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compile(mappings: &ControllerMappings) -> Result<BindingTable, SchemaError> {
    let mut regions = Vec::new();

    for region in PhysicalRegion::ALL {
        let source_name = region.source_name();

        let Some(group_id) = mappings.sources.get(source_name) else {
            debug!(region = %region, "Region not bound by preset, skipping");
            continue;
        };

        let group = mappings
            .groups
            .get(group_id)
            .ok_or_else(|| SchemaError::UnknownGroup {
                source_name: source_name.to_string(),
                group_id: group_id.clone(),
            })?;

        if let Some(bundle) = compile_region(region, group)? {
            info!(region = %region, group = %group_id, "Region loaded");
            regions.push((region, bundle));
        }
    }

    Ok(BindingTable {
        regions,
        fixed: FixedBinding::STEAM_HOMEPAGE,
    })
}
