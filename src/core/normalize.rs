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

//! src/core/normalize.rs
//!
//! Restructures the merged tree into directly addressable tables
//!
//! Two substructures of `controller_mappings` are awkward to use as merged:
//! - `group` is repeated once per group, so it arrives as a sequence. It is
//!   re-keyed by each group's own `id` field into a [`GroupTable`].
//! - `preset.group_source_bindings` maps group id → source name. Lookups go
//!   the other way, so it is inverted into a [`SourceBindingMap`].
//!
//! Both transforms consume the tree and build new, independently owned
//! tables.

use indexmap::IndexMap;
use std::hash::Hash;
use tracing::debug;

use crate::core::error::SchemaError;
use crate::core::types::{
    ConfigMap, ConfigNode, Group, GroupMode, GroupTable, InputsTable, SourceBindingMap,
};

/// The normalized view of one controller configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerMappings {
    /// `controller_mappings.title`, when present
    pub title: Option<String>,

    /// Groups keyed by their id
    pub groups: GroupTable,

    /// Source name → group id, taken from the active preset
    pub sources: SourceBindingMap,
}

/// Normalize a merged tree
///
/// # Arguments
/// * `root` - Top-level mapping produced by the reader
/// * `preset` - Name of the preset to activate; the first preset when `None`
///
/// # Errors
/// Returns a SchemaError when `controller_mappings`, the preset or its
/// `group_source_bindings` are missing, when group ids are missing or
/// duplicated, or when the source bindings are not one-to-one.
pub fn normalize(mut root: ConfigMap, preset: Option<&str>) -> Result<ControllerMappings, SchemaError> {
    let mut mappings = match root.shift_remove("controller_mappings") {
        Some(ConfigNode::Mapping(m)) => m,
        Some(_) => {
            return Err(SchemaError::Malformed {
                field: "controller_mappings".to_string(),
                expected: "a block",
            })
        }
        None => return Err(SchemaError::MissingField("controller_mappings".to_string())),
    };

    let title = mappings
        .get("title")
        .and_then(ConfigNode::first)
        .and_then(ConfigNode::as_str)
        .map(str::to_string);

    let groups = match mappings.shift_remove("group") {
        Some(node) => build_group_table(node)?,
        None => GroupTable::new(),
    };

    let presets = mappings
        .shift_remove("preset")
        .ok_or_else(|| SchemaError::MissingField("controller_mappings.preset".to_string()))?;
    let sources = source_bindings(select_preset(presets, preset)?)?;

    debug!(
        groups = groups.len(),
        sources = sources.len(),
        "Normalized controller mappings"
    );

    Ok(ControllerMappings {
        title,
        groups,
        sources,
    })
}

/// Re-key the repeated `group` entries by their `id` field
///
/// A single `group` (not repeated) is accepted as a one-group list.
pub fn build_group_table(groups: ConfigNode) -> Result<GroupTable, SchemaError> {
    let mut table = GroupTable::new();

    for (index, node) in groups.into_occurrences().into_iter().enumerate() {
        let ConfigNode::Mapping(mut fields) = node else {
            return Err(SchemaError::Malformed {
                field: format!("controller_mappings.group #{}", index),
                expected: "a block",
            });
        };

        let id = match fields.shift_remove("id") {
            Some(ConfigNode::Scalar(id)) => id,
            Some(_) => {
                return Err(SchemaError::Malformed {
                    field: format!("controller_mappings.group #{}.id", index),
                    expected: "a single group id",
                })
            }
            None => return Err(SchemaError::MissingGroupId { index }),
        };

        let mode = fields
            .get("mode")
            .and_then(ConfigNode::first)
            .and_then(ConfigNode::as_str)
            .map(GroupMode::from);

        // A repeated `inputs` block honours its first occurrence
        let inputs = match fields.shift_remove("inputs").map(ConfigNode::into_occurrences) {
            Some(occurrences) => match occurrences.into_iter().next() {
                Some(ConfigNode::Mapping(inputs)) => inputs,
                _ => {
                    return Err(SchemaError::Malformed {
                        field: format!("controller_mappings.group #{}.inputs", index),
                        expected: "a block",
                    })
                }
            },
            None => InputsTable::new(),
        };

        if table.contains_key(&id) {
            return Err(SchemaError::DuplicateGroupId(id));
        }
        table.insert(id.clone(), Group { id, mode, inputs });
    }

    Ok(table)
}

/// Choose the active preset from one or more `preset` entries
fn select_preset(presets: ConfigNode, wanted: Option<&str>) -> Result<ConfigMap, SchemaError> {
    let mut candidates = presets.into_occurrences().into_iter().filter_map(|node| match node {
        ConfigNode::Mapping(m) => Some(m),
        _ => None,
    });

    match wanted {
        None => candidates
            .next()
            .ok_or_else(|| SchemaError::MissingField("controller_mappings.preset".to_string())),
        Some(name) => candidates
            .find(|p| p.get("name").and_then(ConfigNode::as_str) == Some(name))
            .ok_or_else(|| SchemaError::UnknownPreset(name.to_string())),
    }
}

/// Read and invert a preset's `group_source_bindings`
fn source_bindings(mut preset: ConfigMap) -> Result<SourceBindingMap, SchemaError> {
    const FIELD: &str = "controller_mappings.preset.group_source_bindings";

    let bindings = match preset.shift_remove("group_source_bindings") {
        Some(ConfigNode::Mapping(m)) => m,
        Some(_) => {
            return Err(SchemaError::Malformed {
                field: FIELD.to_string(),
                expected: "a block",
            })
        }
        None => return Err(SchemaError::MissingField(FIELD.to_string())),
    };

    let mut by_id = IndexMap::with_capacity(bindings.len());
    for (id, node) in bindings {
        match node {
            ConfigNode::Scalar(source) => {
                by_id.insert(id, source);
            }
            // A repeated id binds one group to several sources
            ConfigNode::Sequence(_) => return Err(SchemaError::NonInjectiveSourceBindings { key: id }),
            ConfigNode::Mapping(_) => {
                return Err(SchemaError::Malformed {
                    field: format!("{}.{}", FIELD, id),
                    expected: "a source name",
                })
            }
        }
    }

    invert_bijection(by_id)
}

/// Swap keys and values of a one-to-one mapping
///
/// Fails instead of dropping an entry when two keys share a value, so
/// `invert_bijection(invert_bijection(m)) == m` for every accepted `m`.
pub fn invert_bijection<K, V>(mapping: IndexMap<K, V>) -> Result<IndexMap<V, K>, SchemaError>
where
    K: Hash + Eq,
    V: Hash + Eq + ToString,
{
    let mut inverted = IndexMap::with_capacity(mapping.len());
    for (key, value) in mapping {
        if inverted.contains_key(&value) {
            return Err(SchemaError::NonInjectiveSourceBindings {
                key: value.to_string(),
            });
        }
        inverted.insert(value, key);
    }
    Ok(inverted)
}
