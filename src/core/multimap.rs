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

//! src/core/multimap.rs
//!
//! Duplicate-key merging for one nesting level
//!
//! VDF allows the same key several times at one level, and the repetition
//! means "several of these". This builder keeps every occurrence:
//! - first occurrence: stored as-is
//! - second occurrence: the stored value becomes a 2-element sequence
//! - later occurrences: appended to that sequence
//!
//! Keys keep the order of their first appearance. Merging imposes no schema,
//! so it cannot fail.

use indexmap::map::Entry;

use crate::core::types::{ConfigMap, ConfigNode};

/// Collects the (key, value) pairs of one level into a [`ConfigMap`]
#[derive(Debug, Default)]
pub struct MultiMapBuilder {
    entries: ConfigMap,
}

impl MultiMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one pair, merging it with earlier occurrences of the same key.
    pub fn push(&mut self, key: String, value: ConfigNode) {
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                ConfigNode::Sequence(items) => items.push(value),
                existing => {
                    let first = std::mem::replace(existing, ConfigNode::Sequence(Vec::new()));
                    *existing = ConfigNode::Sequence(vec![first, value]);
                }
            },
        }
    }

    pub fn finish(self) -> ConfigMap {
        self.entries
    }
}

impl FromIterator<(String, ConfigNode)> for MultiMapBuilder {
    fn from_iter<I: IntoIterator<Item = (String, ConfigNode)>>(pairs: I) -> Self {
        let mut builder = MultiMapBuilder::new();
        for (key, value) in pairs {
            builder.push(key, value);
        }
        builder
    }
}

/// Merges an ordered stream of pairs into one level of the tree.
///
/// # Example
/// ```
/// use sc_vdf_mapper::core::multimap::join_duplicate_keys;
/// use sc_vdf_mapper::core::ConfigNode;
///
/// let scalar = |s: &str| ConfigNode::Scalar(s.to_string());
/// let merged = join_duplicate_keys(vec![
///     ("a".to_string(), scalar("1")),
///     ("b".to_string(), scalar("2")),
///     ("a".to_string(), scalar("3")),
/// ]);
///
/// assert_eq!(merged["a"], ConfigNode::Sequence(vec![scalar("1"), scalar("3")]));
/// assert_eq!(merged["b"], scalar("2"));
/// ```
pub fn join_duplicate_keys<I>(pairs: I) -> ConfigMap
where
    I: IntoIterator<Item = (String, ConfigNode)>,
{
    pairs.into_iter().collect::<MultiMapBuilder>().finish()
}
