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

use thiserror::Error;

/// Fatal configuration errors
///
/// Raised where the format guarantees a well-formed structure. Any of these
/// aborts the whole load; soft failures (missing inputs, unsupported binding
/// kinds or modes) never produce one.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    /// A required structural field is absent
    #[error("Missing required field '{0}'")]
    MissingField(String),

    /// A field exists but has the wrong shape
    #[error("Field '{field}' is malformed: expected {expected}")]
    Malformed { field: String, expected: &'static str },

    /// A group entry has no usable `id`
    #[error("Group #{index} has no id")]
    MissingGroupId { index: usize },

    /// Two groups declare the same `id`
    #[error("Duplicate group id '{0}'")]
    DuplicateGroupId(String),

    /// `group_source_bindings` maps two ids to one source, or one id twice
    #[error("group_source_bindings is not one-to-one: '{key}' is bound more than once")]
    NonInjectiveSourceBindings { key: String },

    /// A source binding points at a group that does not exist
    #[error("Source '{source_name}' refers to unknown group '{group_id}'")]
    UnknownGroup {
        source_name: String,
        group_id: String,
    },

    /// A requested preset name is not present
    #[error("No preset named '{0}'")]
    UnknownPreset(String),

    /// A binding references a key this crate does not model
    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    /// A binding references a mouse button this crate does not model
    #[error("Unknown mouse button '{0}'")]
    UnknownMouseButton(String),

    /// A binding kind that needs an operand has none
    #[error("Malformed binding '{0}': missing operand")]
    MalformedBinding(String),
}
