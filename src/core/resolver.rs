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

//! src/core/resolver.rs
//!
//! Binding expression resolution
//!
//! A binding lives at `inputs.<name>.activators.<phase>.bindings.binding` and
//! is a whitespace separated expression such as `key_press W, w` or
//! `mouse_button LEFT`. The first token names the binding kind.
//!
//! Resolution fails softly (returns [`OutputAction::None`]) when the input or
//! phase is absent or the kind is not supported. It fails hard with a
//! [`SchemaError`] when a supported kind names a key or button that does not
//! exist in the symbol tables.

use tracing::debug;

use crate::core::error::SchemaError;
use crate::core::keys::{Key, MouseButton};
use crate::core::types::{ConfigNode, InputsTable, OutputAction};

/// Activation phase used for every compiled slot
pub const FULL_PRESS: &str = "Full_Press";

/// Resolve one input's binding for one activation phase
///
/// # Arguments
/// * `inputs` - The group's inputs table
/// * `input_name` - Input to look up (e.g. `"dpad_north"`, `"click"`)
/// * `activator_name` - Activation phase (e.g. `"Full_Press"`)
///
/// # Returns
/// The resolved action, `OutputAction::None` when nothing applicable is
/// configured, or a SchemaError for unknown key / button names.
///
/// # Example
/// ```
/// use sc_vdf_mapper::core::parser::parse_vdf;
/// use sc_vdf_mapper::core::resolver::resolve;
/// use sc_vdf_mapper::core::{Key, OutputAction};
///
/// let inputs = parse_vdf(r#"
///     "click" { "activators" { "Full_Press" { "bindings" { "binding" "key_press SPACE" } } } }
/// "#)?;
/// assert_eq!(resolve(&inputs, "click", "Full_Press")?, OutputAction::Key(Key::Space));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve(
    inputs: &InputsTable,
    input_name: &str,
    activator_name: &str,
) -> Result<OutputAction, SchemaError> {
    match binding_expression(inputs, input_name, activator_name) {
        Some(expression) => resolve_expression(expression),
        None => Ok(OutputAction::None),
    }
}

/// Find the raw binding string for an input and phase
///
/// When an input is repeated, a phase carries several activators, or an
/// activator several `binding` entries, only the first is honoured.
pub fn binding_expression<'a>(
    inputs: &'a InputsTable,
    input_name: &str,
    activator_name: &str,
) -> Option<&'a str> {
    inputs
        .get(input_name)?
        .first()?
        .get("activators")?
        .get(activator_name)?
        .first()?
        .get("bindings")?
        .get("binding")?
        .first()?
        .as_str()
}

/// Resolve a raw binding expression
pub fn resolve_expression(expression: &str) -> Result<OutputAction, SchemaError> {
    let mut tokens = expression.split_whitespace();

    let Some(kind) = tokens.next() else {
        return Ok(OutputAction::None);
    };

    match kind {
        "key_press" => {
            let operand = tokens
                .next()
                .ok_or_else(|| SchemaError::MalformedBinding(expression.to_string()))?;
            let name = clean_key_token(operand);
            Key::from_name(&name)
                .map(OutputAction::Key)
                .ok_or(SchemaError::UnknownKey(name))
        }
        "mouse_button" => {
            let operand = tokens
                .next()
                .ok_or_else(|| SchemaError::MalformedBinding(expression.to_string()))?;
            MouseButton::from_name(operand)
                .map(OutputAction::MouseButton)
                .ok_or_else(|| SchemaError::UnknownMouseButton(operand.to_string()))
        }
        "mouse_wheel" => {
            debug!(binding = expression, "mouse_wheel bindings are not supported");
            Ok(OutputAction::None)
        }
        other => {
            debug!(kind = other, binding = expression, "Unsupported binding kind");
            Ok(OutputAction::None)
        }
    }
}

/// Clean a `key_press` operand into a key name
///
/// Steps, in order:
/// 1. Remove `_ARROW` (`LEFT_ARROW` → `LEFT`)
/// 2. Remove all underscores (`LEFT_SHIFT` → `LEFTSHIFT`)
/// 3. Cut at the first comma; the format lists alternate labels
///    (`W,` or `W,w` → `W`) and only the first is used
/// 4. Rename `PERIOD` to `DOT`
pub fn clean_key_token(token: &str) -> String {
    let without_arrow = token.replace("_ARROW", "");
    let mut name = without_arrow.replace('_', "");

    if let Some(comma) = name.find(',') {
        name.truncate(comma);
    }

    if name == "PERIOD" {
        name = "DOT".to_string();
    }

    name
}
