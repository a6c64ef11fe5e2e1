// Copyright 2025 bakri (tidynest@proton.me)
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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and algorithms that turn VDF
//! text into a binding table:
//! - VDF reading with duplicate-key merging
//! - Normalization of groups and source bindings
//! - Binding expression resolution against fixed symbol tables
//! - Per-region compilation and table assembly
//!
//! Nothing here touches the filesystem or a device, so every stage can be
//! unit tested on in-memory strings.

pub mod compiler;
pub mod error;
pub mod keys;
pub mod multimap;
pub mod normalize;
pub mod parser;
pub mod resolver;
pub mod table;
pub mod types;

pub use compiler::compile_region;
pub use error::SchemaError;
pub use keys::{Key, MouseButton};
pub use normalize::{normalize, ControllerMappings};
pub use parser::{parse_vdf, ParseError};
pub use resolver::resolve;
pub use table::{compile, BindingTable};
pub use types::*;

#[cfg(test)]
mod tests;
