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

//! Steam Controller VDF Binding Compiler
//!
//! Turns a Steam Controller configuration file (VDF) into a table of
//! input-to-output bindings that an event mapper can apply to a virtual
//! keyboard, mouse and gamepad.
//!
//! # Features
//!
//! - **Duplicate-key repair:** Repeated VDF keys become ordered sequences
//! - **Normalization:** Groups keyed by id, source bindings inverted
//! - **Binding resolution:** `key_press` / `mouse_button` expressions mapped
//!   to evdev key and button symbols
//! - **Region compilation:** Trackpads, joystick, button diamond, switches
//!   and triggers compiled according to each group's mode
//!
//! # Architecture
//!
//! - **`core`:** Pure logic (reader, normalizer, resolver, compiler)
//! - **`config`:** File loading and the end-to-end pipeline
//! - **`mapper`:** Contract with the external event mapper
//!
//! Data flows one way: raw text → merged tree → normalized tables →
//! binding table → event mapper.
//!
//! # Examples
//!
//! ## Compiling a config file
//!
//! ```no_run
//! use sc_vdf_mapper::config::ConfigManager;
//!
//! let manager = ConfigManager::new("/tmp/controller_config.vdf".into())?;
//! let table = manager.compile(None)?;
//!
//! for (region, bundle) in table.regions() {
//!     println!("{}: {:?}", region, bundle);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Applying a table
//!
//! ```no_run
//! use sc_vdf_mapper::config::ConfigManager;
//! use sc_vdf_mapper::mapper::DryRunMapper;
//!
//! let table = ConfigManager::new("/tmp/controller_config.vdf".into())?.compile(None)?;
//!
//! let mut mapper = DryRunMapper::new();
//! table.apply(&mut mapper);
//! for call in mapper.calls() {
//!     println!("{}", call);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod mapper;

// Re-export commonly used types for convenience
pub use core::{BindingTable, OutputAction, PhysicalRegion, RegionBindingBundle};
