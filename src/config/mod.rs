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

//! Controller configuration loading.
//!
//! This module is the only place that touches the filesystem. It runs the
//! whole pipeline for one file:
//!
//! - **Read**: the file is read in one go; the handle is released immediately
//! - **Merge**: VDF text becomes a tree with repeated keys kept as sequences
//! - **Normalize**: groups and source bindings become lookup tables
//! - **Compile**: regions are compiled into a [`BindingTable`]
//!
//! Every load builds fresh structures, so reloading a file never aliases
//! data from an earlier load.
//!
//! # Example
//!
//! ```no_run
//! use sc_vdf_mapper::config::ConfigManager;
//!
//! let manager = ConfigManager::new("/home/user/controller_config.vdf".into())?;
//! let table = manager.compile(None)?;
//! println!("{} regions bound", table.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::{compile, normalize, parse_vdf, BindingTable, ConfigMap, ControllerMappings};

/// Loads one VDF controller configuration file.
#[derive(Debug)]
pub struct ConfigManager {
    /// Path to the VDF configuration file.
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new ConfigManager for the given config file.
    ///
    /// This validates that the config file exists. If the config is a
    /// symlink, a warning is logged but the operation continues.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the config file doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sc_vdf_mapper::config::ConfigManager;
    /// use std::path::PathBuf;
    ///
    /// let manager = ConfigManager::new(
    ///     PathBuf::from("/home/user/controller_config.vdf")
    /// )?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(config_path: PathBuf) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::NotFound(config_path));
        }

        if config_path.read_link().is_ok() {
            warn!(path = %config_path.display(), "Config file is a symlink");
        }

        Ok(Self { config_path })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the raw configuration text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read.
    pub fn read_config(&self) -> Result<String, ConfigError> {
        Ok(fs::read_to_string(&self.config_path)?)
    }

    /// Reads and merges the file into its top-level mapping.
    ///
    /// Repeated keys are kept as ordered sequences; nothing is normalized yet.
    pub fn load_tree(&self) -> Result<ConfigMap, ConfigError> {
        let content = self.read_config()?;
        let tree = parse_vdf(&content)?;
        debug!(path = %self.config_path.display(), keys = tree.len(), "Parsed VDF");
        Ok(tree)
    }

    /// Loads the normalized group and source tables.
    ///
    /// # Arguments
    ///
    /// * `preset` - Preset name to activate; the first preset when `None`
    pub fn load_mappings(&self, preset: Option<&str>) -> Result<ControllerMappings, ConfigError> {
        Ok(normalize(self.load_tree()?, preset)?)
    }

    /// Runs the full pipeline and returns the compiled binding table.
    ///
    /// # Errors
    ///
    /// Any fatal error aborts the load; no partial table is returned.
    pub fn compile(&self, preset: Option<&str>) -> Result<BindingTable, ConfigError> {
        let mappings = self.load_mappings(preset)?;
        Ok(compile(&mappings)?)
    }
}

#[cfg(test)]
mod tests;
