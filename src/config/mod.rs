//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (helix geometry, scroll mapping, camera rig,
//! ambient motion) are consolidated here. Options serialize to/from TOML
//! for presets, and expose a JSON Schema so a host tuning panel can render
//! controls without hardcoding the field list.

mod camera;
mod helix;
mod motion;

use std::path::Path;

pub use camera::CameraOptions;
pub use helix::HelixOptions;
pub use motion::MotionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::HelikaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Helix geometry, scroll mapping, and anchor index tables.
    pub helix: HelixOptions,
    /// Camera rig and projection parameters.
    pub camera: CameraOptions,
    /// Ambient motion and hotspot pulse parameters.
    pub motion: MotionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults; the
    /// loaded tree is validated before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`HelikaError`] if the file cannot be read, is not valid
    /// TOML, or violates a structural invariant.
    pub fn load(path: &Path) -> Result<Self, HelikaError> {
        let content = std::fs::read_to_string(path).map_err(HelikaError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| HelikaError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`HelikaError`] if serialization fails or the file cannot
    /// be written.
    pub fn save(&self, path: &Path) -> Result<(), HelikaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HelikaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(HelikaError::Io)?;
        }
        std::fs::write(path, content).map_err(HelikaError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(std::ffi::OsStr::to_str)
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check every structural invariant the scene math depends on.
    ///
    /// # Errors
    ///
    /// Returns [`HelikaError::InvalidConfig`] naming the first violated
    /// invariant.
    pub fn validate(&self) -> Result<(), HelikaError> {
        self.helix.validate()?;
        self.camera.validate()
    }
}
