//! Camera and animation options with TOML preset support.
//!
//! Every tweakable default a new camera picks up lives here. Options
//! serialize to/from TOML so a view can be saved and restored as a preset.

mod animation;
mod camera;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LookoutError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera type, projection and initial pose.
    pub camera: CameraOptions,
    /// Landmark animation defaults.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`LookoutError::Io`] if the file cannot be read,
    /// [`LookoutError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, LookoutError> {
        let content =
            std::fs::read_to_string(path).map_err(LookoutError::Io)?;
        toml::from_str(&content)
            .map_err(|e| LookoutError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`LookoutError::OptionsParse`] if serialization fails,
    /// [`LookoutError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LookoutError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LookoutError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LookoutError::Io)?;
        }
        std::fs::write(path, content).map_err(LookoutError::Io)
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
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
