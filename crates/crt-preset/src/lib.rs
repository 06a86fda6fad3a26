//! # crt-preset
//!
//! Named geometry parameter sets.
//!
//! A [`Preset`] bundles a [`ChainParams`] with a display name and can be
//! read from three formats:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.json` | Structured JSON |
//! | `.yaml`, `.yml` | Structured YAML |
//! | `.slangp`, `.preset`, `.txt` | Shader-preset `key = value` lines ([`kv`]) |
//!
//! Missing parameters keep their identity defaults, so an empty preset
//! leaves the image untouched. Structured presets reject unknown fields;
//! key/value files skip them unless read with
//! [`Preset::from_kv_str_strict`].
//!
//! # Example
//!
//! ```rust
//! use crt_preset::Preset;
//!
//! let preset = Preset::from_yaml_str(
//!     "name: pvm\nchain:\n  theta: 1.0\n  correction:\n    trapezoid: 0.05\n",
//! )
//! .unwrap();
//! assert_eq!(preset.name, "pvm");
//! assert_eq!(preset.chain.correction.trapezoid, 0.05);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod kv;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use crt_geometry::{ChainParams, CorrectionParams};
pub use error::{PresetError, PresetResult};

/// Supported on-disk preset formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetFormat {
    /// Structured JSON.
    Json,
    /// Structured YAML.
    Yaml,
    /// `key = value` lines.
    KeyValue,
}

impl PresetFormat {
    /// Picks a format from a file extension.
    pub fn from_path(path: &Path) -> PresetResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "slangp" | "preset" | "txt" => Ok(Self::KeyValue),
            _ => Err(PresetError::UnsupportedFormat { extension: ext }),
        }
    }
}

/// A named parameter set for the CRT signal chain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preset {
    /// Display name.
    pub name: String,
    /// Distortion and correction parameters.
    pub chain: ChainParams,
}

impl Preset {
    /// Creates a preset.
    pub fn new(name: impl Into<String>, chain: ChainParams) -> Self {
        Self {
            name: name.into(),
            chain,
        }
    }

    /// Loads a preset, choosing the format from the file extension.
    ///
    /// Key/value files carry no name; the file stem is used instead. Unknown
    /// keys in key/value files are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> PresetResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PresetError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let format = PresetFormat::from_path(path)?;
        trace!(path = %path.display(), ?format, "Preset::from_file");

        let content = std::fs::read_to_string(path)?;
        let mut preset = match format {
            PresetFormat::Json => Self::from_json_str(&content)?,
            PresetFormat::Yaml => Self::from_yaml_str(&content)?,
            PresetFormat::KeyValue => Self::from_kv_str(&content)?,
        };
        if preset.name.is_empty() {
            preset.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        debug!(name = %preset.name, "Loaded preset");
        Ok(preset)
    }

    /// Parses a structured JSON preset.
    ///
    /// Misspelled or unknown fields are an error.
    pub fn from_json_str(json: &str) -> PresetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a structured YAML preset.
    pub fn from_yaml_str(yaml: &str) -> PresetResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses `key = value` lines, skipping non-geometry keys.
    pub fn from_kv_str(text: &str) -> PresetResult<Self> {
        Ok(Self::new("", kv::parse(text, false)?))
    }

    /// Parses `key = value` lines, rejecting non-geometry keys.
    pub fn from_kv_str_strict(text: &str) -> PresetResult<Self> {
        Ok(Self::new("", kv::parse(text, true)?))
    }

    /// Serializes as pretty-printed JSON.
    pub fn to_json_string(&self) -> PresetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes as YAML.
    pub fn to_yaml_string(&self) -> PresetResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serializes as `key = value` lines, preceded by a name comment.
    pub fn to_kv_string(&self) -> String {
        let mut out = String::new();
        if !self.name.is_empty() {
            out.push_str(&format!("# {}\n\n", self.name));
        }
        out.push_str(&kv::write(&self.chain));
        out
    }

    /// Writes the preset, choosing the format from the file extension.
    pub fn to_file(&self, path: impl AsRef<Path>) -> PresetResult<()> {
        let path = path.as_ref();
        let content = match PresetFormat::from_path(path)? {
            PresetFormat::Json => self.to_json_string()?,
            PresetFormat::Yaml => self.to_yaml_string()?,
            PresetFormat::KeyValue => self.to_kv_string(),
        };
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "Saved preset");
        Ok(())
    }
}
