//! Source formats a [`TreeStore`](super::TreeStore) can be parsed from

use std::fmt;
use std::path::Path;

use crate::{Error, Result};

/// Text format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Detect the format from a file extension.
    ///
    /// - `toml` -> TOML
    /// - `json` -> JSON
    /// - `yaml`, `yml` -> YAML
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Detect the format from a path's extension. Does not touch the filesystem.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        Self::from_extension(extension)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Toml => write!(f, "TOML"),
            Format::Yaml => write!(f, "YAML"),
            Format::Json => write!(f, "JSON"),
        }
    }
}
