//! Loading the configuration file into a store

use std::fs;
use std::path::Path;

use glabs_config::TreeStore;
use glabs_config::store::Format;

use crate::error::{CliError, Result};

/// Read `path` and parse it in the format its extension names.
pub fn load_store(path: &Path) -> Result<TreeStore> {
    let format = Format::from_path(path)?;
    tracing::debug!(?path, %format, "Loading configuration");

    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(TreeStore::parse(&content, format)?)
}
