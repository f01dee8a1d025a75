//! [`TestConfig`] for tests that need configuration files on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding configuration files.
///
/// # Example
///
/// ```rust
/// use glabs_test_utils::config::TestConfig;
/// use glabs_test_utils::fixtures::COURSE_YAML;
///
/// let config = TestConfig::new();
/// let path = config.write("glabs.yml", COURSE_YAML);
/// assert!(path.is_file());
/// ```
pub struct TestConfig {
    temp_dir: TempDir,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfig {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` (relative to the root) and return its path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestConfig::write: failed to write {}: {e}", path.display()));
        path
    }
}
