//! Sample course documents.
//!
//! Both documents describe the same `cs1` course:
//!
//! - `hw1` — per group, reporter access, startercode on `main`, container registry
//! - `hw2` — per student, maintainer access, no startercode
//! - `broken` — startercode section without a url

use std::path::PathBuf;

/// The `cs1` course as YAML.
pub const COURSE_YAML: &str = include_str!("../../../test-fixtures/courses/cs1.yml");

/// The `cs1` course as TOML.
pub const COURSE_TOML: &str = include_str!("../../../test-fixtures/courses/cs1.toml");

/// Students of `cs1` in roster order.
pub const STUDENTS: [&str; 4] = ["alice", "bob", "carol", "dave"];

/// Absolute path of a file under `test-fixtures/courses/`.
///
/// # Panics
/// Panics if the fixture does not exist.
pub fn course_fixture(name: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/courses")
        .join(name);
    assert!(
        path.is_file(),
        "course_fixture: no fixture at {}",
        path.display()
    );
    path
}
