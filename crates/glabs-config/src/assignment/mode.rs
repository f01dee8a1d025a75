//! Per-student / per-group mode

use std::fmt;

use serde::Serialize;

use crate::store::{HierarchicalStore, join_key};

/// Whether an assignment is handed out to individual students or to groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mode {
    /// One repository per student.
    #[default]
    #[serde(rename = "student")]
    PerStudent,

    /// One repository per group.
    #[serde(rename = "group")]
    PerGroup,
}

impl Mode {
    /// Interpret a raw `per` value.
    ///
    /// Only the exact literal `group` selects [`Mode::PerGroup`]. Anything
    /// else, including `Group` and the empty string, falls back to
    /// [`Mode::PerStudent`].
    pub fn from_per(value: &str) -> Self {
        if value == "group" {
            Mode::PerGroup
        } else {
            Mode::PerStudent
        }
    }

    pub fn is_per_group(&self) -> bool {
        matches!(self, Mode::PerGroup)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::PerStudent => write!(f, "student"),
            Mode::PerGroup => write!(f, "group"),
        }
    }
}

/// Read `<assignment_key>.per`.
pub(crate) fn resolve_mode<S>(store: &S, assignment_key: &str) -> Mode
where
    S: HierarchicalStore + ?Sized,
{
    let per = store.get_string(&join_key(assignment_key, "per"));
    let mode = Mode::from_per(&per);
    if !per.is_empty() && per != "student" && !mode.is_per_group() {
        tracing::trace!(assignment_key, %per, "unrecognized per value, using per-student");
    }
    mode
}
