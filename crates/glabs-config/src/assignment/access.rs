//! Access levels granted on provisioned repositories

use std::fmt;

use serde::Serialize;

use crate::store::{HierarchicalStore, join_key};

/// Role-based permission tier. The discriminant is the numeric level GitLab uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Guest = 10,
    Reporter = 20,
    #[default]
    Developer = 30,
    Maintainer = 40,
}

impl AccessLevel {
    /// Map a lower-case role name to a level.
    ///
    /// Unknown names, including typos and other casings, resolve to
    /// [`AccessLevel::Developer`] rather than failing.
    pub fn from_role(role: &str) -> Self {
        match role {
            "guest" => AccessLevel::Guest,
            "reporter" => AccessLevel::Reporter,
            "maintainer" => AccessLevel::Maintainer,
            _ => AccessLevel::Developer,
        }
    }

    /// Numeric access level.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn role(self) -> &'static str {
        match self {
            AccessLevel::Guest => "guest",
            AccessLevel::Reporter => "reporter",
            AccessLevel::Developer => "developer",
            AccessLevel::Maintainer => "maintainer",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role())
    }
}

/// Read `<assignment_key>.accesslevel`.
pub(crate) fn resolve_access_level<S>(store: &S, assignment_key: &str) -> AccessLevel
where
    S: HierarchicalStore + ?Sized,
{
    let role = store.get_string(&join_key(assignment_key, "accesslevel"));
    let level = AccessLevel::from_role(&role);
    if !role.is_empty() && level.role() != role {
        tracing::trace!(assignment_key, %role, "unrecognized access level, using developer");
    }
    level
}
