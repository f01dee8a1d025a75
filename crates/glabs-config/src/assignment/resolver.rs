//! Entry point turning a store section into an [`AssignmentConfig`]

use serde::Serialize;

use super::access::resolve_access_level;
use super::mode::resolve_mode;
use super::participants::{resolve_groups, resolve_students};
use super::path::resolve_path;
use super::startercode::resolve_startercode;
use super::{AccessLevel, Group, Mode, Startercode};
use crate::store::{HierarchicalStore, join_key};
use crate::{Error, Result};

/// Description used when the assignment does not set one.
pub const DEFAULT_DESCRIPTION: &str = "generated by glabs";

/// Fully resolved configuration of one assignment.
///
/// Exactly one of `students` and `groups` can be non-empty, chosen by `mode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentConfig {
    pub course: String,
    pub name: String,
    pub path: String,
    pub mode: Mode,
    pub description: String,
    pub container_registry: bool,
    pub access_level: AccessLevel,
    pub students: Vec<String>,
    pub groups: Vec<Group>,
    pub startercode: Option<Startercode>,
}

impl AssignmentConfig {
    /// Dotted store key of this assignment.
    pub fn key(&self) -> String {
        join_key(&self.course, &self.name)
    }

    /// Number of repositories this assignment provisions.
    pub fn participant_count(&self) -> usize {
        match self.mode {
            Mode::PerStudent => self.students.len(),
            Mode::PerGroup => self.groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.participant_count() == 0
    }
}

/// Resolves assignment sections of a [`HierarchicalStore`].
///
/// # Example
///
/// ```
/// use glabs_config::{AccessLevel, AssignmentResolver, Mode};
/// use glabs_config::store::TreeStore;
///
/// let store = TreeStore::new()
///     .with("cs1.coursepath", "repo")
///     .with("cs1.students", serde_json::json!(["alice"]))
///     .with("cs1.hw1.accesslevel", "reporter");
///
/// let config = AssignmentResolver::new(&store).resolve("cs1", "hw1").unwrap();
/// assert_eq!(config.mode, Mode::PerStudent);
/// assert_eq!(config.access_level, AccessLevel::Reporter);
/// assert_eq!(config.students, vec!["alice"]);
/// ```
pub struct AssignmentResolver<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> AssignmentResolver<'a, S>
where
    S: HierarchicalStore + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve an assignment with its full roster.
    pub fn resolve(&self, course: &str, assignment: &str) -> Result<AssignmentConfig> {
        self.resolve_only::<&str>(course, assignment, &[])
    }

    /// Resolve an assignment, keeping only the students or groups named in
    /// `only`. An empty `only` keeps everyone.
    ///
    /// Fails with [`Error::ConfigMissing`] when the course or the assignment
    /// section does not exist, and with [`Error::StartercodeMissingUrl`] when
    /// a startercode section lacks its url. Nothing is returned on failure.
    pub fn resolve_only<T>(
        &self,
        course: &str,
        assignment: &str,
        only: &[T],
    ) -> Result<AssignmentConfig>
    where
        T: AsRef<str>,
    {
        let store = self.store;

        if !store.is_set(course) {
            return Err(Error::course_missing(course));
        }

        let assignment_key = join_key(course, assignment);
        if !store.is_set(&assignment_key) {
            return Err(Error::assignment_missing(assignment_key));
        }

        tracing::debug!(course, assignment, filter = only.len(), "Resolving assignment");

        let mode = resolve_mode(store, &assignment_key);
        let path = resolve_path(store, course, assignment);
        let description = resolve_description(store, &assignment_key);
        let container_registry = store.get_bool(&join_key(&assignment_key, "containerRegistry"));
        let access_level = resolve_access_level(store, &assignment_key);
        let students = resolve_students(store, mode, course, only);
        let groups = resolve_groups(store, mode, course, only);
        let startercode = resolve_startercode(store, &assignment_key)?;

        Ok(AssignmentConfig {
            course: course.to_string(),
            name: assignment.to_string(),
            path,
            mode,
            description,
            container_registry,
            access_level,
            students,
            groups,
            startercode,
        })
    }
}

/// Resolve `<course>.<assignment>` from `store`, narrowed to `only` when it is
/// non-empty.
pub fn resolve_assignment<S, T>(
    store: &S,
    course: &str,
    assignment: &str,
    only: &[T],
) -> Result<AssignmentConfig>
where
    S: HierarchicalStore + ?Sized,
    T: AsRef<str>,
{
    AssignmentResolver::new(store).resolve_only(course, assignment, only)
}

fn resolve_description<S>(store: &S, assignment_key: &str) -> String
where
    S: HierarchicalStore + ?Sized,
{
    let description = store.get_string(&join_key(assignment_key, "description"));
    if description.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        description
    }
}
