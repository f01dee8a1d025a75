//! Student and group rosters, optionally narrowed to an allow-list

use serde::Serialize;

use super::Mode;
use crate::store::{HierarchicalStore, join_key};

/// A fixed team of students sharing one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: String,
    pub members: Vec<String>,
}

impl Group {
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

fn allowed<T: AsRef<str>>(only: &[T], candidate: &str) -> bool {
    only.is_empty() || only.iter().any(|entry| entry.as_ref() == candidate)
}

/// Read `<course>.students` for a per-student assignment.
///
/// A non-empty `only` keeps the roster entries it names. The result follows
/// roster order, not the order of `only`. Per-group assignments get an empty
/// list.
pub(crate) fn resolve_students<S, T>(store: &S, mode: Mode, course: &str, only: &[T]) -> Vec<String>
where
    S: HierarchicalStore + ?Sized,
    T: AsRef<str>,
{
    if mode.is_per_group() {
        return Vec::new();
    }

    store
        .get_string_slice(&join_key(course, "students"))
        .into_iter()
        .filter(|student| allowed(only, student))
        .collect()
}

/// Read `<course>.groups` for a per-group assignment.
///
/// A non-empty `only` keeps the groups it names; member lists are never
/// filtered. Groups come back sorted by name. Per-student assignments get an
/// empty list.
pub(crate) fn resolve_groups<S, T>(store: &S, mode: Mode, course: &str, only: &[T]) -> Vec<Group>
where
    S: HierarchicalStore + ?Sized,
    T: AsRef<str>,
{
    if !mode.is_per_group() {
        return Vec::new();
    }

    // BTreeMap iteration yields names in sorted order
    store
        .get_string_map_string_slice(&join_key(course, "groups"))
        .into_iter()
        .filter(|(name, _)| allowed(only, name))
        .map(|(name, members)| Group { name, members })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TreeStore;
    use serde_json::json;

    const NONE: &[&str] = &[];

    fn course() -> TreeStore {
        TreeStore::new()
            .with("cs1.students", json!(["dora", "alice", "carol", "bob"]))
            .with(
                "cs1.groups",
                json!({ "zeta": ["z1"], "alpha": ["a1", "a2"], "mid": ["m1"] }),
            )
    }

    #[test]
    fn students_unfiltered_keep_roster_order() {
        assert_eq!(
            resolve_students(&course(), Mode::PerStudent, "cs1", NONE),
            vec!["dora", "alice", "carol", "bob"]
        );
    }

    #[test]
    fn students_filter_keeps_roster_order() {
        let only = ["bob", "dora"];
        assert_eq!(
            resolve_students(&course(), Mode::PerStudent, "cs1", &only),
            vec!["dora", "bob"]
        );
    }

    #[test]
    fn students_filter_drops_unknown_names() {
        let only = ["mallory", "alice"];
        assert_eq!(
            resolve_students(&course(), Mode::PerStudent, "cs1", &only),
            vec!["alice"]
        );
    }

    #[test]
    fn students_filter_without_matches_is_empty() {
        let only = vec!["mallory".to_string()];
        assert!(resolve_students(&course(), Mode::PerStudent, "cs1", &only).is_empty());
    }

    #[test]
    fn students_empty_for_group_mode() {
        assert!(resolve_students(&course(), Mode::PerGroup, "cs1", NONE).is_empty());
    }

    #[test]
    fn groups_sorted_by_name() {
        let names: Vec<_> = resolve_groups(&course(), Mode::PerGroup, "cs1", NONE)
            .into_iter()
            .map(|group| group.name)
            .collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn groups_filter_keeps_members_intact() {
        let only = ["zeta", "alpha", "nope"];
        assert_eq!(
            resolve_groups(&course(), Mode::PerGroup, "cs1", &only),
            vec![
                Group::new("alpha", vec!["a1".into(), "a2".into()]),
                Group::new("zeta", vec!["z1".into()]),
            ]
        );
    }

    #[test]
    fn groups_filter_does_not_match_member_names() {
        let only = ["a1"];
        assert!(resolve_groups(&course(), Mode::PerGroup, "cs1", &only).is_empty());
    }

    #[test]
    fn groups_empty_for_student_mode() {
        assert!(resolve_groups(&course(), Mode::PerStudent, "cs1", NONE).is_empty());
    }

    #[test]
    fn missing_rosters_are_empty() {
        let store = TreeStore::new().with("cs1.coursepath", "repo");
        assert!(resolve_students(&store, Mode::PerStudent, "cs1", NONE).is_empty());
        assert!(resolve_groups(&store, Mode::PerGroup, "cs1", NONE).is_empty());
    }
}
