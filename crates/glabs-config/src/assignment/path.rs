//! Repository path of an assignment

use crate::store::{HierarchicalStore, join_key};

/// Join `coursepath`, `semesterpath` and `assignmentpath` with `/`.
///
/// Empty optional segments are skipped together with their separator.
/// Slashes inside the segments are left untouched.
pub(crate) fn resolve_path<S>(store: &S, course: &str, assignment: &str) -> String
where
    S: HierarchicalStore + ?Sized,
{
    let mut path = store.get_string(&join_key(course, "coursepath"));

    let semesterpath = store.get_string(&join_key(course, "semesterpath"));
    if !semesterpath.is_empty() {
        path.push('/');
        path.push_str(&semesterpath);
    }

    let assignment_key = join_key(course, assignment);
    let assignmentpath = store.get_string(&join_key(&assignment_key, "assignmentpath"));
    if !assignmentpath.is_empty() {
        path.push('/');
        path.push_str(&assignmentpath);
    }

    path
}
