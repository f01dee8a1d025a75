//! Hierarchical key-value store abstraction
//!
//! The resolver never reads files or global state. It is handed a store that
//! answers dotted-path lookups such as `cs1.hw1.accesslevel` and treats every
//! missing value as the type's empty default.

mod format;
mod tree;

use std::collections::BTreeMap;

pub use format::Format;
pub use tree::TreeStore;

/// Read-only access to a hierarchical configuration keyed by dotted paths.
///
/// Every getter returns the empty value of its type when the path is unset,
/// so callers only consult [`is_set`](HierarchicalStore::is_set) where the
/// distinction matters.
pub trait HierarchicalStore {
    /// Whether any value (scalar or table) exists at `path`.
    fn is_set(&self, path: &str) -> bool;

    fn get_string(&self, path: &str) -> String;

    fn get_bool(&self, path: &str) -> bool;

    fn get_string_slice(&self, path: &str) -> Vec<String>;

    fn get_string_map_string(&self, path: &str) -> BTreeMap<String, String>;

    fn get_string_map_string_slice(&self, path: &str) -> BTreeMap<String, Vec<String>>;
}

/// Append `leaf` to a dotted key path.
pub fn join_key(base: &str, leaf: &str) -> String {
    format!("{base}.{leaf}")
}
