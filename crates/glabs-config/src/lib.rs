//! Assignment configuration for glabs.
//!
//! Resolves the course → assignment hierarchy of a glabs configuration into
//! an [`AssignmentConfig`] ready for repository provisioning. The resolver
//! reads from any [`HierarchicalStore`]; [`TreeStore`] is the in-memory
//! implementation built from TOML, YAML or JSON documents.
//!
//! # Example
//!
//! ```
//! use glabs_config::{Mode, resolve_assignment};
//! use glabs_config::store::{Format, TreeStore};
//!
//! let store = TreeStore::parse(
//!     r#"
//! [cs1]
//! coursepath = "teaching/cs1"
//!
//! [cs1.groups]
//! g1 = ["a", "b"]
//!
//! [cs1.hw1]
//! per = "group"
//! "#,
//!     Format::Toml,
//! )?;
//!
//! let config = resolve_assignment(&store, "cs1", "hw1", &[] as &[&str])?;
//! assert_eq!(config.mode, Mode::PerGroup);
//! assert_eq!(config.groups[0].members, vec!["a", "b"]);
//! # Ok::<(), glabs_config::Error>(())
//! ```

pub mod assignment;
pub mod error;
pub mod store;

pub use assignment::{
    AccessLevel, AssignmentConfig, AssignmentResolver, Group, Mode, Startercode,
    resolve_assignment,
};
pub use error::{Error, MissingKind, Result};
pub use store::{HierarchicalStore, TreeStore};
