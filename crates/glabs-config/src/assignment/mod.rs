//! Assignment configuration resolution
//!
//! An assignment lives under `<course>.<assignment>` in the store and inherits
//! its rosters and path prefix from the enclosing course:
//!
//! ```yaml
//! cs1:
//!   coursepath: teaching/cs1
//!   semesterpath: ws24
//!   students: [alice, bob]
//!   groups:
//!     team1: [alice, bob]
//!   hw1:
//!     assignmentpath: hw1
//!     per: group
//!     accesslevel: reporter
//!     startercode:
//!       url: git@gitlab.example.org:cs1/hw1-starter.git
//! ```
//!
//! Each field is derived by its own small resolver; only the mode feeds into
//! another one (it decides whether students or groups are read).

mod access;
mod mode;
mod participants;
mod path;
mod resolver;
mod startercode;

pub use access::AccessLevel;
pub use mode::Mode;
pub use participants::Group;
pub use resolver::{AssignmentConfig, AssignmentResolver, DEFAULT_DESCRIPTION, resolve_assignment};
pub use startercode::{DEFAULT_BRANCH, Startercode};
