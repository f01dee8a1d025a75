//! Optional starter repository copied into every provisioned repository

use serde::Serialize;

use crate::store::{HierarchicalStore, join_key};
use crate::{Error, Result};

/// Branch used when `fromBranch` or `toBranch` is not configured.
pub const DEFAULT_BRANCH: &str = "master";

/// Where starter code comes from and which branch it lands on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Startercode {
    pub url: String,
    pub from_branch: String,
    pub to_branch: String,
    pub protect_to_branch: bool,
}

/// Read `<assignment_key>.startercode`.
///
/// Returns `Ok(None)` when the section is absent or empty. A section without
/// a non-empty `url` is a precondition failure.
pub(crate) fn resolve_startercode<S>(store: &S, assignment_key: &str) -> Result<Option<Startercode>>
where
    S: HierarchicalStore + ?Sized,
{
    let key = join_key(assignment_key, "startercode");

    if store.get_string_map_string(&key).is_empty() {
        tracing::debug!(assignment_key, "no startercode provided");
        return Ok(None);
    }

    let url = store.get_string(&join_key(&key, "url"));
    if url.is_empty() {
        return Err(Error::StartercodeMissingUrl { path: key });
    }

    let branch_or_default = |leaf: &str| {
        let branch = store.get_string(&join_key(&key, leaf));
        if branch.is_empty() {
            DEFAULT_BRANCH.to_string()
        } else {
            branch
        }
    };

    Ok(Some(Startercode {
        url,
        from_branch: branch_or_default("fromBranch"),
        to_branch: branch_or_default("toBranch"),
        protect_to_branch: store.get_bool(&join_key(&key, "protectToBranch")),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TreeStore;
    use serde_json::json;

    const URL: &str = "git@gitlab.example.org:cs1/starter.git";

    #[test]
    fn absent_section_is_none() {
        let store = TreeStore::new().with("cs1.hw1.per", "group");
        assert_eq!(resolve_startercode(&store, "cs1.hw1").unwrap(), None);
    }

    #[test]
    fn empty_section_is_none() {
        let store = TreeStore::new().with("cs1.hw1.startercode", json!({}));
        assert_eq!(resolve_startercode(&store, "cs1.hw1").unwrap(), None);
    }

    #[test]
    fn url_only_uses_defaults() {
        let store = TreeStore::new().with("cs1.hw1.startercode.url", URL);
        assert_eq!(
            resolve_startercode(&store, "cs1.hw1").unwrap(),
            Some(Startercode {
                url: URL.to_string(),
                from_branch: "master".to_string(),
                to_branch: "master".to_string(),
                protect_to_branch: false,
            })
        );
    }

    #[test]
    fn explicit_branches_and_protection() {
        let store = TreeStore::new().with(
            "cs1.hw1.startercode",
            json!({
                "url": URL,
                "fromBranch": "solution",
                "toBranch": "main",
                "protectToBranch": true
            }),
        );
        let startercode = resolve_startercode(&store, "cs1.hw1").unwrap().unwrap();
        assert_eq!(startercode.from_branch, "solution");
        assert_eq!(startercode.to_branch, "main");
        assert!(startercode.protect_to_branch);
    }

    #[test]
    fn empty_branch_names_fall_back() {
        let store = TreeStore::new().with(
            "cs1.hw1.startercode",
            json!({ "url": URL, "fromBranch": "", "toBranch": "" }),
        );
        let startercode = resolve_startercode(&store, "cs1.hw1").unwrap().unwrap();
        assert_eq!(startercode.from_branch, DEFAULT_BRANCH);
        assert_eq!(startercode.to_branch, DEFAULT_BRANCH);
    }

    #[test]
    fn missing_url_is_fatal() {
        let store = TreeStore::new().with("cs1.hw1.startercode.toBranch", "main");
        let err = resolve_startercode(&store, "cs1.hw1").unwrap_err();
        assert!(err.is_precondition());
        assert!(
            matches!(&err, Error::StartercodeMissingUrl { path } if path == "cs1.hw1.startercode"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn empty_url_is_fatal() {
        let store = TreeStore::new().with("cs1.hw1.startercode", json!({ "url": "" }));
        assert!(matches!(
            resolve_startercode(&store, "cs1.hw1"),
            Err(Error::StartercodeMissingUrl { .. })
        ));
    }
}
