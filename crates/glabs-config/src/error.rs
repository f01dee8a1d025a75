//! Error types for glabs-config

/// Result type for glabs-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a store or resolving an assignment
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A course or assignment section is missing from the store
    #[error("configuration for {kind} not found at key `{path}`")]
    ConfigMissing { kind: MissingKind, path: String },

    /// A startercode section exists but carries no url
    #[error("startercode provided without url at key `{path}.url`")]
    StartercodeMissingUrl { path: String },

    #[error("Failed to parse {format} configuration: {message}")]
    StoreParse { format: String, message: String },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

/// Which level of the course hierarchy was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKind {
    Course,
    Assignment,
}

impl std::fmt::Display for MissingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingKind::Course => write!(f, "course"),
            MissingKind::Assignment => write!(f, "assignment"),
        }
    }
}

impl Error {
    pub fn course_missing(path: impl Into<String>) -> Self {
        Self::ConfigMissing {
            kind: MissingKind::Course,
            path: path.into(),
        }
    }

    pub fn assignment_missing(path: impl Into<String>) -> Self {
        Self::ConfigMissing {
            kind: MissingKind::Assignment,
            path: path.into(),
        }
    }

    /// Whether this error is a configuration precondition failure.
    ///
    /// Precondition failures mean the configuration itself is wrong and the
    /// caller must stop before provisioning anything. Store construction
    /// errors are reported separately.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::ConfigMissing { .. } | Error::StartercodeMissingUrl { .. }
        )
    }

    /// The dotted key path the resolver expected to find, if any.
    pub fn key_path(&self) -> Option<&str> {
        match self {
            Error::ConfigMissing { path, .. } | Error::StartercodeMissingUrl { path } => {
                Some(path)
            }
            _ => None,
        }
    }
}
