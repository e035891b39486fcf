use std::fmt;

/// Non-fatal conditions met while computing a version.
/// These never stop the calculation but should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Commit history could not be read; the build number falls back to zero
    CommitHistoryUnavailable { reason: String },
    /// No tag carries the configured prefix
    NoMatchingTags { prefix: String },
    /// Tag carries the prefix but no numeric version could be read from it
    UnparsableTag { tag: String },
    /// A configuration field had the wrong shape and was dropped
    ConfigFieldIgnored { field: String, reason: String },
    /// `branch-prefixes` names a branch type that does not exist
    UnknownBranchType { key: String },
    /// Config file exists but is not valid TOML; defaults are used instead
    MalformedConfig { path: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::CommitHistoryUnavailable { reason } => {
                write!(
                    f,
                    "Cannot read commit history, using build number 0: {}",
                    reason
                )
            }
            BoundaryWarning::NoMatchingTags { prefix } => {
                write!(f, "No tags found with prefix '{}'", prefix)
            }
            BoundaryWarning::UnparsableTag { tag } => {
                write!(f, "Tag '{}' has no readable version, treating it as 0.0.0", tag)
            }
            BoundaryWarning::ConfigFieldIgnored { field, reason } => {
                write!(f, "Ignoring config field '{}': {}", field, reason)
            }
            BoundaryWarning::UnknownBranchType { key } => {
                write!(f, "Ignoring unknown branch type '{}' in branch-prefixes", key)
            }
            BoundaryWarning::MalformedConfig { path, reason } => {
                write!(f, "Config file '{}' is malformed, using defaults: {}", path, reason)
            }
        }
    }
}

impl BoundaryWarning {
    /// Emit this warning on the diagnostic stream
    pub fn report(&self) {
        tracing::warn!("{}", self);
    }
}
