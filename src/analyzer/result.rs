use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::{BranchType, VersionTriple};

/// Build number attached to a version
#[derive(Debug, Clone, PartialEq)]
pub enum BuildNumber {
    None,
    /// Commits since the reference tag, with their one-line summaries
    CommitCount { commits: Vec<String> },
    /// Unix milliseconds at calculation time
    Timestamp(u64),
}

/// Everything known about a computed version.
///
/// Serializes with camelCase keys; `tag` and `branchType` serialize as
/// `null` when absent, `build` and `commits` are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResult {
    pub version: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub branch: String,
    pub tag: Option<String>,
    pub branch_type: Option<BranchType>,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits: Option<Vec<String>>,
}

impl VersionResult {
    /// The `major.minor.patch` part without any build number
    pub fn triple(&self) -> VersionTriple {
        VersionTriple::new(self.major, self.minor, self.patch)
    }
}

/// Assembles a [`VersionResult`]
#[derive(Debug, Clone)]
pub struct VersionResultBuilder {
    version: VersionTriple,
    branch: String,
    tag: Option<String>,
    branch_type: Option<BranchType>,
    build: BuildNumber,
    now: DateTime<Utc>,
}

impl VersionResultBuilder {
    pub fn new(version: VersionTriple, branch: impl Into<String>, now: DateTime<Utc>) -> Self {
        VersionResultBuilder {
            version,
            branch: branch.into(),
            tag: None,
            branch_type: None,
            build: BuildNumber::None,
            now,
        }
    }

    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn branch_type(mut self, branch_type: Option<BranchType>) -> Self {
        self.branch_type = branch_type;
        self
    }

    pub fn build_number(mut self, build: BuildNumber) -> Self {
        self.build = build;
        self
    }

    pub fn build(self) -> VersionResult {
        let (build, commits) = match self.build {
            BuildNumber::None => (None, None),
            BuildNumber::CommitCount { commits } => (Some(commits.len() as u64), Some(commits)),
            BuildNumber::Timestamp(millis) => (Some(millis), None),
        };

        let version = match build {
            Some(n) => format!("{}.{}", self.version, n),
            None => self.version.to_string(),
        };

        VersionResult {
            version,
            major: self.version.major,
            minor: self.version.minor,
            patch: self.version.patch,
            branch: self.branch,
            tag: self.tag,
            branch_type: self.branch_type,
            timestamp: self.now.to_rfc3339_opts(SecondsFormat::Millis, true),
            build,
            commits,
        }
    }
}
