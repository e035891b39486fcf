//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the repository queries
//! the version engine needs, so the engine can run against a real repository
//! or an in-memory mock.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! [inspect] turns any [Repository] plus a [VersionConfig] into the
//! [RepositoryState] snapshot consumed by the calculator.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::fmt;

use crate::config::VersionConfig;
use crate::domain::{BranchType, RepositoryState};
use crate::error::Result;

/// Commit information surfaced in version results
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The full commit hash
    pub hash: String,
    /// First line of the commit message
    pub summary: String,
}

impl CommitInfo {
    /// The first seven characters of the hash
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}

impl fmt::Display for CommitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.short_hash(), self.summary)
    }
}

/// Common git query trait for abstraction
///
/// ## Thread Safety
///
/// Implementors must be `Send`. `git2::Repository` is not `Sync`, so neither
/// is this trait.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map underlying
/// errors (like `git2::Error`) to [crate::error::GitVersionError] variants.
pub trait Repository: Send {
    /// Name of the checked-out branch.
    ///
    /// Returns `"HEAD"` when HEAD is detached.
    fn current_branch(&self) -> Result<String>;

    /// All tag names in the repository, in no particular order
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commits reachable from HEAD but not from `reference_tag`, newest first.
    ///
    /// # Arguments
    /// * `reference_tag` - Tag to stop at; `None` walks the whole history
    ///
    /// # Returns
    /// * `Ok(Vec<CommitInfo>)` - Commits after the tag
    /// * `Err` - If HEAD or the tag cannot be resolved
    fn commits_since(&self, reference_tag: Option<&str>) -> Result<Vec<CommitInfo>>;
}

/// Read the branch and tags from `repo` and classify the branch.
///
/// Tags without the configured prefix are dropped here; the branch type is the
/// one whose configured prefix is the longest match, or `None`.
pub fn inspect<R: Repository + ?Sized>(repo: &R, config: &VersionConfig) -> Result<RepositoryState> {
    let current_branch = repo.current_branch()?;

    let tags: Vec<String> = repo
        .list_tags()?
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty() && config.matches_tag(tag))
        .collect();

    let branch_type = BranchType::classify(&current_branch, &config.branch_prefixes);

    tracing::debug!(
        branch = %current_branch,
        branch_type = ?branch_type,
        tags = tags.len(),
        "Inspected repository"
    );

    Ok(RepositoryState {
        current_branch,
        tags,
        branch_type,
    })
}
