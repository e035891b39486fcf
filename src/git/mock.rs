use crate::error::{GitVersionError, Result};
use crate::git::{CommitInfo, Repository};

/// Mock repository for testing without actual git operations.
///
/// Commits are held newest first. Each tag records how many of the newest
/// commits lie after it, which is what [`Repository::commits_since`] returns.
pub struct MockRepository {
    current_branch: Option<String>,
    commits: Vec<CommitInfo>,
    tags: Vec<(String, usize)>,
    fail_history: bool,
}

impl MockRepository {
    /// Create a new empty mock repository with no branch checked out
    pub fn new() -> Self {
        MockRepository {
            current_branch: None,
            commits: Vec::new(),
            tags: Vec::new(),
            fail_history: false,
        }
    }

    pub fn set_current_branch(&mut self, branch: impl Into<String>) {
        self.current_branch = Some(branch.into());
    }

    /// Add a commit on top of HEAD
    pub fn add_commit(&mut self, hash: impl Into<String>, summary: impl Into<String>) {
        self.commits.insert(
            0,
            CommitInfo {
                hash: hash.into(),
                summary: summary.into(),
            },
        );
        for (_, ahead) in self.tags.iter_mut() {
            *ahead += 1;
        }
    }

    /// Tag the current HEAD
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push((name.into(), 0));
    }

    /// Make every history query fail
    pub fn fail_history(&mut self) {
        self.fail_history = true;
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        self.current_branch
            .clone()
            .ok_or_else(|| GitVersionError::repository("not a git repository"))
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.iter().map(|(name, _)| name.clone()).collect())
    }

    fn commits_since(&self, reference_tag: Option<&str>) -> Result<Vec<CommitInfo>> {
        if self.fail_history {
            return Err(GitVersionError::repository("history unavailable"));
        }

        let ahead = match reference_tag {
            Some(tag) => self
                .tags
                .iter()
                .find(|(name, _)| name == tag)
                .map(|(_, ahead)| *ahead)
                .ok_or_else(|| GitVersionError::repository(format!("tag '{}' not found", tag)))?,
            None => self.commits.len(),
        };

        Ok(self.commits.iter().take(ahead).cloned().collect())
    }
}
