use crate::error::{GitVersionError, Result};
use crate::git::CommitInfo;
use git2::{ErrorCode, Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Discover the git repository containing `path`.
    ///
    /// The directory is always passed in explicitly; the process working
    /// directory is never consulted behind the caller's back.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            GitVersionError::repository(format!(
                "Not a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Root of the working tree, `None` for bare repositories
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => {
                let name = head.shorthand().unwrap_or("HEAD").to_string();
                Ok(name)
            }
            Ok(_) => Ok("HEAD".to_string()),
            // Fresh repository: HEAD names a branch that has no commits yet
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                let target = head.symbolic_target().unwrap_or("HEAD");
                Ok(target.strip_prefix("refs/heads/").unwrap_or(target).to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn commits_since(&self, reference_tag: Option<&str>) -> Result<Vec<CommitInfo>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;

        if let Some(tag_name) = reference_tag {
            // Peeling handles both lightweight and annotated tags
            let tag_commit = self
                .repo
                .find_reference(&format!("refs/tags/{}", tag_name))
                .and_then(|reference| reference.peel_to_commit())
                .map_err(|e| {
                    GitVersionError::repository(format!(
                        "Cannot resolve tag '{}': {}",
                        tag_name,
                        e.message()
                    ))
                })?;
            revwalk.hide(tag_commit.id())?;
        }

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let summary = commit.summary().unwrap_or("(empty message)").to_string();

            commits.push(CommitInfo {
                hash: oid.to_string(),
                summary,
            });
        }

        Ok(commits)
    }
}
