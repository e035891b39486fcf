use super::branch::BranchType;

/// Snapshot of the repository facts the version engine works from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryState {
    pub current_branch: String,
    /// Tag names in any order; the engine ranks them itself
    pub tags: Vec<String>,
    pub branch_type: Option<BranchType>,
}

impl RepositoryState {
    pub fn new(
        current_branch: impl Into<String>,
        tags: Vec<String>,
        branch_type: Option<BranchType>,
    ) -> Self {
        RepositoryState {
            current_branch: current_branch.into(),
            tags,
            branch_type,
        }
    }
}
