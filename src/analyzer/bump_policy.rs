//! Branch-type bump policy
//!
//! | branch type | version                                   | timestamp suffix |
//! |-------------|-------------------------------------------|------------------|
//! | main        | base                                      | no               |
//! | develop     | minor + 1, patch 0                        | yes              |
//! | feature     | minor + 1, patch 0                        | yes              |
//! | release     | minor + 1, patch 0, unless pinned by name | no               |
//! | hotfix      | patch + 1, unless pinned by name          | no               |
//! | other       | base                                      | no               |
//!
//! The commit-count suffix applies to every branch type.

use super::base_version::{BaseSource, BaseVersion};
use crate::config::BuildNumberStrategy;
use crate::domain::{BranchType, VersionBump, VersionTriple};

/// Which kind of build number a version gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixKind {
    CommitCount,
    Timestamp,
    None,
}

/// The increment a branch type applies to its base
pub fn bump_for(branch_type: Option<BranchType>) -> Option<VersionBump> {
    match branch_type {
        Some(BranchType::Develop | BranchType::Feature | BranchType::Release) => {
            Some(VersionBump::Minor)
        }
        Some(BranchType::Hotfix) => Some(VersionBump::Patch),
        Some(BranchType::Main) | None => None,
    }
}

/// Compute the output version for a branch type.
pub fn target_version(base: &BaseVersion, branch_type: Option<BranchType>) -> VersionTriple {
    let Some(bump) = bump_for(branch_type) else {
        return base.version;
    };

    // A release/hotfix branch named after its version already is the target
    let pinned_by_branch = base.source == BaseSource::Branch
        && matches!(branch_type, Some(BranchType::Release | BranchType::Hotfix));
    if pinned_by_branch {
        return base.version;
    }

    base.version.bump(bump)
}

/// Decide which build number, if any, the rendered version carries
pub fn suffix_kind(strategy: BuildNumberStrategy, branch_type: Option<BranchType>) -> SuffixKind {
    match strategy {
        BuildNumberStrategy::CommitCount => SuffixKind::CommitCount,
        BuildNumberStrategy::Timestamp => match branch_type {
            Some(BranchType::Develop | BranchType::Feature) => SuffixKind::Timestamp,
            _ => SuffixKind::None,
        },
        BuildNumberStrategy::None => SuffixKind::None,
    }
}
