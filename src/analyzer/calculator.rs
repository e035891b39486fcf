use chrono::{DateTime, Utc};

use super::base_version::{resolve_base, BaseSource};
use super::bump_policy::{suffix_kind, target_version, SuffixKind};
use super::result::{BuildNumber, VersionResult, VersionResultBuilder};
use crate::boundary::BoundaryWarning;
use crate::config::VersionConfig;
use crate::domain::{rank_tags_descending, RepositoryState, VersionTriple};
use crate::git::Repository;

/// Computes versions from a repository snapshot
pub struct VersionCalculator {
    config: VersionConfig,
}

impl VersionCalculator {
    /// Create a new version calculator
    pub fn new(config: VersionConfig) -> Self {
        VersionCalculator { config }
    }

    /// Calculate the version, reading commit history from `history` when the
    /// commit-count strategy needs it.
    pub fn calculate(&self, state: &RepositoryState, history: &dyn Repository) -> VersionResult {
        self.calculate_at(state, Some(history), Utc::now())
    }

    /// Calculate without access to commit history. Under the commit-count
    /// strategy no build number is attached, since nothing was counted.
    pub fn calculate_offline(&self, state: &RepositoryState) -> VersionResult {
        self.calculate_at(state, None, Utc::now())
    }

    /// Calculate with an explicit clock
    pub fn calculate_at(
        &self,
        state: &RepositoryState,
        history: Option<&dyn Repository>,
        now: DateTime<Utc>,
    ) -> VersionResult {
        let prefix = self.config.tag_prefix.as_str();
        let base = resolve_base(state, prefix);

        match (&base.tag, base.source) {
            (None, _) => BoundaryWarning::NoMatchingTags {
                prefix: prefix.to_string(),
            }
            .report(),
            (Some(tag), BaseSource::Tag) if base.version.is_zero() => {
                BoundaryWarning::UnparsableTag { tag: tag.clone() }.report()
            }
            _ => {}
        }

        let version = target_version(&base, state.branch_type);

        tracing::debug!(
            base = %base.version,
            source = ?base.source,
            branch_type = ?state.branch_type,
            target = %version,
            "Resolved version"
        );

        let build = match suffix_kind(self.config.build_number_strategy, state.branch_type) {
            SuffixKind::None => BuildNumber::None,
            SuffixKind::Timestamp => {
                BuildNumber::Timestamp(u64::try_from(now.timestamp_millis()).unwrap_or(0))
            }
            SuffixKind::CommitCount => match history {
                Some(history) => {
                    let reference = self.reference_tag(state, version);
                    BuildNumber::CommitCount {
                        commits: commit_summaries(history, reference.as_deref()),
                    }
                }
                None => BuildNumber::None,
            },
        };

        VersionResultBuilder::new(version, state.current_branch.as_str(), now)
            .tag(base.tag)
            .branch_type(state.branch_type)
            .build_number(build)
            .build()
    }

    /// The highest-ranked tag whose version differs from `version`.
    ///
    /// Build numbers count from here, so they keep growing for as long as the
    /// computed version stays the same. `None` means count all history.
    pub fn reference_tag(&self, state: &RepositoryState, version: VersionTriple) -> Option<String> {
        let prefix = self.config.tag_prefix.as_str();
        rank_tags_descending(&state.tags, prefix)
            .into_iter()
            .find(|tag| VersionTriple::from_tag(tag, prefix) != version)
    }
}

/// One-line summaries of commits after `reference`; empty if history cannot
/// be read.
fn commit_summaries(history: &dyn Repository, reference: Option<&str>) -> Vec<String> {
    match history.commits_since(reference) {
        Ok(commits) => {
            tracing::debug!(
                reference = reference.unwrap_or("<root>"),
                count = commits.len(),
                "Counted commits"
            );
            commits.iter().map(|c| c.to_string()).collect()
        }
        Err(e) => {
            BoundaryWarning::CommitHistoryUnavailable {
                reason: e.to_string(),
            }
            .report();
            Vec::new()
        }
    }
}

/// Calculate a version from a snapshot and config, without commit history.
///
/// Pure apart from reading the clock for `timestamp`. The commit-count
/// strategy renders the bare triple here.
pub fn calculate_version(state: &RepositoryState, config: &VersionConfig) -> VersionResult {
    VersionCalculator::new(config.clone()).calculate_offline(state)
}
