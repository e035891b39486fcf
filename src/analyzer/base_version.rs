use crate::domain::{latest_tag, RepositoryState, VersionTriple, DEFAULT_BASE};

/// Where the base version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseSource {
    /// The branch name pins the version (`release/1.3.0`)
    Branch,
    /// The highest-ranked tag
    Tag,
    /// Nothing usable; [`DEFAULT_BASE`]
    Default,
}

/// The starting point for bump policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseVersion {
    pub version: VersionTriple,
    pub source: BaseSource,
    /// Highest-ranked tag, reported even when the branch name won
    pub tag: Option<String>,
}

/// Pick the authoritative base version.
///
/// Precedence: a version encoded in the branch name, then the highest-ranked
/// tag carrying `tag_prefix`, then `0.1.0`.
pub fn resolve_base(state: &RepositoryState, tag_prefix: &str) -> BaseVersion {
    let tag = latest_tag(&state.tags, tag_prefix);

    if let Some(version) = VersionTriple::from_branch(&state.current_branch) {
        return BaseVersion {
            version,
            source: BaseSource::Branch,
            tag,
        };
    }

    match tag {
        Some(tag) => BaseVersion {
            version: VersionTriple::from_tag(&tag, tag_prefix),
            source: BaseSource::Tag,
            tag: Some(tag),
        },
        None => BaseVersion {
            version: DEFAULT_BASE,
            source: BaseSource::Default,
            tag: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BranchType;

    fn state(branch: &str, tags: &[&str], branch_type: Option<BranchType>) -> RepositoryState {
        RepositoryState::new(
            branch,
            tags.iter().map(|s| s.to_string()).collect(),
            branch_type,
        )
    }

    #[test]
    fn test_branch_version_wins_over_tags() {
        let base = resolve_base(
            &state("release/1.3.0", &["v1.2.3", "v2.0.0"], Some(BranchType::Release)),
            "v",
        );
        assert_eq!(base.version, VersionTriple::new(1, 3, 0));
        assert_eq!(base.source, BaseSource::Branch);
        assert_eq!(base.tag, Some("v2.0.0".to_string()));
    }

    #[test]
    fn test_latest_tag_used_when_branch_has_no_version() {
        let base = resolve_base(
            &state("hotfix/fix-crash", &["v1.2.3", "v1.10.0", "v1.9.9"], Some(BranchType::Hotfix)),
            "v",
        );
        assert_eq!(base.version, VersionTriple::new(1, 10, 0));
        assert_eq!(base.source, BaseSource::Tag);
        assert_eq!(base.tag, Some("v1.10.0".to_string()));
    }

    #[test]
    fn test_default_when_nothing_available() {
        let base = resolve_base(&state("main", &[], None), "v");
        assert_eq!(base.version, VersionTriple::new(0, 1, 0));
        assert_eq!(base.source, BaseSource::Default);
        assert_eq!(base.tag, None);
    }

    #[test]
    fn test_tags_with_other_prefix_are_not_candidates() {
        let base = resolve_base(&state("main", &["v9.0.0"], None), "release-");
        assert_eq!(base.source, BaseSource::Default);
    }

    #[test]
    fn test_unparseable_tag_still_selected() {
        let base = resolve_base(&state("main", &["vlatest"], None), "v");
        assert_eq!(base.version, VersionTriple::new(0, 0, 0));
        assert_eq!(base.source, BaseSource::Tag);
    }
}
