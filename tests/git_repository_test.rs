// tests/git_repository_test.rs
mod common;

use common::TestRepo;
use gitversion::config::{BuildNumberStrategy, VersionConfig};
use gitversion::domain::BranchType;
use gitversion::git::{inspect, Git2Repository, Repository};
use gitversion::VersionCalculator;

#[test]
fn test_current_branch_and_tags() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.tag("v1.0.0");
    test_repo.commit("feat: login");
    test_repo.tag("v1.1.0");
    test_repo.tag("other-tag");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert_eq!(repo.current_branch().unwrap(), "main");

    let mut tags = repo.list_tags().unwrap();
    tags.sort();
    assert_eq!(tags, vec!["other-tag", "v1.0.0", "v1.1.0"]);
}

#[test]
fn test_open_from_subdirectory() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    let nested = test_repo.path().join("nested/dir");
    std::fs::create_dir_all(&nested).unwrap();

    let repo = Git2Repository::open(&nested).unwrap();
    assert_eq!(repo.current_branch().unwrap(), "main");
}

#[test]
fn test_detached_head_reports_head() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.detach_head();

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert_eq!(repo.current_branch().unwrap(), "HEAD");
}

#[test]
fn test_commits_since_lightweight_tag() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.tag("v1.0.0");
    test_repo.commit("feat: first");
    test_repo.commit("fix: second");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let commits = repo.commits_since(Some("v1.0.0")).unwrap();
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].summary, "fix: second");
    assert_eq!(commits[0].to_string(), format!("{} fix: second", &commits[0].hash[..7]));

    assert_eq!(repo.commits_since(None).unwrap().len(), 3);
}

#[test]
fn test_commits_since_annotated_tag() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.annotated_tag("v2.0.0");
    test_repo.commit("feat: after");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let commits = repo.commits_since(Some("v2.0.0")).unwrap();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].summary, "feat: after");
}

#[test]
fn test_commits_since_missing_tag_fails() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert!(repo.commits_since(Some("v9.9.9")).is_err());
}

#[test]
fn test_inspect_feature_branch() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.tag("v1.2.3");
    test_repo.tag("nightly");
    test_repo.checkout_new_branch("feature/add-login");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let state = inspect(&repo, &VersionConfig::default()).unwrap();
    assert_eq!(state.current_branch, "feature/add-login");
    assert_eq!(state.tags, vec!["v1.2.3".to_string()]);
    assert_eq!(state.branch_type, Some(BranchType::Feature));
}

#[test]
fn test_end_to_end_commit_count() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.tag("v1.2.3");
    test_repo.checkout_new_branch("develop");
    test_repo.commit("feat: a");
    test_repo.commit("feat: b");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let config = VersionConfig::default();
    let state = inspect(&repo, &config).unwrap();
    let result = VersionCalculator::new(config).calculate(&state, &repo);

    assert_eq!(result.version, "1.3.0.2");
    assert_eq!(result.build, Some(2));
    assert_eq!(result.commits.as_ref().map(Vec::len), Some(2));
}

#[test]
fn test_end_to_end_release_branch_without_suffix() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.tag("v1.2.3");
    test_repo.checkout_new_branch("release/1.3.0");
    test_repo.commit("chore: prepare release");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let config = VersionConfig {
        build_number_strategy: BuildNumberStrategy::None,
        ..VersionConfig::default()
    };
    let state = inspect(&repo, &config).unwrap();
    let result = VersionCalculator::new(config).calculate(&state, &repo);

    assert_eq!(result.version, "1.3.0");
    assert_eq!(result.tag.as_deref(), Some("v1.2.3"));
}
