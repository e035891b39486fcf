mod common;

use common::TestRepo;
use gitversion::cli::{run_version_workflow, VersionWorkflowArgs};
use gitversion::config::BuildNumberStrategy;
use std::fs;

#[test]
fn test_version_workflow_args_structure() {
    let args = VersionWorkflowArgs {
        repo_path: "/path/to/repo".into(),
        config_path: Some("/path/to/config.toml".into()),
        strategy: Some(BuildNumberStrategy::Timestamp),
    };

    assert_eq!(args.strategy, Some(BuildNumberStrategy::Timestamp));
    assert!(args.config_path.is_some());
}

#[test]
fn test_workflow_on_tagged_main() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.tag("v1.2.3");

    // Missing explicit config: defaults, without looking at the user config dir
    let args = VersionWorkflowArgs {
        repo_path: test_repo.path().to_path_buf(),
        config_path: Some(test_repo.path().join("absent.toml")),
        strategy: Some(BuildNumberStrategy::None),
    };

    let result = run_version_workflow(&args).unwrap();
    assert_eq!(result.version, "1.2.3");
    assert_eq!(result.branch, "main");
    assert_eq!(result.tag.as_deref(), Some("v1.2.3"));
}

#[test]
fn test_workflow_is_repeatable() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.tag("v1.2.3");
    test_repo.commit("feat: a");
    test_repo.commit("feat: b");
    test_repo.checkout_new_branch("develop");

    let args = VersionWorkflowArgs {
        repo_path: test_repo.path().to_path_buf(),
        config_path: Some(test_repo.path().join("absent.toml")),
        strategy: Some(BuildNumberStrategy::CommitCount),
    };

    let first = run_version_workflow(&args).unwrap();
    let second = run_version_workflow(&args).unwrap();
    assert_eq!(first.version, "1.3.0.2");
    assert_eq!(first.version, second.version);
    assert_eq!(first.commits, second.commits);
}

#[test]
fn test_workflow_reads_repo_config() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.tag("release-2.0.0");
    test_repo.tag("v9.0.0");
    test_repo.checkout_new_branch("fix/crash");
    fs::write(
        test_repo.path().join("gitversion.toml"),
        r#"
tag-prefix = "release-"
build-number-strategy = "none"

[branch-prefixes]
hotfix = "fix/"
"#,
    )
    .unwrap();

    let args = VersionWorkflowArgs {
        repo_path: test_repo.path().to_path_buf(),
        ..VersionWorkflowArgs::default()
    };

    let result = run_version_workflow(&args).unwrap();
    assert_eq!(result.version, "2.0.1");
    assert_eq!(result.tag.as_deref(), Some("release-2.0.0"));
}

#[test]
fn test_workflow_strategy_override_beats_config() {
    let test_repo = TestRepo::new();
    test_repo.commit("initial");
    test_repo.tag("v1.0.0");
    test_repo.commit("feat: more");
    fs::write(
        test_repo.path().join("gitversion.toml"),
        "build-number-strategy = \"none\"\n",
    )
    .unwrap();

    let args = VersionWorkflowArgs {
        repo_path: test_repo.path().to_path_buf(),
        config_path: None,
        strategy: Some(BuildNumberStrategy::CommitCount),
    };

    // main at 1.0.0: no older tag, so all history counts
    let result = run_version_workflow(&args).unwrap();
    assert_eq!(result.version, "1.0.0.2");
}

#[test]
fn test_workflow_outside_repository_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    if git2::Repository::discover(dir.path()).is_ok() {
        return;
    }

    let args = VersionWorkflowArgs {
        repo_path: dir.path().to_path_buf(),
        ..VersionWorkflowArgs::default()
    };

    let err = run_version_workflow(&args).unwrap_err();
    assert!(format!("{:#}", err).contains("Not a git repository"));
}
