//! Main workflow orchestration logic
//!
//! Wires configuration, repository inspection and the version calculator
//! together. Kept apart from `main.rs` so the pipeline can be driven
//! programmatically without clap.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::analyzer::{VersionCalculator, VersionResult};
use crate::config::{load_config, BuildNumberStrategy, VersionConfig};
use crate::git::{inspect, Git2Repository, Repository};

/// Arguments for the version workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionWorkflowArgs {
    /// Directory inside the repository to version
    pub repo_path: PathBuf,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Overrides the configured build number strategy
    pub strategy: Option<BuildNumberStrategy>,
}

impl Default for VersionWorkflowArgs {
    fn default() -> Self {
        VersionWorkflowArgs {
            repo_path: PathBuf::from("."),
            config_path: None,
            strategy: None,
        }
    }
}

/// Inspect `repo` and calculate its version under `config`.
pub fn version_for<R: Repository>(
    repo: &R,
    config: VersionConfig,
) -> crate::error::Result<VersionResult> {
    let state = inspect(repo, &config)?;
    Ok(VersionCalculator::new(config).calculate(&state, repo))
}

/// Main version workflow
///
/// 1. Open the repository at `args.repo_path`
/// 2. Load configuration relative to the repository root
/// 3. Apply CLI overrides
/// 4. Inspect the repository and calculate the version
///
/// # Returns
///
/// The computed version, or an error if the repository cannot be opened or
/// queried, or a config file exists but cannot be read.
pub fn run_version_workflow(args: &VersionWorkflowArgs) -> Result<VersionResult> {
    let repo = Git2Repository::open(&args.repo_path)
        .with_context(|| format!("Cannot open repository at '{}'", args.repo_path.display()))?;

    let repo_root = repo
        .workdir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| args.repo_path.clone());

    let mut config = load_config(args.config_path.as_deref(), &repo_root)
        .context("Failed to load configuration")?;
    if let Some(strategy) = args.strategy {
        config.build_number_strategy = strategy;
    }

    version_for(&repo, config).context("Failed to read repository state")
}
