pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use analyzer::{calculate_version, VersionCalculator, VersionResult};
pub use config::{BuildNumberStrategy, VersionConfig};
pub use domain::{BranchType, RepositoryState, VersionTriple};
pub use error::{GitVersionError, Result};
