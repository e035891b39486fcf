use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use toml::{Table, Value};

use crate::boundary::BoundaryWarning;
use crate::domain::BranchType;
use crate::error::{GitVersionError, Result};

/// Config file names searched for in the repository root, in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["gitversion.toml", ".gitversion.toml"];

const TAG_PREFIX_KEYS: [&str; 2] = ["tag-prefix", "tagPrefix"];
const BRANCH_PREFIXES_KEYS: [&str; 2] = ["branch-prefixes", "branchPrefixes"];
const STRATEGY_KEYS: [&str; 2] = ["build-number-strategy", "buildNumberStrategy"];

/// How the build-number suffix of a version is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildNumberStrategy {
    /// Number of commits since the last version-changing tag. Reproducible.
    #[default]
    CommitCount,
    /// Wall-clock milliseconds, on develop and feature branches only
    Timestamp,
    /// No suffix at all
    None,
}

impl FromStr for BuildNumberStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "commit-count" | "commitCount" => Ok(BuildNumberStrategy::CommitCount),
            "timestamp" => Ok(BuildNumberStrategy::Timestamp),
            "none" => Ok(BuildNumberStrategy::None),
            other => Err(format!(
                "unknown build number strategy '{}' (expected commit-count, timestamp or none)",
                other
            )),
        }
    }
}

impl fmt::Display for BuildNumberStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildNumberStrategy::CommitCount => write!(f, "commit-count"),
            BuildNumberStrategy::Timestamp => write!(f, "timestamp"),
            BuildNumberStrategy::None => write!(f, "none"),
        }
    }
}

/// Settings that steer version calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConfig {
    /// Literal prefix carried by release tags, e.g. `v` in `v1.2.3`
    pub tag_prefix: String,
    /// Branch-name prefix per branch type
    pub branch_prefixes: BTreeMap<BranchType, String>,
    pub build_number_strategy: BuildNumberStrategy,
}

/// Returns the default branch-prefix table.
fn default_branch_prefixes() -> BTreeMap<BranchType, String> {
    let mut map = BTreeMap::new();
    map.insert(BranchType::Main, "main".to_string());
    map.insert(BranchType::Develop, "develop".to_string());
    map.insert(BranchType::Feature, "feature/".to_string());
    map.insert(BranchType::Release, "release/".to_string());
    map.insert(BranchType::Hotfix, "hotfix/".to_string());
    map
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            tag_prefix: "v".to_string(),
            branch_prefixes: default_branch_prefixes(),
            build_number_strategy: BuildNumberStrategy::default(),
        }
    }
}

impl VersionConfig {
    /// Overlay a parsed TOML table onto the defaults, one field at a time.
    ///
    /// A field of the wrong type is dropped and its default kept. Unknown
    /// top-level keys are ignored silently. Returns the merged config together
    /// with a warning for every value that was discarded.
    pub fn from_table(table: &Table) -> (Self, Vec<BoundaryWarning>) {
        let mut config = VersionConfig::default();
        let mut warnings = Vec::new();

        if let Some((key, value)) = lookup(table, &TAG_PREFIX_KEYS) {
            match value.as_str() {
                Some(prefix) => config.tag_prefix = prefix.to_string(),
                None => warnings.push(ignored(key, "expected a string")),
            }
        }

        if let Some((key, value)) = lookup(table, &BRANCH_PREFIXES_KEYS) {
            match value.as_table() {
                Some(entries) => {
                    let prefixes = parse_branch_prefixes(key, entries, &mut warnings);
                    if prefixes.is_empty() {
                        warnings.push(ignored(key, "no usable entries"));
                    } else {
                        config.branch_prefixes = prefixes;
                    }
                }
                None => warnings.push(ignored(key, "expected a table")),
            }
        }

        if let Some((key, value)) = lookup(table, &STRATEGY_KEYS) {
            match value.as_str().map(str::parse::<BuildNumberStrategy>) {
                Some(Ok(strategy)) => config.build_number_strategy = strategy,
                Some(Err(reason)) => warnings.push(ignored(key, &reason)),
                None => warnings.push(ignored(key, "expected a string")),
            }
        }

        (config, warnings)
    }

    /// Parse TOML source text. A syntax error is reported as
    /// [`BoundaryWarning::MalformedConfig`] and yields the defaults.
    pub fn from_toml_str(source: &str, origin: &str) -> (Self, Vec<BoundaryWarning>) {
        match toml::from_str::<Table>(source) {
            Ok(table) => VersionConfig::from_table(&table),
            Err(e) => (
                VersionConfig::default(),
                vec![BoundaryWarning::MalformedConfig {
                    path: origin.to_string(),
                    reason: e.message().to_string(),
                }],
            ),
        }
    }

    /// True if `tag` carries the configured tag prefix
    pub fn matches_tag(&self, tag: &str) -> bool {
        crate::domain::tag::has_prefix(tag, &self.tag_prefix)
    }
}

fn lookup<'a>(table: &'a Table, keys: &[&str]) -> Option<(&'a str, &'a Value)> {
    keys.iter()
        .find_map(|key| table.get_key_value(*key))
        .map(|(key, value)| (key.as_str(), value))
}

fn ignored(field: &str, reason: &str) -> BoundaryWarning {
    BoundaryWarning::ConfigFieldIgnored {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_branch_prefixes(
    field: &str,
    entries: &Table,
    warnings: &mut Vec<BoundaryWarning>,
) -> BTreeMap<BranchType, String> {
    let mut prefixes = BTreeMap::new();

    for (name, value) in entries {
        let Ok(branch_type) = name.parse::<BranchType>() else {
            warnings.push(BoundaryWarning::UnknownBranchType { key: name.clone() });
            continue;
        };
        match value.as_str() {
            Some("") => warnings.push(ignored(&format!("{}.{}", field, name), "empty prefix")),
            Some(prefix) => {
                prefixes.insert(branch_type, prefix.to_string());
            }
            None => warnings.push(ignored(&format!("{}.{}", field, name), "expected a string")),
        }
    }

    prefixes
}

/// Candidate config files, most specific first.
///
/// An explicit path wins outright. Otherwise the repository root is searched
/// for each of [`CONFIG_FILE_NAMES`], then the user config directory.
pub fn config_candidates(config_path: Option<&Path>, repo_dir: &Path) -> Vec<PathBuf> {
    if let Some(path) = config_path {
        return vec![path.to_path_buf()];
    }

    let mut candidates: Vec<PathBuf> = CONFIG_FILE_NAMES
        .iter()
        .map(|name| repo_dir.join(name))
        .collect();

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join(CONFIG_FILE_NAMES[0]));
    }

    candidates
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitversion.toml` then `.gitversion.toml` in `repo_dir`
/// 3. `gitversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// Discarded fields and malformed files are reported as warnings, not errors.
///
/// # Returns
/// * `Ok(VersionConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read
pub fn load_config(config_path: Option<&Path>, repo_dir: &Path) -> Result<VersionConfig> {
    for candidate in config_candidates(config_path, repo_dir) {
        let source = match fs::read_to_string(&candidate) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if config_path.is_some() {
                    tracing::warn!(
                        "Config file '{}' not found, using defaults",
                        candidate.display()
                    );
                }
                continue;
            }
            Err(e) => {
                return Err(GitVersionError::config(format!(
                    "Cannot read '{}': {}",
                    candidate.display(),
                    e
                )))
            }
        };

        tracing::debug!("Loading config from {}", candidate.display());
        let (config, warnings) =
            VersionConfig::from_toml_str(&source, &candidate.display().to_string());
        for warning in &warnings {
            warning.report();
        }
        return Ok(config);
    }

    tracing::debug!("No config file found, using defaults");
    Ok(VersionConfig::default())
}
