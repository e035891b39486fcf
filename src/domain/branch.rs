use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Classification of the current branch, derived from configured prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchType {
    Main,
    Develop,
    Feature,
    Release,
    Hotfix,
}

impl BranchType {
    /// All branch types, in tie-break order for prefix matching
    pub const ALL: [BranchType; 5] = [
        BranchType::Main,
        BranchType::Develop,
        BranchType::Feature,
        BranchType::Release,
        BranchType::Hotfix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BranchType::Main => "main",
            BranchType::Develop => "develop",
            BranchType::Feature => "feature",
            BranchType::Release => "release",
            BranchType::Hotfix => "hotfix",
        }
    }

    /// Classify `branch` by the longest configured prefix it starts with.
    ///
    /// Equal-length matches go to the type listed first in [`BranchType::ALL`].
    /// Empty prefixes never match.
    pub fn classify(branch: &str, prefixes: &BTreeMap<BranchType, String>) -> Option<Self> {
        let mut best: Option<(BranchType, usize)> = None;

        for branch_type in BranchType::ALL {
            let Some(prefix) = prefixes.get(&branch_type) else {
                continue;
            };
            if prefix.is_empty() || !branch.starts_with(prefix.as_str()) {
                continue;
            }
            match best {
                Some((_, len)) if len >= prefix.len() => {}
                _ => best = Some((branch_type, prefix.len())),
            }
        }

        best.map(|(branch_type, _)| branch_type)
    }
}

impl FromStr for BranchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(BranchType::Main),
            "develop" => Ok(BranchType::Develop),
            "feature" => Ok(BranchType::Feature),
            "release" => Ok(BranchType::Release),
            "hotfix" => Ok(BranchType::Hotfix),
            other => Err(format!("unknown branch type '{}'", other)),
        }
    }
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
