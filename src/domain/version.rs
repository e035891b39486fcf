use regex::Regex;
use std::fmt;

/// The `(major, minor, patch)` part of a version.
///
/// Field order matters: the derived `Ord` compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Fallback base when neither the branch nor any tag provides a version.
pub const DEFAULT_BASE: VersionTriple = VersionTriple::new(0, 1, 0);

impl VersionTriple {
    /// Create a new version triple
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionTriple {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version out of a tag name, never failing.
    ///
    /// `prefix` is stripped only when the tag starts with it. The remainder is
    /// split on `.` and the first three segments are read as numbers; a missing
    /// or non-numeric segment becomes `0` and extra segments are ignored.
    ///
    /// # Example
    /// ```
    /// # use gitversion::domain::VersionTriple;
    /// assert_eq!(VersionTriple::from_tag("v1.2.3", "v"), VersionTriple::new(1, 2, 3));
    /// assert_eq!(VersionTriple::from_tag("v1.x", "v"), VersionTriple::new(1, 0, 0));
    /// assert_eq!(VersionTriple::from_tag("", "v"), VersionTriple::new(0, 0, 0));
    /// ```
    pub fn from_tag(tag: &str, prefix: &str) -> Self {
        let cleaned = if prefix.is_empty() {
            tag
        } else {
            tag.strip_prefix(prefix).unwrap_or(tag)
        };

        let mut segments = cleaned.split('.').map(parse_segment);
        let major = segments.next().unwrap_or(0);
        let minor = segments.next().unwrap_or(0);
        let patch = segments.next().unwrap_or(0);

        VersionTriple::new(major, minor, patch)
    }

    /// Parse a version pinned by a branch name such as `release/1.3` or
    /// `hotfix/v2.0.1`.
    ///
    /// Only `release/` and `hotfix/` branches whose remainder is
    /// `[v]<major>[.<minor>[.<patch>]]` match. Missing minor and patch are `0`.
    /// Branches named by description (`hotfix/fix-crash`) return `None`.
    pub fn from_branch(branch: &str) -> Option<Self> {
        let re = Regex::new(r"^(?:release|hotfix)/v?(\d+)(?:\.(\d+)(?:\.(\d+))?)?$").ok()?;
        let captures = re.captures(branch)?;

        let part = |i: usize| captures.get(i).map(|m| parse_segment(m.as_str())).unwrap_or(0);

        Some(VersionTriple::new(part(1), part(2), part(3)))
    }

    /// Bump one component, resetting the ones below it
    pub fn bump(&self, bump_type: VersionBump) -> Self {
        match bump_type {
            VersionBump::Minor => VersionTriple {
                major: self.major,
                minor: self.minor.saturating_add(1),
                patch: 0,
            },
            VersionBump::Patch => VersionTriple {
                major: self.major,
                minor: self.minor,
                patch: self.patch.saturating_add(1),
            },
        }
    }

    /// True for `0.0.0`, the value every unparseable tag collapses to.
    pub fn is_zero(&self) -> bool {
        *self == VersionTriple::default()
    }
}

fn parse_segment(segment: &str) -> u64 {
    segment.trim().parse::<u64>().unwrap_or(0)
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component a branch type increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Minor,
    Patch,
}
