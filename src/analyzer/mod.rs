//! Version calculation engine: base version resolution, bump policy and
//! result assembly

pub mod base_version;
pub mod bump_policy;
pub mod calculator;
pub mod result;

pub use base_version::{resolve_base, BaseSource, BaseVersion};
pub use calculator::{calculate_version, VersionCalculator};
pub use result::{BuildNumber, VersionResult, VersionResultBuilder};
