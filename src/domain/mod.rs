//! Domain logic - version parsing, tag ranking and branch classification,
//! independent of git operations

pub mod branch;
pub mod state;
pub mod tag;
pub mod version;

pub use branch::BranchType;
pub use state::RepositoryState;
pub use tag::{latest_tag, rank_tags_descending};
pub use version::{VersionBump, VersionTriple, DEFAULT_BASE};
