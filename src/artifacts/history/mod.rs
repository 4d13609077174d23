//! Branch visitation history reconstructed from the reflog
//!
//! - `entry`: classification of reflog subject lines
//! - `alias`: rename chains from historical to current branch names
//! - `resolver`: rename-aware or pass-through name rewriting
//! - `stream`: cancellable background reader feeding a bounded channel
//! - `reducer`: filtering, deduplication and ordering of the final report

pub mod alias;
pub mod entry;
pub mod reducer;
pub mod resolver;
pub mod stream;

pub const CHECKOUT_MESSAGE_REGEX: &str = r"^checkout: moving from ([^\s]+) to ([^\s]+)$";
pub const RENAME_MESSAGE_REGEX: &str =
    r"^Branch: renamed refs/heads/([^\s]+) to refs/heads/([^\s]+)$";

/// `--grep-reflog` pattern selecting checkout entries
pub const CHECKOUT_MESSAGE_GREP: &str = "checkout: moving from";
/// `--grep-reflog` pattern selecting rename entries
pub const RENAME_MESSAGE_GREP: &str = "Branch: renamed";
