pub mod branch_name;
pub mod validity;

/// Prefixes `git branch --list` puts in front of checked out branches: `*` for
/// this worktree, `+` for one checked out in a linked worktree
pub const CHECKED_OUT_BRANCH_MARKERS: [char; 2] = ['*', '+'];
