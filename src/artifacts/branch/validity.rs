use crate::artifacts::branch::CHECKED_OUT_BRANCH_MARKERS;
use crate::artifacts::branch::branch_name::BranchName;
use std::collections::HashSet;

/// Snapshot of the branches that exist right now
///
/// Taken once before the reflog is read and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchValiditySet {
    branches: HashSet<BranchName>,
}

impl BranchValiditySet {
    /// Parse the output of `git branch --list`
    ///
    /// One branch per line, checked out ones prefixed with `*` or `+`. Blank lines
    /// and detached HEAD pseudo entries such as `(HEAD detached at 1a2b3c4)`
    /// are skipped.
    pub fn parse_listing(listing: &str) -> Self {
        let branches = listing
            .lines()
            .map(|line| line.strip_prefix(CHECKED_OUT_BRANCH_MARKERS).unwrap_or(line))
            .map(str::trim)
            .filter(|line| !line.starts_with('('))
            .filter_map(|line| BranchName::try_parse(line).ok())
            .collect();

        Self { branches }
    }

    pub fn contains(&self, name: &BranchName) -> bool {
        self.branches.contains(name)
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl FromIterator<BranchName> for BranchValiditySet {
    fn from_iter<T: IntoIterator<Item = BranchName>>(iter: T) -> Self {
        Self {
            branches: iter.into_iter().collect(),
        }
    }
}
