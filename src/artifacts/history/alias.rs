use crate::artifacts::branch::branch_name::BranchName;
use std::collections::HashMap;

/// Old branch names mapped to the name they were renamed to
///
/// Renames are applied newest first, the order the reflog is read in.
///
/// Invariant: the table is acyclic. `apply_rename` points the old name at the
/// terminal the new name resolves to and drops the entry keyed by the new
/// name, so a fresh edge always ends in a terminal and can never close a loop.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    renames: HashMap<BranchName, BranchName>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `old` was renamed to `new`
    ///
    /// Any rename of `new` seen so far happened later, so `old` inherits what
    /// `new` resolves to now. Names seen from here on that read `new` predate
    /// this rename and refer to some other branch, hence its entry goes.
    pub fn apply_rename(&mut self, old: BranchName, new: BranchName) {
        let current = self.resolve(&new);
        self.renames.remove(&new);

        if current != old {
            self.renames.insert(old, current);
        }
    }

    /// Follow the rename chain from `name` to the name it currently has
    pub fn resolve(&self, name: &BranchName) -> BranchName {
        let mut current = name;

        // Acyclic, so a chain can never be longer than the table.
        for _ in 0..=self.renames.len() {
            match self.renames.get(current) {
                Some(next) => current = next,
                None => return current.clone(),
            }
        }

        current.clone()
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}
