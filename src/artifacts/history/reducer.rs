use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::validity::BranchValiditySet;
use crate::artifacts::history::entry::CheckoutEvent;
use crate::artifacts::history::stream::HistoryStream;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Distinct, still existing branches in the order the reflog mentions them
///
/// Events are fed newest first, so `visited` starts with the most recently
/// visited branch. The report is printed oldest first, which is `visited`
/// reversed.
#[derive(Debug)]
pub struct BranchHistory<'v> {
    valid: &'v BranchValiditySet,
    seen: HashSet<BranchName>,
    visited: Vec<BranchName>,
    max_count: Option<usize>,
}

impl<'v> BranchHistory<'v> {
    pub fn new(valid: &'v BranchValiditySet, max_count: Option<usize>) -> Self {
        BranchHistory {
            valid,
            seen: HashSet::new(),
            visited: Vec::new(),
            max_count,
        }
    }

    /// Record the target of a checkout, then its origin
    pub fn record(&mut self, event: CheckoutEvent) {
        let CheckoutEvent { from, to } = event;
        self.append(to);
        self.append(from);
    }

    /// Whether the requested number of branches has been collected
    pub fn is_full(&self) -> bool {
        self.max_count
            .is_some_and(|max_count| self.visited.len() >= max_count)
    }

    pub fn into_report(self) -> Vec<BranchName> {
        let mut report = self.visited;
        report.reverse();
        report
    }

    fn append(&mut self, name: BranchName) {
        if self.is_full() {
            return;
        }
        if !self.valid.contains(&name) {
            trace!(branch = %name, "skipping branch that no longer exists");
            return;
        }
        if self.seen.contains(&name) {
            return;
        }

        self.seen.insert(name.clone());
        self.visited.push(name);
    }

    /// Reduce a whole stream, closing it as soon as nothing more is needed
    pub async fn collect(mut self, mut stream: HistoryStream) -> Vec<BranchName> {
        while !self.is_full() {
            match stream.next().await {
                Some(event) => self.record(event),
                None => break,
            }
        }

        let exit = stream.close().await;
        debug!(?exit, branches = self.visited.len(), "reflog reduced");

        self.into_report()
    }
}
