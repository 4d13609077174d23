use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::history::reducer::BranchHistory;
use crate::artifacts::history::resolver::RenameTracking;
use anyhow::Context;
use std::io::{ErrorKind, Write};
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct HistoryOptions {
    pub renames: RenameTracking,
    pub max_count: Option<usize>,
}

impl Repository {
    /// Print the branches visited in this workspace, most recent last
    ///
    /// Cancelling `cancel` stops reading the reflog; whatever was read until
    /// then is still reported.
    pub async fn history(
        &self,
        opts: &HistoryOptions,
        cancel: CancellationToken,
    ) -> anyhow::Result<()> {
        debug!(path = %self.path().display(), ?opts, "collecting branch history");

        let valid = self
            .refs()
            .list_branches()
            .await
            .context("Could not list branches")?;

        let events = self
            .reflog()
            .checkout_events(opts.renames, cancel.child_token())
            .context("Could not read the reflog")?;

        let report = BranchHistory::new(&valid, opts.max_count)
            .collect(events)
            .await;

        self.print_report(&report)
    }

    fn print_report(&self, report: &[BranchName]) -> anyhow::Result<()> {
        let mut writer = self.writer();

        for branch in report {
            match writeln!(writer, "{branch}") {
                Ok(()) => {}
                // The reader of our output went away, e.g. `git history | head -1`.
                Err(err) if err.kind() == ErrorKind::BrokenPipe => return Ok(()),
                Err(err) => return Err(err.into()),
            }
        }

        match writer.flush() {
            Err(err) if err.kind() != ErrorKind::BrokenPipe => Err(err.into()),
            _ => Ok(()),
        }
    }
}
