//! Branch listing
//!
//! Wraps `git branch --list`, the snapshot of branches that still exist. The
//! snapshot is all-or-nothing: without it every history entry would be
//! filtered out, so any failure to produce it aborts the run.

use crate::areas::workspace::Workspace;
use crate::artifacts::branch::validity::BranchValiditySet;
use crate::errors::HistoryError;
use derive_new::new;
use tracing::debug;

const LIST_BRANCHES_ARGS: [&str; 2] = ["branch", "--list"];

#[derive(Debug, new)]
pub struct Refs<'w> {
    workspace: &'w Workspace,
}

impl Refs<'_> {
    pub async fn list_branches(&self) -> Result<BranchValiditySet, HistoryError> {
        let command = self.workspace.describe(&LIST_BRANCHES_ARGS);

        let child = self
            .workspace
            .git(&LIST_BRANCHES_ARGS)
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| HistoryError::Spawn {
                command: command.clone(),
                source,
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| HistoryError::Read {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(HistoryError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let valid = BranchValiditySet::parse_listing(&String::from_utf8_lossy(&output.stdout));
        debug!(%command, branches = valid.len(), "listed branches");

        Ok(valid)
    }
}
