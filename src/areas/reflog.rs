//! Reflog reader
//!
//! Spawns `git log -g` restricted to the subject lines the history needs,
//! newest first, and hands the running process to a [`HistoryStream`].

use crate::areas::workspace::Workspace;
use crate::artifacts::history::entry::ReflogClassifier;
use crate::artifacts::history::resolver::{NameResolver, RenameTracking};
use crate::artifacts::history::stream::HistoryStream;
use crate::artifacts::history::{CHECKOUT_MESSAGE_GREP, RENAME_MESSAGE_GREP};
use crate::errors::HistoryError;
use derive_new::new;
use std::process::Stdio;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, new)]
pub struct Reflog<'w> {
    workspace: &'w Workspace,
}

impl Reflog<'_> {
    /// Arguments for `git`, printing only reflog subjects (`%gs`)
    pub fn log_args(renames: RenameTracking) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            "-g".to_string(),
            format!("--grep-reflog={CHECKOUT_MESSAGE_GREP}"),
        ];

        if renames == RenameTracking::Follow {
            args.push(format!("--grep-reflog={RENAME_MESSAGE_GREP}"));
        }

        args.push("--pretty=format:%gs".to_string());
        args
    }

    /// Start reading the reflog in the background
    ///
    /// Only a failure to start the reader is reported; anything that goes
    /// wrong later just ends the stream early.
    pub fn checkout_events(
        &self,
        renames: RenameTracking,
        cancel: CancellationToken,
    ) -> Result<HistoryStream, HistoryError> {
        let args = Self::log_args(renames);
        let args = args.iter().map(String::as_str).collect::<Vec<_>>();
        let command = self.workspace.describe(&args);
        let classifier = ReflogClassifier::new()?;

        let child = self
            .workspace
            .git(&args)
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| HistoryError::Spawn {
                command: command.clone(),
                source,
            })?;
        debug!(%command, "reading reflog");

        HistoryStream::from_child(
            child,
            &command,
            classifier,
            NameResolver::new(renames),
            cancel,
        )
    }
}
