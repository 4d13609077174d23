//! Failures of the external git collaborators
//!
//! Only the errors that abort a run live here. Problems the reflog reader hits
//! after it started streaming never surface as a `HistoryError`: the stream just
//! ends and the events read so far are used.

use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    /// The process could not be started at all
    #[error("failed to start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process started but its standard output was not captured
    #[error("`{command}` did not expose its standard output")]
    MissingStdout { command: String },

    /// The output of a one-shot command could not be collected
    #[error("failed to read the output of `{command}`")]
    Read {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A reflog subject template failed to compile
    #[error("invalid reflog subject pattern")]
    Pattern(#[from] regex::Error),

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}
