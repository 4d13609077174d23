//! Workspace-facing components
//!
//! - `workspace`: the working tree and the git program run inside it
//! - `refs`: snapshot of the branches that currently exist
//! - `reflog`: background reader of the HEAD reflog
//! - `repository`: ties the above together with the report writer

pub mod reflog;
pub mod refs;
pub mod repository;
pub mod workspace;
