//! Command implementations
//!
//! Commands are implemented as methods on [`Repository`](crate::areas::repository::Repository)
//! and compose the workspace areas with the history algorithms.

pub mod porcelain;
