//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `history`: List the previously visited branches of a workspace

pub mod history;
