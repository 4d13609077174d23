//! Data structures and algorithms
//!
//! - `branch`: Branch names and the snapshot of existing branches
//! - `history`: Reflog classification, rename resolution, streaming and reduction

pub mod branch;
pub mod history;
