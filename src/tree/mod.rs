//! Reply tree reconstruction
//!
//! [`build_tree`] takes every record of an archive, orders them by numeric id and links
//! each post under the post it replies to. The smallest id becomes the root. Posts whose
//! parent cannot be resolved are counted as orphans and kept out of the tree; the result
//! is returned as a [`ThreadTree`] so the caller decides how to surface them.

pub mod builder;
pub mod outcome;

pub use builder::build_tree;
pub use outcome::ThreadTree;
