//! Data models for archived reply threads.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`ArchiveRecord`] - One line of the archive in the Twitter API response shape
//! - [`Post`] - Normalized post with escaped body and epoch-millisecond timestamp
//! - [`TreeNode`] - A post together with the replies attached to it
//!
//! Archive records use serde for JSON deserialization; unknown fields are ignored so
//! full API payloads deserialize without a dedicated schema for every attribute.

pub mod archive;
pub mod post;
pub mod tree;

pub use archive::{ArchiveRecord, ArchiveUser};
pub use post::Post;
pub use tree::TreeNode;
