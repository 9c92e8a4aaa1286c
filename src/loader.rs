//! End-to-end archive loading: text → records → reply tree.
//!
//! These helpers chain [`parse_archive`] and [`build_tree`] and wrap failures with
//! `anyhow` context. The typed [`ArchiveError`](crate::ArchiveError) stays reachable
//! through `downcast_ref` for callers that want to show its user-facing message.

use std::path::Path;

use anyhow::{Context, Result};

use crate::parsers::parse_archive;
use crate::tree::{ThreadTree, build_tree};
use crate::utils::read_archive_file;

/// Build a thread from archive text already in memory
///
/// Returns `Ok(None)` when the archive holds no posts.
pub fn load_thread_from_str(contents: &str) -> Result<Option<ThreadTree>> {
    let records = parse_archive(contents)?;
    let thread = build_tree(records)?;
    Ok(thread)
}

/// Read an archive file (at most `max_bytes` long) and build its thread
///
/// # Errors
///
/// Returns an error if the file cannot be read or is too large, if any line is not
/// JSON, or if any record is missing a required field.
pub fn load_thread(path: &Path, max_bytes: u64) -> Result<Option<ThreadTree>> {
    let contents = read_archive_file(path, max_bytes)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Loaded archive");

    load_thread_from_str(&contents)
        .with_context(|| format!("Failed to load archive: {}", path.display()))
}
