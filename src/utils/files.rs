use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Validates that a file's size is within `max_bytes`
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use) race conditions
/// where the file could be replaced between the size check and the read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than `max_bytes`
pub fn validate_file_size(file: &File, path: &Path, max_bytes: u64) -> Result<u64> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > max_bytes {
        bail!("File too large: {} ({} bytes, max {} bytes)", path.display(), file_size, max_bytes);
    }

    Ok(file_size)
}

/// Read a whole archive file into memory after checking its size
///
/// # Errors
///
/// Returns an error if the file cannot be opened, exceeds `max_bytes`, or is not UTF-8.
pub fn read_archive_file(path: &Path, max_bytes: u64) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open archive file: {}", path.display()))?;
    let file_size = validate_file_size(&file, path, max_bytes)?;

    let mut contents = String::with_capacity(usize::try_from(file_size).unwrap_or(0));
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read archive file: {}", path.display()))?;

    Ok(contents)
}
