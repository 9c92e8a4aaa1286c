use serde_json::Value;

use crate::errors::ArchiveError;

/// Split line-delimited archive text into JSON records
///
/// Lines end in `\n` or `\r\n`. The segment after the final terminator is discarded
/// when empty, so a trailing newline never produces a phantom record, but a missing
/// trailing newline doesn't lose the last record either. Any other line, blank ones
/// included, must be valid JSON.
///
/// # Errors
///
/// Returns [`ArchiveError::Syntax`] for the first line that fails to parse, naming its
/// 1-based line number. No records are returned in that case.
pub fn parse_archive(contents: &str) -> Result<Vec<Value>, ArchiveError> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

    let mut lines: Vec<&str> =
        contents.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }

    let mut records = Vec::with_capacity(lines.len());
    for (line_num, line) in lines.into_iter().enumerate() {
        match serde_json::from_str::<Value>(line) {
            Ok(value) => records.push(value),
            Err(source) => {
                return Err(ArchiveError::Syntax {
                    line: line_num + 1,
                    raw: line.to_string(),
                    source,
                });
            }
        }
    }

    tracing::debug!(records = records.len(), "Parsed archive lines");
    Ok(records)
}
