//! Terminal output sanitization utilities
//!
//! Post text comes from third-party archives and is printed by the `tree` command.
//! It may contain ANSI escape sequences that could clear the screen, move the cursor or
//! recolor the terminal, so everything user-controlled passes through [`single_line`]
//! before display.

/// Strips ANSI CSI escape codes and control characters other than tab and newlines
///
/// # Examples
///
/// ```
/// use thread_archive::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // ESC [ ... <letter>
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitize text and fold it onto one line of at most `max_chars` characters
///
/// Whitespace runs (including newlines) collapse to a single space. Truncated output
/// ends with an ellipsis that counts towards `max_chars`.
pub fn single_line(text: &str, max_chars: usize) -> String {
    let clean = strip_ansi_codes(text);
    let folded = clean.split_whitespace().collect::<Vec<_>>().join(" ");

    if folded.chars().count() <= max_chars {
        return folded;
    }

    let mut truncated: String = folded.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
