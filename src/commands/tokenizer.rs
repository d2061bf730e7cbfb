//! Tokenizer for command lines.
//!
//! Lines are split on single spaces. There is no quoting, so a value cannot
//! contain a space, and consecutive spaces produce empty tokens.
//!
//! Whether a token is a flag or a value is decided only by
//! [`looks_like_flag`]. A value beginning with `-` is therefore
//! indistinguishable from a flag.

/// Splits a raw input line into tokens.
///
/// A trailing line terminator (`\n` or `\r\n`) is removed first.
pub fn split_line(line: &str) -> Vec<&str> {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    line.split(' ').collect()
}

/// Returns true if the token is shaped like a flag.
pub fn looks_like_flag(token: &str) -> bool {
    token.starts_with('-')
}
