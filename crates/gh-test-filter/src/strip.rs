//! Prefix strippers
//!
//! Two cosmetic transforms: [`strip_timestamps`] runs before filtering and
//! removes the timestamp token GitHub Actions prepends to every log line;
//! [`strip_test_name_prefix`] runs after filtering and removes the test-name
//! token so the output reads as a single-test transcript.

use crate::scan::{find_next, has_token_prefix};

/// Removes the leading timestamp token from every line.
///
/// GitHub Actions log lines look like
/// `2023-05-02T19:31:15.2539162Z Done in 219ms.`; everything through the
/// first space is dropped. Line count and the trailing-terminator state are
/// preserved. A line without a space is malformed for this format and is
/// silently truncated rather than reported.
pub fn strip_timestamps(logs: &[u8]) -> Vec<u8> {
    let mut stripped = Vec::with_capacity(logs.len());
    let mut i = 0;
    while i < logs.len() {
        let end_of_timestamp = find_next(logs, i, b' ');
        let end_of_line = find_next(logs, end_of_timestamp + 1, b'\n');
        if end_of_timestamp + 1 <= end_of_line {
            stripped.extend_from_slice(&logs[end_of_timestamp + 1..=end_of_line]);
        }
        i = end_of_line + 1;
    }
    stripped
}

/// Removes `test_name` plus the one following space from the front of every
/// line that carries it; other lines pass through unchanged.
pub fn strip_test_name_prefix(logs: &[u8], test_name: &[u8]) -> Vec<u8> {
    let mut stripped = Vec::with_capacity(logs.len());
    let mut i = 0;
    while i < logs.len() {
        let end_of_line = find_next(logs, i, b'\n');
        let start = if has_token_prefix(logs, i, test_name) {
            // +1 for the space following the test name
            i + test_name.len() + 1
        } else {
            i
        };
        if start <= end_of_line {
            stripped.extend_from_slice(&logs[start..=end_of_line]);
        }
        i = end_of_line + 1;
    }
    stripped
}
