//! Test-output filtering state machine
//!
//! Selects the lines of one named test out of an interleaved multi-test log.
//! The filter tracks a single bit of state across lines: whether it is
//! currently inside the target test's block. Lines that carry the target's
//! token prefix (or its failure-report header) always match; unprefixed lines
//! are kept while inside a block, since parallel `go test -v` output leaves
//! stack traces and assertion dumps unprefixed under the line that opened
//! them.

use crate::scan::{find_next, has_prefix, has_token_prefix};
use thiserror::Error;

/// Marker the test runner prints before a delayed failure report, directly
/// followed by the test name: `=== NAME  TestFoo`.
pub const FAILURE_REPORT_PREFIX: &[u8] = b"=== NAME  ";

/// Error type for [`filter_test_output`].
///
/// No variant currently exists: filtering is total over line-oriented input.
/// The `Result` return keeps a validation channel open for callers.
#[derive(Debug, Error)]
pub enum FilterError {}

/// Configuration for [`filter_test_output`].
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Token that identifies the start of any test's output line.
    ///
    /// Encountering a line that begins with this marker but does not match
    /// the target test ends the current block. Go test logs use `Test`,
    /// since every Go test function name must start with it; other log
    /// dialects can supply their own marker.
    pub test_marker: Vec<u8>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            test_marker: b"Test".to_vec(),
        }
    }
}

impl FilterConfig {
    /// Config with a custom test-identifier marker.
    pub fn with_marker(marker: impl Into<Vec<u8>>) -> Self {
        Self {
            test_marker: marker.into(),
        }
    }
}

/// Keeps only the log lines belonging to the named test.
///
/// A line is kept when it directly matches the target (token prefix equal to
/// `test_name`, or a `=== NAME  {test_name}` failure-report header), or when
/// it is a continuation: an unprefixed line following a match without an
/// intervening line for a different test. Kept lines are emitted verbatim in
/// their original order, each with its original terminator (the final line's
/// missing newline stays missing).
///
/// Never fails; an input with no matching lines yields an empty buffer.
pub fn filter_test_output(
    logs: &[u8],
    test_name: &[u8],
    config: &FilterConfig,
) -> Result<Vec<u8>, FilterError> {
    let mut filtered = Vec::new();
    if logs.is_empty() {
        return Ok(filtered);
    }

    let mut in_matched_block = false;
    let mut i = 0;
    while i < logs.len() {
        let end_of_line = find_next(logs, i, b'\n');

        if is_direct_match(logs, i, test_name) {
            filtered.extend_from_slice(&logs[i..=end_of_line]);
            in_matched_block = true;
        } else if in_matched_block {
            // Extend the selection to unprefixed lines until another test's
            // marker shows up.
            if has_prefix(logs, i, &config.test_marker) {
                in_matched_block = false;
            } else {
                filtered.extend_from_slice(&logs[i..=end_of_line]);
            }
        }

        i = end_of_line + 1;
    }

    Ok(filtered)
}

fn is_direct_match(logs: &[u8], offset: usize, test_name: &[u8]) -> bool {
    has_token_prefix(logs, offset, test_name)
        || has_failure_report_header(logs, offset, test_name)
}

fn has_failure_report_header(logs: &[u8], offset: usize, test_name: &[u8]) -> bool {
    has_prefix(logs, offset, FAILURE_REPORT_PREFIX)
        && has_prefix(logs, offset + FAILURE_REPORT_PREFIX.len(), test_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(logs: &[u8], test_name: &[u8]) -> Vec<u8> {
        let config = FilterConfig::default();
        filter_test_output(logs, test_name, &config).unwrap()
    }

    #[test]
    fn test_interleaved_blocks() {
        let logs = b"TestA 1\nTestB 1\nTestA 2\nTestB 2\n";
        assert_eq!(filter(logs, b"TestA"), b"TestA 1\nTestA 2\n");
        assert_eq!(filter(logs, b"TestB"), b"TestB 1\nTestB 2\n");
    }

    #[test]
    fn test_missing_trailing_newline_preserved() {
        let logs = b"TestA 1\nTestB 1\nTestA 2\nTestB 2";
        assert_eq!(filter(logs, b"TestB"), b"TestB 1\nTestB 2");
    }

    #[test]
    fn test_continuation_line_attaches_to_block() {
        let logs = b"TestA 1\nno prefix\nTestB 1\n";
        assert_eq!(filter(logs, b"TestA"), b"TestA 1\nno prefix\n");
    }

    #[test]
    fn test_continuation_attaches_to_most_recent_block() {
        let logs = b"TestA 1\nno prefix 1\nTestA 2\nTestB 1\nno prefix 2\n";
        assert_eq!(filter(logs, b"TestB"), b"TestB 1\nno prefix 2\n");
    }

    #[test]
    fn test_boundary_stops_continuation() {
        let logs = b"TestA 1\nTestB 1\nafter b\n";
        assert_eq!(filter(logs, b"TestA"), b"TestA 1\n");
    }

    #[test]
    fn test_no_match_yields_empty_buffer() {
        let logs = b"TestB 1\nno prefix\n";
        assert_eq!(filter(logs, b"TestA"), b"");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(filter(b"", b"TestA"), b"");
    }

    #[test]
    fn test_failure_report_attaches_across_interleaving() {
        let logs = b"TestFoo 1\nTestBar 1\n=== NAME  TestFoo\n    foo.go:123:\n";
        assert_eq!(
            filter(logs, b"TestFoo"),
            b"TestFoo 1\n=== NAME  TestFoo\n    foo.go:123:\n"
        );
    }

    #[test]
    fn test_token_prefix_must_match_exactly() {
        // TestAB is a different test, not a match for TestA.
        let logs = b"TestAB 1\nTestA 1\n";
        assert_eq!(filter(logs, b"TestA"), b"TestA 1\n");
    }

    #[test]
    fn test_idempotent_over_own_output() {
        let logs = b"TestA 1\ntrace line\nTestB 1\nTestA 2\n";
        let once = filter(logs, b"TestA");
        let twice = filter(&once, b"TestA");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_is_subsequence_of_input_lines() {
        let logs = b"TestA 1\nx\nTestB 1\ny\nTestA 2\n";
        let filtered = filter(logs, b"TestA");
        let input_lines: Vec<&[u8]> = logs.split(|&b| b == b'\n').collect();
        for line in filtered.split(|&b| b == b'\n') {
            assert!(input_lines.contains(&line));
        }
    }

    #[test]
    fn test_custom_marker() {
        let config = FilterConfig::with_marker(b"spec_".as_slice());
        let logs = b"spec_a 1\nplain\nspec_b 1\n";
        let filtered = filter_test_output(logs, b"spec_a", &config).unwrap();
        assert_eq!(filtered, b"spec_a 1\nplain\n");
    }
}
