//! Result summary extraction
//!
//! Alternate terminal stage used instead of the filter: keeps only the
//! `--- PASS:` / `--- FAIL:` result lines of the whole run. Stateless, one
//! line at a time; result lines are never split across physical lines, so no
//! continuation tracking is needed here.

use crate::scan::find_next;

const PASS_HEADER: &[u8] = b"--- PASS:";
const FAIL_HEADER: &[u8] = b"--- FAIL:";

/// Keeps only lines that report a pass/fail result.
///
/// A line qualifies when `--- PASS:` or `--- FAIL:` appears immediately
/// after its leading whitespace. Qualifying lines are emitted verbatim, so
/// the indentation that encodes subtest nesting is preserved.
pub fn extract_summary(logs: &[u8]) -> Vec<u8> {
    let mut summary = Vec::new();
    let mut i = 0;
    while i < logs.len() {
        let end_of_line = find_next(logs, i, b'\n');
        if is_summary_line(&logs[i..=end_of_line]) {
            summary.extend_from_slice(&logs[i..=end_of_line]);
        }
        i = end_of_line + 1;
    }
    summary
}

fn is_summary_line(line: &[u8]) -> bool {
    let mut start = 0;
    while start < line.len() && (line[start] == b' ' || line[start] == b'\t') {
        start += 1;
    }
    line[start..].starts_with(PASS_HEADER) || line[start..].starts_with(FAIL_HEADER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_results_kept_with_indentation() {
        let logs =
            b"--- PASS: TestAll (2788.26s)\n    --- FAIL: TestAll/foo (10.11s)\n    --- PASS: TestAll/bar (10.12s)";
        assert_eq!(extract_summary(logs), logs);
    }

    #[test]
    fn test_non_result_lines_dropped() {
        let logs = b"--- PASS: TestAll (2788.26s)\nksjdfks\n--- FAIL: Bar";
        assert_eq!(
            extract_summary(logs),
            b"--- PASS: TestAll (2788.26s)\n--- FAIL: Bar"
        );
    }

    #[test]
    fn test_tab_indentation() {
        let logs = b"\t--- PASS: TestX (0.01s)\nnoise\n";
        assert_eq!(extract_summary(logs), b"\t--- PASS: TestX (0.01s)\n");
    }

    #[test]
    fn test_marker_mid_line_does_not_qualify() {
        let logs = b"note: --- PASS: TestX\n";
        assert_eq!(extract_summary(logs), b"");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_summary(b""), b"");
    }
}
