//! Test Log Filter
//!
//! A library for extracting a single test's output from the interleaved log
//! stream a parallel test run produces. A `go test -v` job running tests in
//! parallel prefixes every output line with the test's name, so one test's
//! transcript ends up scattered through the whole job log. The functions here
//! pull it back out:
//!
//! - [`strip_timestamps`] removes the leading timestamp token GitHub Actions
//!   adds to every log line.
//! - [`filter_test_output`] keeps only the lines belonging to one named test,
//!   including continuation lines (stack traces, assertion dumps) and delayed
//!   failure reports.
//! - [`strip_test_name_prefix`] removes the test-name token from lines that
//!   carry it, so the result reads as a clean single-test transcript.
//! - [`extract_summary`] keeps only `--- PASS:` / `--- FAIL:` result lines.
//!
//! All four are pure transforms over an in-memory byte buffer; they allocate
//! one output buffer and touch no shared state, so independent invocations
//! are safe to run concurrently.
//!
//! # Example
//!
//! ```
//! use gh_test_filter::{filter_test_output, FilterConfig};
//!
//! let logs = b"TestA 1\nTestB 1\nTestA 2\n";
//! let config = FilterConfig::default();
//! let filtered = filter_test_output(logs, b"TestA", &config)?;
//! assert_eq!(filtered, b"TestA 1\nTestA 2\n");
//! # Ok::<(), gh_test_filter::FilterError>(())
//! ```

mod archive;
mod filter;
mod scan;
mod strip;
mod summary;

pub use archive::{job_log_from_archive, ExtractError};
pub use filter::{filter_test_output, FilterConfig, FilterError, FAILURE_REPORT_PREFIX};
pub use strip::{strip_test_name_prefix, strip_timestamps};
pub use summary::extract_summary;
