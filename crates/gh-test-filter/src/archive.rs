//! Job log extraction from run log archives
//!
//! GitHub Actions delivers a run's logs as a ZIP file. Each job has one
//! combined log file at the archive root named `{index}_{job name}.txt`,
//! alongside a directory of per-step files for the same job. Only the
//! combined file is of interest here.

use log::debug;
use std::io::{Cursor, Read};
use thiserror::Error;
use zip::ZipArchive;

/// Errors that can occur while pulling a job log out of a run log archive
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to read file from ZIP: {0}")]
    Io(#[from] std::io::Error),

    #[error("No log file for job '{job_name}' in archive")]
    JobNotFound { job_name: String },
}

/// Extracts one job's raw log text from a workflow run log archive.
///
/// # Arguments
///
/// * `zip_data` - Raw bytes of the ZIP file from the GitHub Actions API
/// * `job_name` - Exact job name as configured in the workflow file
///
/// # Returns
///
/// The job's full log text (timestamps still attached), or
/// [`ExtractError::JobNotFound`] when the archive holds no combined log file
/// for that job.
pub fn job_log_from_archive(zip_data: &[u8], job_name: &str) -> Result<Vec<u8>, ExtractError> {
    let cursor = Cursor::new(zip_data);
    let mut archive = ZipArchive::new(cursor)?;

    let target = archive
        .file_names()
        .find(|name| job_file_matches(name, job_name))
        .map(str::to_string);

    let Some(target) = target else {
        return Err(ExtractError::JobNotFound {
            job_name: job_name.to_string(),
        });
    };

    let mut file = archive.by_name(&target)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;

    debug!(
        "Extracted {} bytes for job '{}' from '{}'",
        content.len(),
        job_name,
        target
    );
    Ok(content)
}

/// Whether an archive entry is the combined log file for the given job.
fn job_file_matches(file_name: &str, job_name: &str) -> bool {
    // Per-step files live in a subdirectory per job; the combined file is at
    // the root.
    if file_name.contains('/') {
        return false;
    }
    let Some(stem) = file_name.strip_suffix(".txt") else {
        return false;
    };
    match stem.split_once('_') {
        Some((index, name)) => index.bytes().all(|b| b.is_ascii_digit()) && name == job_name,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn archive_with(files: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, content) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extracts_matching_job_file() {
        let zip = archive_with(&[
            ("0_build.txt", "build output\n"),
            ("1_test.txt", "test output\n"),
            ("test/1_Set up job.txt", "step output\n"),
        ]);
        let logs = job_log_from_archive(&zip, "test").unwrap();
        assert_eq!(logs, b"test output\n");
    }

    #[test]
    fn test_missing_job_is_an_error() {
        let zip = archive_with(&[("0_build.txt", "build output\n")]);
        let err = job_log_from_archive(&zip, "lint").unwrap_err();
        assert!(matches!(err, ExtractError::JobNotFound { .. }));
    }

    #[test]
    fn test_job_file_matches() {
        assert!(job_file_matches("0_build.txt", "build"));
        assert!(job_file_matches("12_unit tests.txt", "unit tests"));
        assert!(!job_file_matches("0_build.txt", "test"));
        assert!(!job_file_matches("build/1_step.txt", "build"));
        assert!(!job_file_matches("README.md", "README"));
        assert!(!job_file_matches("x_build.txt", "build"));
    }

    #[test]
    fn test_garbage_bytes_are_a_zip_error() {
        let err = job_log_from_archive(b"not a zip", "build").unwrap_err();
        assert!(matches!(err, ExtractError::Zip(_)));
    }
}
