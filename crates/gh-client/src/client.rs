//! GitHub Actions client trait
//!
//! This module defines the `GitHubClient` trait that all client
//! implementations must satisfy. The rest of the system only ever talks to
//! this trait; the filtering pipeline receives finished log buffers and never
//! sees the API layer.

use crate::types::{WorkflowJob, WorkflowRun};
use async_trait::async_trait;

/// GitHub Actions API client trait
///
/// Defines the three calls needed to turn a workflow file + branch + job name
/// into a raw log buffer: list the runs of a workflow file, list the jobs of
/// a run, and download a run's log archive.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across async tasks.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch workflow runs for a workflow file, most recent first
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `workflow_file` - Workflow base filename (e.g. `ci.yml`, not a path)
    /// * `branch` - Branch to filter runs by
    ///
    /// # Returns
    ///
    /// Runs of that workflow on that branch, newest first (API order).
    async fn fetch_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        workflow_file: &str,
        branch: &str,
    ) -> anyhow::Result<Vec<WorkflowRun>>;

    /// Fetch the jobs of a workflow run
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `run_id` - Workflow run ID
    async fn fetch_workflow_jobs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> anyhow::Result<Vec<WorkflowJob>>;

    /// Download the log archive of a workflow run
    ///
    /// The archive is a ZIP with one combined log file per job; see
    /// `gh_test_filter::job_log_from_archive` for extraction.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `run_id` - Workflow run ID
    ///
    /// # Returns
    ///
    /// Raw ZIP bytes.
    async fn download_run_logs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> anyhow::Result<Vec<u8>>;
}
