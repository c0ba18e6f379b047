//! Octocrab-based GitHub Actions client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab
//! library. Workflow runs and jobs come from raw GET routes with inline
//! response structs, since octocrab has no typed wrapper for the
//! by-workflow-file runs endpoint; the log archive download uses the typed
//! actions API.

use crate::client::GitHubClient;
use crate::types::{WorkflowJob, WorkflowRun};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        workflow_file: &str,
        branch: &str,
    ) -> anyhow::Result<Vec<WorkflowRun>> {
        debug!(
            "Fetching runs of {} on {} for {}/{}",
            workflow_file, branch, owner, repo
        );

        #[derive(Debug, serde::Deserialize)]
        struct WorkflowRunsResponse {
            workflow_runs: Vec<WorkflowRun>,
        }

        let url = format!(
            "/repos/{}/{}/actions/workflows/{}/runs?branch={}",
            owner, repo, workflow_file, branch
        );
        let response: WorkflowRunsResponse = self
            .octocrab
            .get(&url, None::<&()>)
            .await
            .context("Failed to fetch workflow runs")?;

        debug!(
            "Fetched {} runs for {}/{}",
            response.workflow_runs.len(),
            owner,
            repo
        );
        Ok(response.workflow_runs)
    }

    async fn fetch_workflow_jobs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> anyhow::Result<Vec<WorkflowJob>> {
        debug!("Fetching jobs of run {} for {}/{}", run_id, owner, repo);

        #[derive(Debug, serde::Deserialize)]
        struct JobsResponse {
            jobs: Vec<WorkflowJob>,
        }

        let url = format!("/repos/{}/{}/actions/runs/{}/jobs", owner, repo, run_id);
        let response: JobsResponse = self
            .octocrab
            .get(&url, None::<&()>)
            .await
            .context("Failed to fetch workflow jobs")?;

        Ok(response.jobs)
    }

    async fn download_run_logs(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> anyhow::Result<Vec<u8>> {
        debug!("Downloading log archive of run {} for {}/{}", run_id, owner, repo);

        let log_data = self
            .octocrab
            .actions()
            .download_workflow_run_logs(owner, repo, run_id.into())
            .await
            .context("Failed to download workflow run logs")?;

        debug!("Downloaded {} bytes of log archive", log_data.len());
        Ok(log_data.to_vec())
    }
}
