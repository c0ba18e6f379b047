//! Data types for the GitHub Actions API surface

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub Actions workflow run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Workflow run ID
    pub id: u64,
    /// Name of the workflow
    pub name: String,
    /// Status of the run
    pub status: WorkflowRunStatus,
    /// Conclusion (only set when completed)
    pub conclusion: Option<WorkflowRunConclusion>,
    /// Branch the workflow ran on
    pub head_branch: String,
    /// URL to view the workflow run
    pub html_url: String,
    /// When the run was created
    pub created_at: DateTime<Utc>,
}

/// Status of a workflow run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowRunStatus {
    /// Workflow is queued
    Queued,
    /// Workflow is waiting
    Waiting,
    /// Workflow is in progress
    InProgress,
    /// Workflow has completed
    Completed,
    /// Workflow is pending
    Pending,
}

/// Conclusion of a completed workflow run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowRunConclusion {
    /// Workflow succeeded
    Success,
    /// Workflow failed
    Failure,
    /// Workflow was neutral
    Neutral,
    /// Workflow was cancelled
    Cancelled,
    /// Workflow was skipped
    Skipped,
    /// Workflow timed out
    TimedOut,
    /// Action required
    ActionRequired,
    /// Workflow is stale
    Stale,
}

/// A single job within a workflow run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowJob {
    /// Job ID
    pub id: u64,
    /// Job name as configured in the workflow file
    pub name: String,
    /// Conclusion (only set when completed)
    pub conclusion: Option<WorkflowRunConclusion>,
    /// URL to view the job
    pub html_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_run_deserializes_from_api_shape() {
        let json = r#"{
            "id": 42,
            "name": "CI",
            "status": "completed",
            "conclusion": "failure",
            "head_branch": "main",
            "html_url": "https://github.com/o/r/actions/runs/42",
            "created_at": "2023-05-02T19:31:15Z"
        }"#;
        let run: WorkflowRun = serde_json::from_str(json).unwrap();
        assert_eq!(run.id, 42);
        assert_eq!(run.status, WorkflowRunStatus::Completed);
        assert_eq!(run.conclusion, Some(WorkflowRunConclusion::Failure));
        assert_eq!(run.head_branch, "main");
    }

    #[test]
    fn test_workflow_job_deserializes_without_conclusion() {
        let json = r#"{
            "id": 7,
            "name": "test",
            "conclusion": null,
            "html_url": "https://github.com/o/r/actions/runs/42/job/7"
        }"#;
        let job: WorkflowJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.name, "test");
        assert!(job.conclusion.is_none());
    }
}
