//! GitHub Actions API client
//!
//! This crate provides a trait-based client for the three GitHub Actions
//! calls the log pipeline needs: listing a workflow file's runs on a branch,
//! listing a run's jobs, and downloading a run's log archive.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{build_octocrab, GitHubClient, OctocrabClient, TokenResolver};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let octocrab = build_octocrab(&TokenResolver::new()).await?;
//! let client = OctocrabClient::new(octocrab);
//!
//! let runs = client
//!     .fetch_workflow_runs("rust-lang", "rust", "ci.yml", "master")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod token;
pub mod types;

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use token::{build_octocrab, TokenResolver};
pub use types::{WorkflowJob, WorkflowRun, WorkflowRunConclusion, WorkflowRunStatus};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
