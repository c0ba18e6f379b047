//! gh-test-log: extract one test's output from a GitHub Actions job log
//!
//! Fetches the most recent run of a workflow on a branch, downloads the named
//! job's log, and pipes it through the filtering stages of `gh-test-filter`:
//! timestamps are always stripped; with `--test` the log is narrowed to that
//! test's lines and the test-name prefix is removed; with `--summary` only
//! the pass/fail result lines are printed.

use anyhow::{bail, Context, Result};
use clap::Parser;
use gh_client::{build_octocrab, GitHubClient, OctocrabClient, TokenResolver};
use gh_repo_context::RepoContext;
use gh_test_filter::{
    extract_summary, filter_test_output, job_log_from_archive, strip_test_name_prefix,
    strip_timestamps, FilterConfig,
};
use log::{debug, info};
use std::io::{self, Write};
use std::path::Path;

/// Extract a single test's output from a GitHub Actions job log.
///
/// Owner, repository and branch are parsed from the local git repository
/// when not given. Authentication uses GITHUB_TOKEN/GH_TOKEN, the gh CLI,
/// or none (public repositories).
#[derive(Debug, Parser)]
#[command(name = "gh-test-log")]
#[command(version)]
struct Cli {
    /// Repository owner name. Parsed from the local git repository if not specified.
    #[arg(long)]
    owner: Option<String>,

    /// Repository name. Parsed from the local git repository if not specified.
    #[arg(long)]
    repository: Option<String>,

    /// Workflow filename (base filename, not path)
    #[arg(long)]
    workflow: String,

    /// Branch name. Taken from the local HEAD if not specified.
    #[arg(long)]
    branch: Option<String>,

    /// Job name (within the workflow file)
    #[arg(long)]
    job: String,

    /// Test name. All log data is returned otherwise.
    #[arg(long)]
    test: Option<String>,

    /// Keep the test-name prefix on each log line
    #[arg(long)]
    keep_prefix: bool,

    /// Print only the `--- PASS:` / `--- FAIL:` result lines
    #[arg(long, conflicts_with = "test")]
    summary: bool,

    /// Token that identifies the start of any test's log line
    #[arg(long, default_value = "Test")]
    marker: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // A .env file may carry the token; a missing file is fine.
    if std::env::var("GITHUB_TOKEN").is_err() {
        let _ = dotenvy::dotenv();
    }

    let cli = Cli::parse();
    let (owner, repository, branch) = resolve_repo(&cli)?;

    let octocrab = build_octocrab(&TokenResolver::new()).await?;
    let client = OctocrabClient::new(octocrab);

    let logs = fetch_job_logs(
        &client,
        &owner,
        &repository,
        &cli.workflow,
        &branch,
        &cli.job,
    )
    .await?;

    let logs = strip_timestamps(&logs);
    let output = render(&cli, logs)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.write_all(b"\n")?;

    Ok(())
}

/// Fill in owner/repository/branch from the local checkout where flags are absent
fn resolve_repo(cli: &Cli) -> Result<(String, String, String)> {
    if let (Some(owner), Some(repository), Some(branch)) =
        (&cli.owner, &cli.repository, &cli.branch)
    {
        return Ok((owner.clone(), repository.clone(), branch.clone()));
    }

    let ctx = RepoContext::discover(Path::new(".")).context(
        "Failed to read local repository metadata; pass --owner, --repository and --branch explicitly",
    )?;
    debug!("Local context: {}/{}@{}", ctx.owner, ctx.repo, ctx.branch);

    Ok((
        cli.owner.clone().unwrap_or(ctx.owner),
        cli.repository.clone().unwrap_or(ctx.repo),
        cli.branch.clone().unwrap_or(ctx.branch),
    ))
}

/// Returns the raw log text of the named job in the most recent matching run
async fn fetch_job_logs(
    client: &impl GitHubClient,
    owner: &str,
    repository: &str,
    workflow: &str,
    branch: &str,
    job_name: &str,
) -> Result<Vec<u8>> {
    let runs = client
        .fetch_workflow_runs(owner, repository, workflow, branch)
        .await?;
    let Some(run) = runs.first() else {
        bail!("No runs of {workflow} found on branch {branch}");
    };
    info!("Using run {} ({})", run.id, run.html_url);

    let jobs = client.fetch_workflow_jobs(owner, repository, run.id).await?;
    let Some(job) = jobs.iter().find(|job| job.name == job_name) else {
        bail!("Did not find matching job '{job_name}' in run {}", run.id);
    };
    debug!("Matched job {} ({})", job.id, job.html_url);

    let archive = client.download_run_logs(owner, repository, run.id).await?;
    let logs = job_log_from_archive(&archive, job_name)?;
    Ok(logs)
}

/// Apply the terminal pipeline stage selected by the flags
fn render(cli: &Cli, logs: Vec<u8>) -> Result<Vec<u8>> {
    if cli.summary {
        return Ok(extract_summary(&logs));
    }

    let Some(ref test_name) = cli.test else {
        return Ok(logs);
    };

    let config = FilterConfig::with_marker(cli.marker.as_bytes());
    let filtered = filter_test_output(&logs, test_name.as_bytes(), &config)?;

    if cli.keep_prefix {
        Ok(filtered)
    } else {
        Ok(strip_test_name_prefix(&filtered, test_name.as_bytes()))
    }
}
