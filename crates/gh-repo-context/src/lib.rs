//! gh-repo-context: local repository metadata for the log pipeline
//!
//! Derives the owner, repository name and branch from the git repository in
//! the current directory, so the CLI can run without `--owner`,
//! `--repository` and `--branch` flags inside a checkout.
//!
//! # Example
//!
//! ```no_run
//! use gh_repo_context::RepoContext;
//! use std::path::Path;
//!
//! let ctx = RepoContext::discover(Path::new("."))?;
//! println!("{}/{}@{}", ctx.owner, ctx.repo, ctx.branch);
//! # Ok::<(), gh_repo_context::ContextError>(())
//! ```

pub mod context;
pub mod error;

pub use context::{head_branch, parse_owner_and_repo, remote_owner_and_repo, RepoContext};
pub use error::ContextError;
