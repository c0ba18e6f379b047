//! Error types for repository context discovery

use thiserror::Error;

/// Errors that can occur while discovering repository metadata
#[derive(Debug, Error)]
pub enum ContextError {
    /// Error from the git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Owner/repo discovery needs exactly one configured remote
    #[error("Can't parse owner and repo: expected exactly one remote, found {count}")]
    RemoteCount {
        /// Number of remotes configured on the repository
        count: usize,
    },

    /// The remote URL did not look like a GitHub remote
    #[error("Can't parse owner and repo from remote URL '{url}'")]
    UnparsableRemoteUrl {
        /// The URL that failed to parse
        url: String,
    },

    /// HEAD does not point at a branch
    #[error("Can't determine branch: HEAD is detached")]
    DetachedHead,
}
