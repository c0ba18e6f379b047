//! Repository metadata discovery
//!
//! Reads the repository at a given path with `git2` and derives the three
//! strings the CLI would otherwise require as flags: the owner and repository
//! name from the sole configured remote's URL, and the branch from HEAD.

use crate::error::ContextError;
use git2::Repository;
use log::debug;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Owner, repository and branch of a local checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch HEAD currently points at
    pub branch: String,
}

impl RepoContext {
    /// Discover owner, repository and branch from the repository at `path`.
    ///
    /// Requires exactly one configured remote; with zero or several remotes
    /// there is no way to pick the right one, so that is an error rather
    /// than a guess.
    pub fn discover(path: &Path) -> Result<Self, ContextError> {
        let repository = Repository::open(path)?;
        let (owner, repo) = remote_owner_and_repo(&repository)?;
        let branch = head_branch(&repository)?;
        debug!("Discovered {}/{} on branch {}", owner, repo, branch);
        Ok(Self {
            owner,
            repo,
            branch,
        })
    }
}

/// Parse owner and repository name out of the repository's single remote URL
pub fn remote_owner_and_repo(repository: &Repository) -> Result<(String, String), ContextError> {
    let remotes = repository.remotes()?;
    if remotes.len() != 1 {
        return Err(ContextError::RemoteCount {
            count: remotes.len(),
        });
    }

    // A remote name from the listing is valid UTF-8 or the lookup fails.
    let name = remotes.get(0).unwrap_or("origin");
    let remote = repository.find_remote(name)?;
    let url = remote.url().unwrap_or_default();

    parse_owner_and_repo(url).ok_or_else(|| ContextError::UnparsableRemoteUrl {
        url: url.to_string(),
    })
}

/// Branch shorthand of HEAD (e.g. `main`)
pub fn head_branch(repository: &Repository) -> Result<String, ContextError> {
    let head = repository.head()?;
    if !head.is_branch() {
        return Err(ContextError::DetachedHead);
    }
    head.shorthand()
        .map(str::to_string)
        .ok_or(ContextError::DetachedHead)
}

/// Parse `owner/repo` out of an SSH or HTTP(S) GitHub remote URL.
///
/// Handles the common shapes:
/// `git@github.com:owner/repo.git`, `https://github.com/owner/repo`,
/// `https://user@github.com/owner/repo.git/`.
pub fn parse_owner_and_repo(url: &str) -> Option<(String, String)> {
    static REMOTE_URL_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = REMOTE_URL_REGEX.get_or_init(|| {
        Regex::new(r"^(?:git@|https?://)[\w.@-]+[/:]([\w.-]+)/([\w.-]+?)(?:\.git)?/?$").unwrap()
    });

    let captures = re.captures(url)?;
    let owner = captures.get(1)?.as_str().to_string();
    let repo = captures.get(2)?.as_str().to_string();
    Some((owner, repo))
}
