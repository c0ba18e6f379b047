//! GitHub token resolution
//!
//! Tries multiple sources in order:
//! 1. `GITHUB_TOKEN` or `GH_TOKEN` env var
//! 2. `gh auth token` command
//!
//! Both can legitimately be absent: public repositories are readable with an
//! unauthenticated client, so resolution returns an `Option`.

use anyhow::{Context, Result};
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Resolves a GitHub token from the environment or the `gh` CLI
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    /// Cached token from GITHUB_TOKEN/GH_TOKEN
    env_token: Option<String>,
}

impl TokenResolver {
    /// Create a new token resolver, reading the env vars once
    pub fn new() -> Self {
        let env_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok();

        Self { env_token }
    }

    /// Get a token, or `None` when no source has one
    pub async fn get_token(&self) -> Result<Option<String>> {
        if let Some(ref token) = self.env_token {
            debug!("Using token from GITHUB_TOKEN/GH_TOKEN");
            return Ok(Some(token.clone()));
        }

        debug!("Trying gh auth token");
        let output = tokio::process::Command::new("gh")
            .args(["auth", "token"])
            .output()
            .await;

        if let Ok(output) = output {
            if output.status.success() {
                let token = String::from_utf8(output.stdout)
                    .context("Invalid UTF-8 in gh auth token output")?
                    .trim()
                    .to_string();
                if !token.is_empty() {
                    debug!("Using token from gh CLI");
                    return Ok(Some(token));
                }
            }
        }

        debug!("No token found, proceeding unauthenticated");
        Ok(None)
    }
}

/// Build an octocrab instance, authenticated when a token is available
pub async fn build_octocrab(tokens: &TokenResolver) -> Result<Arc<Octocrab>> {
    let builder = match tokens.get_token().await? {
        Some(token) => Octocrab::builder().personal_token(token),
        None => Octocrab::builder(),
    };
    let octocrab = builder.build().context("Failed to build Octocrab client")?;
    Ok(Arc::new(octocrab))
}
