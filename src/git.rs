//! Remote resolution against the configured Azure DevOps organization.
//!
//! The project and repository names are taken as the second-to-last and
//! last path segments of the matched remote URL, which is the layout of
//! ssh-style Azure DevOps remotes (`git@ssh.dev.azure.com:v3/<org>/<project>/<repo>`).

use git2::Repository;
use regex::Regex;

use crate::error::{Error, Result};

/// What the resolver extracts from the local repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRemote {
    /// The matched remote URL
    pub url: String,
    pub project_name: String,
    pub repository_name: String,
    /// Short name of the branch HEAD points at
    pub branch_name: String,
}

/// Open the repository at the given path
pub fn open_repository(path: &str) -> Result<Repository> {
    Repository::open(path).map_err(|_| Error::NotInGitRepo)
}

/// Short name of the branch HEAD currently points at
pub fn head_branch_name(repo: &Repository) -> Result<String> {
    let head = repo.head().map_err(|_| Error::NoHead)?;
    head.shorthand().map(|s| s.to_string()).ok_or(Error::NoHead)
}

/// Find the remote belonging to the given organization and extract the
/// project/repository names from its URL.
///
/// When several remotes match, a remote named `origin` wins; otherwise
/// the first match in enumeration order is used.
pub fn resolve_remote(repo: &Repository, org_name: &str) -> Result<ResolvedRemote> {
    let branch_name = head_branch_name(repo)?;
    let pattern = organization_pattern(org_name)?;

    let mut matched: Option<(String, String)> = None;

    let remotes = repo.remotes()?;
    for name in remotes.iter().flatten() {
        let remote = repo.find_remote(name)?;
        let url = match remote.url() {
            Some(url) => url,
            None => continue,
        };

        if !pattern.is_match(url) {
            continue;
        }

        if name == "origin" {
            matched = Some((name.to_string(), url.to_string()));
            break;
        }
        if matched.is_none() {
            matched = Some((name.to_string(), url.to_string()));
        }
    }

    let (_, url) = matched.ok_or_else(|| Error::NoMatchingRemote(org_name.to_string()))?;
    let (project_name, repository_name) = parse_remote_path(&url)?;

    Ok(ResolvedRemote {
        url,
        project_name,
        repository_name,
        branch_name,
    })
}

/// Pattern matching remote URLs of the given organization, e.g.
/// `https://dev.azure.com/myorg/...` or `git@ssh.dev.azure.com:v3/myorg/...`
fn organization_pattern(org_name: &str) -> Result<Regex> {
    let pattern = format!(r".*dev\.azure\.com(:v\d)?/{}", regex::escape(org_name));
    Regex::new(&pattern).map_err(|e| Error::Config(format!("invalid organization pattern: {}", e)))
}

/// Extract (project, repository) as the last two path segments of a remote URL
pub fn parse_remote_path(url: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = url.trim_end_matches('/').split('/').collect();
    if parts.len() < 2 {
        return Err(Error::BadRemoteUrl(url.to_string()));
    }

    let repository = parts[parts.len() - 1];
    let project = parts[parts.len() - 2];
    if project.is_empty() || repository.is_empty() {
        return Err(Error::BadRemoteUrl(url.to_string()));
    }

    Ok((project.to_string(), repository.to_string()))
}
