use thiserror::Error;

/// Errors raised while fetching a repository listing.
///
/// Individual file downloads never produce a `FetchError`; see
/// [`RepoFetcher::fetch`](super::RepoFetcher::fetch).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid repository reference `{0}`: expected owner/repo")]
    InvalidRepoRef(String),

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("Error connecting to GitHub: {0}")]
    Upstream(String),

    #[error("Failed to start async runtime: {0}")]
    Runtime(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}
