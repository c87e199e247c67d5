//! Repository content fetching from the GitHub REST API.
//!
//! [`RepoFetcher`] lists the root of a repository, keeps its script files
//! and downloads them with a bounded number of requests in flight. A file
//! that fails to download does not fail the fetch: its content is replaced
//! by a placeholder comment naming the reason.
//!
//! Only available with the `github` feature.

mod error;
mod fan_out;
mod fetcher;
mod repo;

pub use error::FetchError;
pub use fan_out::fan_out;
pub use fetcher::RepoFetcher;
pub use repo::{RepoContent, RepoFile, RepoRef};
