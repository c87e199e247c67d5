use log::{debug, info, warn};
use reqwest::{Client, StatusCode, header};

use crate::config::GithubConfig;

use super::{
    FetchError, fan_out,
    repo::{ContentEntry, RepoContent, RepoFile, RepoRef},
};

const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";

/// Client for listing and downloading repository script files.
#[derive(Debug, Clone)]
pub struct RepoFetcher {
    client: Client,
    config: GithubConfig,
}

impl RepoFetcher {
    /// Creates a fetcher using the endpoint and limits in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Upstream`] if the HTTP client cannot be built.
    pub fn new(config: &GithubConfig) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(config.user_agent()).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Lists the repository root and downloads its script files.
    ///
    /// At most `max_files` files are downloaded, `concurrency` at a time,
    /// and returned in listing order. A failed download yields a placeholder
    /// file instead of an error.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] for a 404 listing,
    /// [`FetchError::RateLimited`] for a 403 listing and
    /// [`FetchError::Upstream`] for any other listing failure.
    pub async fn fetch(&self, repo: &RepoRef) -> Result<RepoContent, FetchError> {
        info!(repo = repo.to_string(); "Fetching repository contents");

        let entries = self.list_contents(repo).await?;
        let scripts: Vec<ContentEntry> = entries.into_iter().filter(|e| e.is_script()).collect();
        let total_files = scripts.len();
        let selected: Vec<ContentEntry> = scripts.into_iter().take(self.config.max_files()).collect();

        debug!(
            total_files,
            selected = selected.len(),
            concurrency = self.config.concurrency();
            "Downloading script files"
        );

        let client = self.client.clone();
        let files = fan_out(selected, self.config.concurrency(), move |entry| {
            let client = client.clone();
            async move {
                let downloaded = download(&client, &entry).await;
                if let Err(reason) = &downloaded {
                    warn!(path = entry.path, reason; "Failed to download file");
                }
                RepoFile::from_download(entry, downloaded)
            }
        })
        .await;

        info!(repo = repo.to_string(), files = files.len(); "Repository fetched");

        Ok(RepoContent::new(repo.clone(), files, total_files))
    }

    async fn list_contents(&self, repo: &RepoRef) -> Result<Vec<ContentEntry>, FetchError> {
        let url = format!(
            "{}/repos/{}/{}/contents",
            self.config.api_base(),
            repo.owner(),
            repo.repo()
        );
        debug!(url; "Listing repository contents");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, ACCEPT_GITHUB_V3)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound(repo.to_string())),
            StatusCode::FORBIDDEN => Err(FetchError::RateLimited),
            status if !status.is_success() => Err(FetchError::Upstream(status.to_string())),
            _ => Ok(response.json().await?),
        }
    }
}

async fn download(client: &Client, entry: &ContentEntry) -> Result<String, String> {
    let url = entry
        .download_url
        .as_deref()
        .ok_or_else(|| "no download URL".to_string())?;

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|err| err.to_string())?;

    response.text().await.map_err(|err| err.to_string())
}
