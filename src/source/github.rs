use crate::error::{BumpTagError, Result};
use crate::source::{RawTag, TagSource};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

const PER_PAGE: usize = 100;

/// Reads tag names of a GitHub repository through the REST API
pub struct GitHubTagSource {
    client: Client,
    api_url: String,
    owner: String,
    repo: String,
    token: Option<String>,
}

impl GitHubTagSource {
    /// Create a source for `owner/repo`
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the API (e.g., "https://api.github.com")
    /// * `repository` - Repository in `owner/repo` form
    /// * `token` - Optional token sent as a bearer credential
    pub fn new(api_url: &str, repository: &str, token: Option<String>) -> Result<Self> {
        let (owner, repo) = repository
            .split_once('/')
            .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty() && !repo.contains('/'))
            .ok_or_else(|| {
                BumpTagError::config(format!(
                    "Invalid repository '{}' - expected owner/repo",
                    repository
                ))
            })?;

        let client = Client::builder()
            .user_agent(concat!("bump-tag/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GitHubTagSource {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token,
        })
    }

    /// URL of one page of the tag listing (pages start at 1)
    pub fn tags_url(&self, page: usize) -> String {
        format!(
            "{}/repos/{}/{}/tags?per_page={}&page={}",
            self.api_url, self.owner, self.repo, PER_PAGE, page
        )
    }

    fn fetch_page(&self, page: usize) -> Result<Vec<RawTag>> {
        let mut request = self
            .client
            .get(self.tags_url(page))
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(BumpTagError::remote(format!(
                "Listing tags of {}/{} failed: HTTP {}",
                self.owner, self.repo, status
            )));
        }

        parse_tags_page(&response.text()?)
    }
}

impl TagSource for GitHubTagSource {
    fn list_tags(&self) -> Result<Vec<RawTag>> {
        let mut tags = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.fetch_page(page)?;
            debug!(page, count = batch.len(), "fetched tag page");
            let last_page = batch.len() < PER_PAGE;
            tags.extend(batch);
            if last_page {
                break;
            }
            page += 1;
        }

        Ok(tags)
    }

    fn describe(&self) -> String {
        format!("github:{}/{}", self.owner, self.repo)
    }
}

/// Parse one page of the `GET /repos/{owner}/{repo}/tags` response
pub fn parse_tags_page(body: &str) -> Result<Vec<RawTag>> {
    serde_json::from_str(body)
        .map_err(|e| BumpTagError::remote(format!("Invalid tag listing response: {}", e)))
}
