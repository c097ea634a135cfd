//! HTTP client for the GitHub repositories API.

use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use repoctl_core::{
    change::EndpointDescriptor,
    repository::{RepoId, Repository},
};
use repoctl_reconcile::{AccessError, RepositoryAccess, UpdateParams};
use reqwest::{Client, RequestBuilder, Response, StatusCode};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("repoctl/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn repo_url(&self, repo: &RepoId) -> String {
        format!("{}/repos/{}/{}", self.api_url, repo.owner, repo.name)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        let req = req.header("Accept", "application/vnd.github+json");
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn repository(repo: &RepoId, response: Response) -> Result<Repository, AccessError> {
        let status = response.status();
        if status.is_success() {
            let r = response
                .json()
                .await
                .with_context(|| format!("Failed to parse repository {}", repo))?;
            return Ok(r);
        }
        let body = response.text().await.unwrap_or_default();
        Err(classify(repo, status, body))
    }
}

/// Map an unsuccessful status to an [`AccessError`].
fn classify(repo: &RepoId, status: StatusCode, body: String) -> AccessError {
    if status == StatusCode::NOT_FOUND {
        AccessError::NotFound { repo: repo.clone() }
    } else {
        AccessError::Remote(anyhow!("GitHub API error ({status}) for {repo}: {body}"))
    }
}

#[async_trait]
impl RepositoryAccess for GitHubClient {
    async fn get(&self, repo: &RepoId) -> Result<Repository, AccessError> {
        let url = self.repo_url(repo);
        tracing::trace!(%url, "GET repository");

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .context("Failed to send request")?;

        Self::repository(repo, response).await
    }

    async fn update(&self, params: &UpdateParams) -> Result<Repository, AccessError> {
        let endpoint = self.update_endpoint(params);
        tracing::trace!(url = %endpoint.url, body = %endpoint.body, "PATCH repository");

        let response = self
            .authorize(self.client.patch(&endpoint.url).json(&endpoint.body))
            .send()
            .await
            .context("Failed to send request")?;

        Self::repository(&params.repo, response).await
    }

    fn update_endpoint(&self, params: &UpdateParams) -> EndpointDescriptor {
        EndpointDescriptor {
            method: "PATCH".to_string(),
            url: self.repo_url(&params.repo),
            body: params.body(),
        }
    }
}
