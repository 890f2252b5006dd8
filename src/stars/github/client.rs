//! GitHub API HTTP client.

use crate::error::{BrowserError, ProviderErrorKind, Result};
use crate::stars::StarProvider;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Public GitHub API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";

/// GitHub client configuration.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Base URL for the REST API
    pub api_base: String,
    /// Personal access or OAuth token
    pub token: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum retries for network failures and 5xx responses
    pub max_retries: u8,
}

impl GitHubClientConfig {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: token.into(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }
}

/// HTTP client for the starring endpoints.
pub struct GitHubClient {
    client: Client,
    config: GitHubClientConfig,
}

/// Error payload returned by the API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn network_error(msg: &str, err: reqwest::Error) -> BrowserError {
    BrowserError::provider(msg, ProviderErrorKind::Network(err.to_string()))
}

impl GitHubClient {
    /// Create a new GitHub client.
    pub fn new(config: GitHubClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", e))?;

        Ok(Self { client, config })
    }

    fn starred_url(&self, repo: &str) -> Result<String> {
        let (owner, name) = split_repo(repo)?;
        Ok(format!(
            "{}/user/starred/{}/{}",
            self.config.api_base.trim_end_matches('/'),
            owner,
            name
        ))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);
        // PUT without a body must still send Content-Length: 0.
        builder.header(reqwest::header::CONTENT_LENGTH, "0")
    }

    /// Send with retries on network errors and server errors.
    fn send(&self, method: Method, url: &str) -> Result<Response> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Exponential backoff: 500ms, 1s, 2s, ...
                let delay = Duration::from_millis(500 << (attempt - 1));
                std::thread::sleep(delay);
                tracing::debug!("Retry attempt {} after {:?}", attempt, delay);
            }

            match self.request(method.clone(), url).send() {
                Ok(response) if response.status().is_server_error() => {
                    tracing::debug!("{} {} returned {}", method, url, response.status());
                    last_error = Some(status_error(response));
                }
                Ok(response) => return Ok(response),
                Err(e) => {
                    tracing::debug!("{} {} attempt {} failed: {}", method, url, attempt + 1, e);
                    last_error = Some(network_error("request failed", e));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            BrowserError::provider(
                "request failed",
                ProviderErrorKind::Network("no attempts made".to_string()),
            )
        }))
    }
}

impl StarProvider for GitHubClient {
    fn is_starred(&self, repo: &str) -> Result<bool> {
        let url = self.starred_url(repo)?;
        let response = self.send(Method::GET, &url)?;
        match response.status() {
            StatusCode::NO_CONTENT => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(status_error(response)),
        }
    }

    fn set_starred(&self, repo: &str, starred: bool) -> Result<()> {
        let url = self.starred_url(repo)?;
        let method = if starred { Method::PUT } else { Method::DELETE };
        let response = self.send(method, &url)?;
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_MODIFIED {
            Ok(())
        } else {
            Err(status_error(response))
        }
    }

    fn name(&self) -> &'static str {
        "GitHub"
    }
}

/// `owner/repo` into its two parts.
fn split_repo(repo: &str) -> Result<(&str, &str)> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(BrowserError::provider(
            "building request",
            ProviderErrorKind::InvalidRepository(repo.to_string()),
        )),
    }
}

/// Map an unexpected response to a provider error.
fn status_error(response: Response) -> BrowserError {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or(body);

    let kind = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderErrorKind::Unauthorized(message),
        _ => ProviderErrorKind::Api {
            status: status.as_u16(),
            message,
        },
    };
    BrowserError::provider("GitHub API", kind)
}
