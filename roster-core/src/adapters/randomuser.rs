//! randomuser.me API client
//!
//! Issues the single `GET /api/?results=N&nat=XX` request that populates the
//! directory.
//!
//! API Documentation: https://randomuser.me/documentation

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::domain::result::{Error as DomainError, Result as DomainResult};
use crate::domain::{RandomUserResponse, RawUser};
use crate::ports::{FetchRequest, UserSource};

/// Default production API URL
const RANDOMUSER_PRODUCTION_URL: &str = "https://randomuser.me/api";

/// Environment variable to override the API base URL.
/// Set this to point the directory at a mirror or a local mock.
pub const ROSTER_API_URL_ENV: &str = "ROSTER_API_URL";

/// Get the API base URL, checking environment variable first
pub fn get_base_url() -> String {
    std::env::var(ROSTER_API_URL_ENV).unwrap_or_else(|_| RANDOMUSER_PRODUCTION_URL.to_string())
}

/// randomuser.me API client
#[derive(Debug)]
pub struct RandomUserClient {
    client: Client,
    base_url: String,
}

impl RandomUserClient {
    /// Create a client for the production API (or `ROSTER_API_URL` if set)
    pub fn new() -> Result<Self> {
        Self::new_with_base_url(&get_base_url())
    }

    /// Create a client against a custom base URL
    pub fn new_with_base_url(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).context("Invalid API URL format")?;

        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("API URL must use HTTP or HTTPS");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one batch of users
    pub async fn get_users(&self, request: &FetchRequest) -> Result<Vec<RawUser>> {
        let url = format!("{}/", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("results", request.results.to_string()),
                ("nat", request.nationality.clone()),
            ])
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        self.check_response_status(&response)?;

        // API returns { results: [...], info: {...} }
        let api_response: RandomUserResponse = response
            .json()
            .await
            .context("Failed to parse randomuser.me response")?;

        Ok(api_response.results)
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> anyhow::Error {
        if error.is_timeout() {
            anyhow::anyhow!("Connection timed out after 30 seconds")
        } else if error.is_connect() {
            anyhow::anyhow!("Unable to connect to {}", self.base_url)
        } else {
            anyhow::anyhow!("randomuser.me request failed: {}", error)
        }
    }

    /// Check response status and return appropriate errors
    fn check_response_status(&self, response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match status.as_u16() {
            429 => anyhow::bail!("randomuser.me rate limit exceeded"),
            503 => anyhow::bail!("randomuser.me is temporarily unavailable (HTTP 503)"),
            code => anyhow::bail!("randomuser.me API error: HTTP {}", code),
        }
    }
}

#[async_trait]
impl UserSource for RandomUserClient {
    fn name(&self) -> &str {
        "randomuser"
    }

    async fn fetch_users(&self, request: &FetchRequest) -> DomainResult<Vec<RawUser>> {
        // `{:#}` keeps the anyhow context chain in one line
        self.get_users(request)
            .await
            .map_err(|e| DomainError::fetch(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = RandomUserClient::new_with_base_url("https://randomuser.me/api/").unwrap();
        assert_eq!(client.base_url(), "https://randomuser.me/api");
    }

    #[test]
    fn test_reject_invalid_url() {
        let result = RandomUserClient::new_with_base_url("not a url");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid API URL"));
    }

    #[test]
    fn test_reject_non_http_scheme() {
        let result = RandomUserClient::new_with_base_url("ftp://randomuser.me/api");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HTTP"));
    }
}
