//! HTTP fetcher for ministry board pages.
//!
//! One GET per board with a browser-like User-Agent and a bounded timeout.
//! No retries; a failed board is retried on the next poll cycle.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use super::BasePageFetcher;
use crate::config::FetcherConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("timed out fetching {url}")]
    Timeout { url: String },

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to create HTTP client")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    fn from_request(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Network {
                url: url.to_string(),
                source,
            }
        }
    }

    fn from_body(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                source,
            }
        }
    }
}

pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("ko-KR,ko;q=0.9,en-US;q=0.5"),
        );

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BasePageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, "Fetching board page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_body(url, e))
    }
}
