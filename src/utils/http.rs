// src/utils/http.rs

//! HTTP client utilities and the page fetch abstraction.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::HttpConfig;

/// Source of raw page markup.
///
/// The lookup service only needs a URL-to-body mapping, so tests and
/// offline tooling can stand in for the network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the body of `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// [`PageFetcher`] backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with its own client.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self::with_client(create_client(config)?))
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::fetch(url, e))?;
        response.text().await.map_err(|e| AppError::fetch(url, e))
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.php"))
            .and(query_param("UPC", "012345"))
            .and(header("user-agent", "lookup-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let config = HttpConfig {
            user_agent: "lookup-test/1.0".to_string(),
            timeout_secs: 5,
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        let body = fetcher
            .fetch(&format!("{}/search.php?UPC=012345", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "<p>ok</p>");
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();
        let result = fetcher.fetch(&format!("{}/search.php", server.uri())).await;

        assert!(result.is_err());
    }
}
