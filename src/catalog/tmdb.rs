use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use super::{Catalog, CatalogError};
use crate::{
    config::CatalogConfig,
    types::{MovieDetail, MovieSummary, Page},
    warning,
};

const BAD_GATEWAY_RETRIES: u32 = 3;
const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(10);
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// TMDB v3 client authenticated with an API read access token.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    config: CatalogConfig,
    retry_delay: Duration,
}

impl TmdbClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            retry_delay: BAD_GATEWAY_DELAY,
        }
    }

    /// Replaces the wait between `502 Bad Gateway` retries.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Sends requests through `client` instead of a default one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Builds a client from `TMDB_*` environment variables.
    pub fn from_env() -> Result<Self, CatalogError> {
        Ok(Self::new(CatalogConfig::from_env()?))
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Performs a GET against `path` and decodes the JSON body.
    ///
    /// Retries `502 Bad Gateway` up to [`BAD_GATEWAY_RETRIES`] times and a
    /// single `429 Too Many Requests` when the server asks for a wait of at
    /// most [`MAX_RETRY_AFTER_SECS`] seconds.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let api_url = format!("{uri}{path}", uri = self.config.api_url, path = path);
        let mut bad_gateway_attempts = 0;
        let mut rate_limited = false;

        loop {
            let response = self
                .client
                .get(&api_url)
                .bearer_auth(&self.config.access_token)
                .header("accept", "application/json")
                .query(&[("language", self.config.language.clone())])
                .query(query)
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                return Ok(response.json::<T>().await?);
            }

            if status == StatusCode::BAD_GATEWAY && bad_gateway_attempts < BAD_GATEWAY_RETRIES {
                bad_gateway_attempts += 1;
                sleep(self.retry_delay).await;
                continue; // retry
            }

            if status == StatusCode::TOO_MANY_REQUESTS && !rate_limited {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(0);
                if retry_after <= MAX_RETRY_AFTER_SECS {
                    rate_limited = true;
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // retry
                }

                warning!(
                    "Catalog asked to retry after {} seconds, giving up.",
                    retry_after
                );
            }

            return Err(CatalogError::Status(status));
        }
    }
}

#[async_trait]
impl Catalog for TmdbClient {
    async fn movie(&self, id: i64) -> Result<MovieDetail, CatalogError> {
        self.get_json(&format!("/movie/{id}"), &[]).await
    }

    async fn recommendations(&self, id: i64) -> Result<Vec<MovieSummary>, CatalogError> {
        let page: Page<MovieSummary> = self
            .get_json(
                &format!("/movie/{id}/recommendations"),
                &[("page", "1".to_string())],
            )
            .await?;
        Ok(page.results)
    }

    async fn popular(&self, page: u32) -> Result<Page<MovieSummary>, CatalogError> {
        self.get_json("/movie/popular", &[("page", page.max(1).to_string())])
            .await
    }

    async fn search(&self, query: &str, page: u32) -> Result<Page<MovieSummary>, CatalogError> {
        self.get_json(
            "/search/movie",
            &[
                ("query", query.to_string()),
                ("page", page.max(1).to_string()),
            ],
        )
        .await
    }
}
