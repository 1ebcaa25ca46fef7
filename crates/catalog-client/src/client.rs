//! HTTP client for the catalog API.
//!
//! Two endpoints are consumed: `GET {base}/categories` and
//! `GET {base}/products?...`. Every failure maps onto one [`ClientError`]
//! variant; nothing is retried.

use std::time::Duration;

use catalog_core::{AppConfig, Product, ProductQuery};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Client for the catalog API.
///
/// Use [`CatalogClient::from_config`] in the binary or
/// [`CatalogClient::new`] to point at a mock server in tests.
pub struct CatalogClient {
    client: Client,
    /// Base URL without a trailing slash, e.g. `http://localhost:8000/api`.
    base_url: String,
}

impl CatalogClient {
    /// Creates a client with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`ClientError::Network`] if the underlying `reqwest::Client`
    ///   cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Creates a client from the application config.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the distinct category names.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] on connection, timeout, or body read failure.
    /// - [`ClientError::ServerError`] on any non-2xx status.
    /// - [`ClientError::Decode`] if the body is not a JSON array of strings.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint_url("categories", None)?;
        self.get_json(url, "categories").await
    }

    /// Fetches the products matching `query`.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::fetch_categories`], with [`ClientError::Decode`]
    /// raised when the body is not a JSON array of products.
    pub async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint_url("products", Some(query))?;
        self.get_json(url, "products").await
    }

    /// Builds `{base}/{endpoint}` with the query's parameters appended in order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the joined URL does not parse.
    fn endpoint_url(&self, endpoint: &str, query: Option<&ProductQuery>) -> Result<Url, ClientError> {
        let raw = format!("{}/{endpoint}", self.base_url);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.query_pairs_mut().extend_pairs(
                query
                    .params()
                    .iter()
                    .map(|(key, value)| (*key, value.as_str())),
            );
        }

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &str) -> Result<T, ClientError> {
        tracing::debug!(%url, "catalog request");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ClientError::Decode {
            context: format!("{context} from {url}"),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
