//! HTTP client for the explorer lookup endpoints.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::core::entity::{TypedEntity, UdtQueryResult};
use crate::infrastructure::explorer::types::{
    ApiError, EntityPayload, ErrorEnvelope, FetchError, NameQueryPayload,
};

/// Media type the lookup service speaks.
const JSON_API: &str = "application/vnd.api+json";

/// Remote lookup operations consumed by the resolution engine.
#[async_trait]
pub trait ExplorerApi: Send + Sync {
    /// Resolve an identifier query to its entity. One call, no retries.
    async fn fetch_by_id(&self, query: &str) -> Result<TypedEntity, FetchError>;

    /// Fuzzy lookup of token names and symbols. An empty list is a valid
    /// "no match" answer, not an error.
    async fn fetch_by_name(&self, query: &str) -> Result<Vec<UdtQueryResult>, FetchError>;
}

/// `ExplorerApi` over the public explorer HTTP API.
pub struct HttpExplorerClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpExplorerClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(&self, path: &str, query: &str) -> Result<serde_json::Value, FetchError> {
        let url = format!("{}/v1/{}", self.base_url, path);
        debug!(%url, query, "explorer lookup");

        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .header(reqwest::header::ACCEPT, JSON_API)
            .header(reqwest::header::CONTENT_TYPE, JSON_API)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The body may be an error array or arbitrary junk; decode
            // what we can and keep the status either way.
            let errors: Vec<ApiError> = response.json().await.unwrap_or_default();
            return Err(FetchError::Http(ErrorEnvelope {
                status: status.as_u16(),
                errors,
            }));
        }

        response
            .json()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}

#[async_trait]
impl ExplorerApi for HttpExplorerClient {
    async fn fetch_by_id(&self, query: &str) -> Result<TypedEntity, FetchError> {
        let value = self.get_json("suggest_queries", query).await?;
        let payload: EntityPayload =
            serde_json::from_value(value).map_err(|err| FetchError::Decode(err.to_string()))?;
        Ok(payload.data)
    }

    async fn fetch_by_name(&self, query: &str) -> Result<Vec<UdtQueryResult>, FetchError> {
        let value = self.get_json("udt_queries", query).await?;
        let payload: NameQueryPayload =
            serde_json::from_value(value).map_err(|err| FetchError::Decode(err.to_string()))?;
        Ok(payload
            .data
            .into_iter()
            .map(|record| record.attributes)
            .collect())
    }
}
