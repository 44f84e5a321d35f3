use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::model::{RawMeal, SearchResponse};

/// Default public search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.themealdb.com/api/json/v1/1/search.php";

/// HTTP client for the meal database search endpoint.
pub struct MealDbClient {
    client: Client,
    endpoint: String,
}

impl MealDbClient {
    /// Build a client against `endpoint` with the given request timeout
    /// (30s when unset).
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, LookupError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; WorldCookbook/1.0)")
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        Self::new(config.endpoint.clone(), Some(config.timeout_duration()))
    }

    /// Issue one search request. Substring matching is the service's job;
    /// the client passes the query through as-is (URL-encoded).
    ///
    /// A `"meals": null` envelope reads as an empty result page.
    pub async fn search(&self, query: &str) -> Result<Vec<RawMeal>, LookupError> {
        debug!("searching for {query:?} at {}", self.endpoint);
        let envelope: SearchResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("s", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.meals.unwrap_or_default())
    }
}
