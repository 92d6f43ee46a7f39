//! Google Custom Search JSON API client.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{RequeryError, Result};
use crate::search::client::{SearchClient, SearchHit};

/// Default endpoint of the Custom Search JSON API.
pub const GOOGLE_CUSTOM_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Credentials for the Custom Search JSON API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleSearchConfig {
    /// API key.
    pub api_key: String,
    /// Programmable search engine id (`cx`).
    pub engine_id: String,
}

impl GoogleSearchConfig {
    pub fn new<K: Into<String>, E: Into<String>>(api_key: K, engine_id: E) -> Self {
        Self {
            api_key: api_key.into(),
            engine_id: engine_id.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(RequeryError::config("Google API key is missing"));
        }
        if self.engine_id.trim().is_empty() {
            return Err(RequeryError::config("Google search engine id is missing"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

/// Client for Google's Custom Search JSON API.
///
/// One request returns the top ten results, which is exactly one feedback batch.
///
/// # Examples
///
/// ```no_run
/// use requery::search::{GoogleSearchClient, GoogleSearchConfig, SearchClient};
///
/// # async fn example() -> requery::error::Result<()> {
/// let client = GoogleSearchClient::new(GoogleSearchConfig::new("api-key", "engine-id"))?;
/// let hits = client.search("cats").await?;
/// println!("{} hits", hits.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GoogleSearchClient {
    client: Client,
    config: GoogleSearchConfig,
    endpoint: String,
}

impl GoogleSearchClient {
    pub fn new(config: GoogleSearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: Client::new(),
            config,
            endpoint: GOOGLE_CUSTOM_SEARCH_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different endpoint.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Parse a response body into hits. A body without `items` has no hits.
    pub fn parse_response(body: &str) -> Result<Vec<SearchHit>> {
        let response: SearchResponse = serde_json::from_str(body).map_err(|e| {
            RequeryError::search(format!("Failed to parse search response: {e}"))
        })?;

        Ok(response
            .items
            .into_iter()
            .map(|item| SearchHit::new(item.title, item.link, item.snippet))
            .collect())
    }
}

#[async_trait]
impl SearchClient for GoogleSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        debug!("custom search request for '{query}'");

        let http_response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("cx", self.config.engine_id.as_str()),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| RequeryError::search(format!("Search request failed: {e}")))?;

        let status = http_response.status();
        let response_text = http_response
            .text()
            .await
            .map_err(|e| RequeryError::search(format!("Failed to read response text: {e}")))?;

        if !status.is_success() {
            return Err(RequeryError::search(format!(
                "Search API error (status {status}): {response_text}"
            )));
        }

        Self::parse_response(&response_text)
    }

    fn name(&self) -> &str {
        "google"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let body = r#"{
            "kind": "customsearch#search",
            "items": [
                {"title": "Kitten care", "link": "https://a.example", "snippet": "Feeding a kitten"},
                {"title": "Big cats", "link": "https://b.example", "snippet": "Lions at the zoo", "displayLink": "b.example"}
            ]
        }"#;

        let hits = GoogleSearchClient::parse_response(body).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(
            hits[0],
            SearchHit::new("Kitten care", "https://a.example", "Feeding a kitten")
        );
        assert_eq!(hits[1].url, "https://b.example");
    }

    #[test]
    fn test_parse_response_without_items() {
        let hits = GoogleSearchClient::parse_response(r#"{"kind": "customsearch#search"}"#).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_parse_response_missing_snippet() {
        let body = r#"{"items": [{"title": "t", "link": "l"}]}"#;
        let hits = GoogleSearchClient::parse_response(body).unwrap();
        assert_eq!(hits[0].snippet, "");
    }

    #[test]
    fn test_parse_invalid_body() {
        assert!(matches!(
            GoogleSearchClient::parse_response("<html>"),
            Err(RequeryError::Search(_))
        ));
    }

    #[test]
    fn test_config_validation() {
        assert!(GoogleSearchConfig::new("key", "cx").validate().is_ok());
        assert!(matches!(
            GoogleSearchClient::new(GoogleSearchConfig::new("", "cx")),
            Err(RequeryError::Config(_))
        ));
        assert!(GoogleSearchConfig::new("key", " ").validate().is_err());
    }

    #[test]
    fn test_custom_endpoint() {
        let client = GoogleSearchClient::new(GoogleSearchConfig::new("key", "cx"))
            .unwrap()
            .with_endpoint("http://localhost:9999/search");
        assert_eq!(client.endpoint(), "http://localhost:9999/search");
        assert_eq!(client.name(), "google");
    }
}
