//! Search client abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One unjudged search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SearchHit {
    pub fn new<T, U, S>(title: T, url: U, snippet: S) -> Self
    where
        T: Into<String>,
        U: Into<String>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }
}

/// A remote ranked-retrieval service.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run `query` and return hits in rank order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;

    /// Get the name of this client for logging.
    fn name(&self) -> &str;
}
