//! Judged search results and precision.

use log::warn;
use serde::{Deserialize, Serialize};

/// Number of results judged per feedback round.
pub const BATCH_SIZE: usize = 10;

/// One search result together with its relevance judgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgedResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default)]
    pub relevant: bool,
}

impl JudgedResult {
    /// Create an unjudged (not relevant) result.
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
            relevant: false,
        }
    }

    pub fn with_relevance(mut self, relevant: bool) -> Self {
        self.relevant = relevant;
        self
    }
}

/// The judged results of one feedback round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBatch {
    results: Vec<JudgedResult>,
}

impl ResultBatch {
    pub fn new(results: Vec<JudgedResult>) -> Self {
        if results.len() != BATCH_SIZE {
            warn!(
                "result batch has {} results, precision is still computed over {}",
                results.len(),
                BATCH_SIZE
            );
        }
        Self { results }
    }

    pub fn results(&self) -> &[JudgedResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of results judged relevant.
    pub fn relevant_count(&self) -> usize {
        self.results.iter().filter(|r| r.relevant).count()
    }

    /// Relevant results over the fixed batch size of [`BATCH_SIZE`].
    pub fn precision(&self) -> f64 {
        self.relevant_count() as f64 / BATCH_SIZE as f64
    }

    /// Snippets split into `(relevant, irrelevant)`, each in batch order.
    pub fn snippets(&self) -> (Vec<&str>, Vec<&str>) {
        let (relevant, irrelevant): (Vec<&JudgedResult>, Vec<&JudgedResult>) =
            self.results.iter().partition(|r| r.relevant);
        (
            relevant.into_iter().map(|r| r.snippet.as_str()).collect(),
            irrelevant.into_iter().map(|r| r.snippet.as_str()).collect(),
        )
    }
}

impl FromIterator<JudgedResult> for ResultBatch {
    fn from_iter<T: IntoIterator<Item = JudgedResult>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_with(relevant: usize) -> ResultBatch {
        (0..BATCH_SIZE)
            .map(|i| {
                JudgedResult::new(format!("title {i}"), format!("https://example.com/{i}"), format!("snippet {i}"))
                    .with_relevance(i < relevant)
            })
            .collect()
    }

    #[test]
    fn test_precision_is_k_over_ten() {
        for k in 0..=BATCH_SIZE {
            let batch = batch_with(k);
            assert_eq!(batch.relevant_count(), k);
            assert_eq!(batch.precision(), k as f64 / 10.0);
        }
    }

    #[test]
    fn test_short_batch_uses_fixed_denominator() {
        let batch = ResultBatch::new(vec![
            JudgedResult::new("a", "u", "s").with_relevance(true),
            JudgedResult::new("b", "u", "s"),
        ]);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.precision(), 0.1);
    }

    #[test]
    fn test_snippets_partition_keeps_order() {
        let batch = ResultBatch::new(vec![
            JudgedResult::new("a", "u", "first").with_relevance(true),
            JudgedResult::new("b", "u", "second"),
            JudgedResult::new("c", "u", "third").with_relevance(true),
        ]);
        let (relevant, irrelevant) = batch.snippets();
        assert_eq!(relevant, vec!["first", "third"]);
        assert_eq!(irrelevant, vec!["second"]);
    }

    #[test]
    fn test_relevant_defaults_to_false_when_deserialized() {
        let result: JudgedResult =
            serde_json::from_str(r#"{"title":"t","url":"u","snippet":"s"}"#).unwrap();
        assert!(!result.relevant);
    }
}
