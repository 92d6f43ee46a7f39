//! Result-and-judgment providers.

use std::collections::VecDeque;

use crate::error::{RequeryError, Result};
use crate::feedback::judgment::ResultBatch;
use crate::feedback::query::Query;

/// Source of judged result batches.
///
/// Given the current query, an implementation runs the search and returns the
/// results with `relevant` filled in by some judging mechanism.
pub trait JudgmentProvider {
    /// Fetch results for `query` and judge them.
    fn fetch_and_judge(&mut self, query: &Query) -> Result<ResultBatch>;

    /// Get the name of this provider for logging.
    fn name(&self) -> &str;
}

/// Deterministic provider that replays pre-judged batches in order.
///
/// Every query it receives is recorded, which lets tests assert on how the
/// query evolved. Running out of batches is an error.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    batches: VecDeque<ResultBatch>,
    queries: Vec<String>,
}

impl ScriptedProvider {
    pub fn new<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = ResultBatch>,
    {
        Self {
            batches: batches.into_iter().collect(),
            queries: Vec::new(),
        }
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Batches not yet handed out.
    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl JudgmentProvider for ScriptedProvider {
    fn fetch_and_judge(&mut self, query: &Query) -> Result<ResultBatch> {
        self.queries.push(query.text());
        self.batches.pop_front().ok_or_else(|| {
            RequeryError::judgment(format!(
                "no scripted batch left for query '{}'",
                query.text()
            ))
        })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::judgment::JudgedResult;

    #[test]
    fn test_scripted_provider_replays_in_order() {
        let first = ResultBatch::new(vec![JudgedResult::new("a", "u", "one")]);
        let second = ResultBatch::new(vec![JudgedResult::new("b", "u", "two")]);
        let mut provider = ScriptedProvider::new(vec![first.clone(), second.clone()]);

        let query = Query::parse("cats").unwrap();
        assert_eq!(provider.fetch_and_judge(&query).unwrap(), first);
        assert_eq!(provider.fetch_and_judge(&query).unwrap(), second);
        assert_eq!(provider.remaining(), 0);
        assert_eq!(provider.queries(), &["cats", "cats"]);
    }

    #[test]
    fn test_scripted_provider_exhausted() {
        let mut provider = ScriptedProvider::default();
        let query = Query::parse("cats").unwrap();
        assert!(matches!(
            provider.fetch_and_judge(&query),
            Err(RequeryError::Judgment(_))
        ));
        assert_eq!(provider.name(), "scripted");
    }
}
