//! Judgment provider backed by a search client and a judge.

use log::{debug, warn};
use tokio::runtime::{Builder, Runtime};

use crate::error::Result;
use crate::feedback::{BATCH_SIZE, JudgedResult, JudgmentProvider, Query, ResultBatch};
use crate::search::client::SearchClient;
use crate::search::judge::Judge;

/// Searches for the current query and has every hit judged.
///
/// The client is async; this provider owns a current-thread runtime and
/// blocks on each request so the feedback loop stays synchronous.
pub struct SearchJudgmentProvider<C, J> {
    client: C,
    judge: J,
    runtime: Runtime,
}

impl<C: SearchClient, J: Judge> SearchJudgmentProvider<C, J> {
    pub fn new(client: C, judge: J) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            client,
            judge,
            runtime,
        })
    }

    pub fn judge(&self) -> &J {
        &self.judge
    }
}

impl<C: SearchClient, J: Judge> JudgmentProvider for SearchJudgmentProvider<C, J> {
    fn fetch_and_judge(&mut self, query: &Query) -> Result<ResultBatch> {
        let text = query.text();
        let mut hits = self.runtime.block_on(self.client.search(&text))?;
        debug!("'{}' returned {} hits from {}", text, hits.len(), self.client.name());

        if hits.len() > BATCH_SIZE {
            hits.truncate(BATCH_SIZE);
        } else if hits.len() < BATCH_SIZE {
            warn!("'{}' returned only {} hits", text, hits.len());
        }

        let mut results = Vec::with_capacity(hits.len());
        for (index, hit) in hits.into_iter().enumerate() {
            let relevant = self.judge.judge(index + 1, &hit)?;
            results.push(JudgedResult::new(hit.title, hit.url, hit.snippet).with_relevance(relevant));
        }

        Ok(ResultBatch::new(results))
    }

    fn name(&self) -> &str {
        self.client.name()
    }
}
