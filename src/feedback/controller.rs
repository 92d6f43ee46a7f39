//! Feedback-loop controller.
//!
//! One refinement cycle:
//!
//! ```text
//! AwaitingJudgment ──batch──▶ PrecisionComputed ──┬─ p == 0        ─▶ Exhausted
//!        ▲                                       ├─ p >= target   ─▶ Converged
//!        │                                       ├─ cycle cap hit ─▶ CycleLimit
//!        └──────── append terms ◀─ Expanding ◀───┘  0 < p < target
//! ```
//!
//! A round with zero precision ends the session without an update: there is
//! no relevant centroid to move toward.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RequeryError, Result};
use crate::feedback::config::FeedbackConfig;
use crate::feedback::judgment::ResultBatch;
use crate::feedback::provider::JudgmentProvider;
use crate::feedback::query::Query;
use crate::feedback::rocchio::RocchioUpdater;
use crate::feedback::selector::TermSelector;

/// States of the feedback loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackState {
    /// Waiting for a judged batch for the current query.
    AwaitingJudgment,
    /// Precision of the latest batch is known; no decision yet.
    PrecisionComputed,
    /// Precision is between zero and the target; the query is being extended.
    Expanding,
    /// Target precision reached.
    Converged,
    /// No relevant result in the batch.
    Exhausted,
    /// The configured cycle cap was reached first.
    CycleLimit,
}

impl FeedbackState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FeedbackState::Converged | FeedbackState::Exhausted | FeedbackState::CycleLimit
        )
    }
}

/// What happened in one judged round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleReport {
    /// 1-based round number.
    pub cycle: usize,
    /// Query text the batch was fetched for.
    pub query: String,
    pub relevant: usize,
    pub precision: f64,
    /// Terms appended after this round (empty unless expanding).
    pub new_terms: Vec<String>,
    /// Decision taken for this round.
    pub outcome: FeedbackState,
}

/// Transcript of a whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub initial_query: String,
    pub final_query: String,
    pub target_precision: f64,
    pub final_precision: f64,
    pub outcome: FeedbackState,
    pub cycles: Vec<CycleReport>,
}

/// Drives a single query through rounds of judgment and expansion.
///
/// The controller exclusively owns the query and only ever appends to it.
#[derive(Debug)]
pub struct FeedbackController {
    query: Query,
    config: FeedbackConfig,
    updater: RocchioUpdater,
    selector: TermSelector,
    state: FeedbackState,
    cycles: usize,
    expansions: usize,
}

impl FeedbackController {
    /// Create a controller; fails when the config is invalid.
    pub fn new(query: Query, config: FeedbackConfig) -> Result<Self> {
        config.validate()?;
        let selector = TermSelector::new(config.terms_per_cycle);
        Ok(Self {
            query,
            config,
            updater: RocchioUpdater::default(),
            selector,
            state: FeedbackState::AwaitingJudgment,
            cycles: 0,
            expansions: 0,
        })
    }

    /// Replace the Rocchio updater (e.g. to use a different analyzer).
    pub fn with_updater(mut self, updater: RocchioUpdater) -> Self {
        self.updater = updater;
        self
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    pub fn state(&self) -> FeedbackState {
        self.state
    }

    /// Judged rounds processed so far.
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Number of times the Rocchio update ran.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Process one judged batch for the current query.
    pub fn step(&mut self, batch: &ResultBatch) -> Result<CycleReport> {
        if self.state.is_terminal() {
            return Err(RequeryError::invalid_argument(format!(
                "feedback session already finished ({:?})",
                self.state
            )));
        }

        // Nothing is committed until the round's decision has succeeded.
        let cycle = self.cycles + 1;
        let query_text = self.query.text();
        let precision = batch.precision();
        debug!(
            "cycle {}: query '{}' precision {:.2}",
            cycle, query_text, precision
        );

        let target = self.config.target_precision;
        let (outcome, new_terms) = if precision == 0.0 {
            (FeedbackState::Exhausted, Vec::new())
        } else if precision >= target {
            (FeedbackState::Converged, Vec::new())
        } else if self.config.max_cycles.is_some_and(|max| cycle >= max) {
            (FeedbackState::CycleLimit, Vec::new())
        } else {
            let terms = self.expand(batch)?;
            self.query.extend(terms.clone());
            (FeedbackState::Expanding, terms)
        };

        self.cycles = cycle;
        self.state = if outcome.is_terminal() {
            outcome
        } else {
            FeedbackState::AwaitingJudgment
        };

        info!(
            "cycle {}: precision {:.2} (target {:.2}) -> {:?}{}",
            self.cycles,
            precision,
            target,
            outcome,
            if new_terms.is_empty() {
                String::new()
            } else {
                format!(", new query '{}'", self.query.text())
            }
        );

        Ok(CycleReport {
            cycle: self.cycles,
            query: query_text,
            relevant: batch.relevant_count(),
            precision,
            new_terms,
            outcome,
        })
    }

    /// Derive expansion terms from a judged batch without touching the query.
    pub fn expand(&mut self, batch: &ResultBatch) -> Result<Vec<String>> {
        let (relevant, irrelevant) = batch.snippets();
        let updated = self.updater.update(
            &self.query.text(),
            relevant.as_slice(),
            irrelevant.as_slice(),
            self.config.weights,
        )?;
        self.expansions += 1;
        Ok(self.selector.select(&updated, &self.query))
    }

    /// Run rounds against `provider` until a terminal state is reached.
    pub fn run(&mut self, provider: &mut dyn JudgmentProvider) -> Result<SessionReport> {
        self.run_with(provider, |_| Ok(()))
    }

    /// Like [`run`](Self::run), calling `observer` after every round.
    pub fn run_with<F>(
        &mut self,
        provider: &mut dyn JudgmentProvider,
        mut observer: F,
    ) -> Result<SessionReport>
    where
        F: FnMut(&CycleReport) -> Result<()>,
    {
        let started_at = Utc::now();
        let initial_query = self.query.text();
        let mut cycles = Vec::new();

        info!(
            "starting feedback session for '{}' with provider '{}'",
            initial_query,
            provider.name()
        );

        while !self.state.is_terminal() {
            let batch = provider.fetch_and_judge(&self.query)?;
            let report = self.step(&batch)?;
            observer(&report)?;
            cycles.push(report);
        }

        let final_precision = cycles.last().map(|c: &CycleReport| c.precision).unwrap_or(0.0);

        Ok(SessionReport {
            session_id: Uuid::new_v4(),
            started_at,
            initial_query,
            final_query: self.query.text(),
            target_precision: self.config.target_precision,
            final_precision,
            outcome: self.state,
            cycles,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::token::TokenStream;
    use crate::feedback::judgment::{BATCH_SIZE, JudgedResult};
    use crate::feedback::vectorizer::TfIdfVectorizer;

    struct BrokenAnalyzer;

    impl Analyzer for BrokenAnalyzer {
        fn analyze(&self, _text: &str) -> Result<TokenStream> {
            Err(RequeryError::analysis("analyzer unavailable"))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    fn batch(relevant: &[&str], irrelevant: &[&str]) -> ResultBatch {
        relevant
            .iter()
            .map(|s| (s, true))
            .chain(irrelevant.iter().map(|s| (s, false)))
            .enumerate()
            .map(|(i, (snippet, rel))| {
                JudgedResult::new(format!("result {i}"), format!("https://example.com/{i}"), *snippet)
                    .with_relevance(rel)
            })
            .collect()
    }

    fn uniform_batch(relevant: usize) -> ResultBatch {
        let rel = vec!["kitten adoption feline rescue"; relevant];
        let irr = vec!["zoo lions tigers"; BATCH_SIZE - relevant];
        batch(&rel, &irr)
    }

    #[test]
    fn test_zero_precision_exhausts_without_update() {
        let mut controller =
            FeedbackController::new(Query::parse("xyzzy").unwrap(), FeedbackConfig::new(0.5)).unwrap();

        let report = controller.step(&uniform_batch(0)).unwrap();

        assert_eq!(report.outcome, FeedbackState::Exhausted);
        assert_eq!(controller.state(), FeedbackState::Exhausted);
        assert_eq!(controller.expansions(), 0);
        assert_eq!(controller.query().text(), "xyzzy");
    }

    #[test]
    fn test_target_met_converges() {
        let mut controller =
            FeedbackController::new(Query::parse("cats").unwrap(), FeedbackConfig::new(0.5)).unwrap();

        let report = controller.step(&uniform_batch(6)).unwrap();

        assert_eq!(report.outcome, FeedbackState::Converged);
        assert_eq!(report.precision, 0.6);
        assert_eq!(controller.query().text(), "cats");
        assert_eq!(controller.expansions(), 0);
    }

    #[test]
    fn test_precision_equal_to_target_converges() {
        let mut controller =
            FeedbackController::new(Query::parse("cats").unwrap(), FeedbackConfig::new(0.5)).unwrap();
        let report = controller.step(&uniform_batch(5)).unwrap();
        assert_eq!(report.outcome, FeedbackState::Converged);
    }

    #[test]
    fn test_expanding_appends_terms_and_awaits_judgment() {
        let mut controller =
            FeedbackController::new(Query::parse("cats").unwrap(), FeedbackConfig::new(0.9)).unwrap();

        let report = controller.step(&uniform_batch(3)).unwrap();

        assert_eq!(report.outcome, FeedbackState::Expanding);
        assert_eq!(report.query, "cats");
        assert_eq!(report.new_terms.len(), 2);
        assert_eq!(controller.state(), FeedbackState::AwaitingJudgment);
        assert_eq!(controller.expansions(), 1);
        assert_eq!(
            controller.query().text(),
            format!("cats {}", report.new_terms.join(" "))
        );
        for term in &report.new_terms {
            assert_ne!(term, "cats");
        }
    }

    #[test]
    fn test_stop_word_batch_expands_by_nothing() {
        let mut controller =
            FeedbackController::new(Query::parse("cats").unwrap(), FeedbackConfig::new(0.9)).unwrap();
        let rel = vec!["it is of the"; 3];
        let irr = vec!["to be or an"; 7];

        let report = controller.step(&batch(&rel, &irr)).unwrap();

        assert_eq!(report.outcome, FeedbackState::Expanding);
        assert!(report.new_terms.is_empty());
        assert_eq!(controller.query().text(), "cats");
        assert_eq!(controller.state(), FeedbackState::AwaitingJudgment);
        assert_eq!(controller.cycles(), 1);
    }

    #[test]
    fn test_single_candidate_extends_query_by_one_term() {
        let mut controller =
            FeedbackController::new(Query::parse("cats").unwrap(), FeedbackConfig::new(0.9)).unwrap();
        let rel = vec!["kitten"; 3];
        let irr = vec!["cats"; 7];

        let report = controller.step(&batch(&rel, &irr)).unwrap();

        assert_eq!(report.outcome, FeedbackState::Expanding);
        assert_eq!(report.new_terms, vec!["kitten".to_string()]);
        assert_eq!(controller.query().text(), "cats kitten");
        assert_eq!(controller.state(), FeedbackState::AwaitingJudgment);
    }

    #[test]
    fn test_failed_update_leaves_round_uncounted() {
        let updater = RocchioUpdater::new(TfIdfVectorizer::new(Arc::new(BrokenAnalyzer)));
        let mut controller =
            FeedbackController::new(Query::parse("cats").unwrap(), FeedbackConfig::new(0.9))
                .unwrap()
                .with_updater(updater);

        assert!(matches!(
            controller.step(&uniform_batch(3)),
            Err(RequeryError::Analysis(_))
        ));
        assert_eq!(controller.cycles(), 0);
        assert_eq!(controller.expansions(), 0);
        assert_eq!(controller.state(), FeedbackState::AwaitingJudgment);
        assert_eq!(controller.query().text(), "cats");
    }

    #[test]
    fn test_zero_terms_per_cycle_rejected_by_controller() {
        let config = FeedbackConfig::new(0.9).with_terms_per_cycle(0);
        let result = FeedbackController::new(Query::parse("cats").unwrap(), config);
        assert!(matches!(result, Err(RequeryError::InvalidArgument(_))));
    }

    #[test]
    fn test_cycle_limit_stops_before_expanding() {
        let config = FeedbackConfig::new(0.9).with_max_cycles(1);
        let mut controller = FeedbackController::new(Query::parse("cats").unwrap(), config).unwrap();

        let report = controller.step(&uniform_batch(3)).unwrap();

        assert_eq!(report.outcome, FeedbackState::CycleLimit);
        assert!(report.new_terms.is_empty());
        assert_eq!(controller.query().text(), "cats");
    }

    #[test]
    fn test_step_after_terminal_state_fails() {
        let mut controller =
            FeedbackController::new(Query::parse("cats").unwrap(), FeedbackConfig::new(0.5)).unwrap();
        controller.step(&uniform_batch(0)).unwrap();

        assert!(matches!(
            controller.step(&uniform_batch(5)),
            Err(RequeryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = FeedbackController::new(Query::parse("cats").unwrap(), FeedbackConfig::new(2.0));
        assert!(matches!(result, Err(RequeryError::InvalidArgument(_))));
    }

    #[test]
    fn test_terminal_states() {
        assert!(FeedbackState::Converged.is_terminal());
        assert!(FeedbackState::Exhausted.is_terminal());
        assert!(FeedbackState::CycleLimit.is_terminal());
        assert!(!FeedbackState::Expanding.is_terminal());
        assert!(!FeedbackState::AwaitingJudgment.is_terminal());
        assert!(!FeedbackState::PrecisionComputed.is_terminal());
    }
}
