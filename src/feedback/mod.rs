//! Relevance-feedback query refinement.
//!
//! This module holds the core of the system:
//!
//! - [`TfIdfVectorizer`] / [`VectorSpace`]: TF-IDF vectors over one round's corpus
//! - [`RocchioUpdater`]: weighted-centroid update of the query vector
//! - [`TermSelector`]: picks the new terms to append
//! - [`FeedbackController`]: the precision-driven loop
//!
//! Judged results arrive through the [`JudgmentProvider`] trait, so the core
//! never performs I/O itself.
//!
//! # Example
//!
//! ```
//! use requery::feedback::{
//!     FeedbackConfig, FeedbackController, FeedbackState, JudgedResult, Query, ResultBatch,
//!     ScriptedProvider,
//! };
//!
//! # fn main() -> requery::error::Result<()> {
//! let judged: ResultBatch = (0..10)
//!     .map(|i| {
//!         JudgedResult::new(format!("r{i}"), "https://example.com", "kitten care")
//!             .with_relevance(i < 6)
//!     })
//!     .collect();
//!
//! let mut provider = ScriptedProvider::new(vec![judged]);
//! let mut controller = FeedbackController::new(Query::parse("cats")?, FeedbackConfig::new(0.5))?;
//! let report = controller.run(&mut provider)?;
//!
//! assert_eq!(report.outcome, FeedbackState::Converged);
//! assert_eq!(report.final_query, "cats");
//! # Ok(())
//! # }
//! ```

mod config;
mod controller;
mod judgment;
mod provider;
mod query;
mod rocchio;
mod selector;
mod vector;
mod vectorizer;

pub use config::FeedbackConfig;
pub use controller::{CycleReport, FeedbackController, FeedbackState, SessionReport};
pub use judgment::{BATCH_SIZE, JudgedResult, ResultBatch};
pub use provider::{JudgmentProvider, ScriptedProvider};
pub use query::Query;
pub use rocchio::{RocchioUpdater, RocchioWeights};
pub use selector::{DEFAULT_TERMS_PER_CYCLE, TermSelector};
pub use vector::TermVector;
pub use vectorizer::{TfIdfVectorizer, VectorSpace};
