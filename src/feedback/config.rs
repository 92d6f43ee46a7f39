//! Configuration for feedback sessions.

use serde::{Deserialize, Serialize};

use crate::error::{RequeryError, Result};
use crate::feedback::rocchio::RocchioWeights;
use crate::feedback::selector::DEFAULT_TERMS_PER_CYCLE;

/// Configuration for a refinement session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Precision at which the session stops, in [0, 1].
    pub target_precision: f64,

    /// Rocchio coefficients used to expand the query.
    pub weights: RocchioWeights,

    /// Maximum number of terms appended per round.
    pub terms_per_cycle: usize,

    /// Stop after this many judged rounds without reaching a terminal state.
    /// `None` means no limit.
    pub max_cycles: Option<usize>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            target_precision: 0.9,
            weights: RocchioWeights::expansion(),
            terms_per_cycle: DEFAULT_TERMS_PER_CYCLE,
            max_cycles: None,
        }
    }
}

impl FeedbackConfig {
    /// Create a config with the given target and defaults elsewhere.
    pub fn new(target_precision: f64) -> Self {
        Self {
            target_precision,
            ..Default::default()
        }
    }

    /// Set the Rocchio coefficients.
    pub fn with_weights(mut self, weights: RocchioWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the number of terms appended per round.
    pub fn with_terms_per_cycle(mut self, terms: usize) -> Self {
        self.terms_per_cycle = terms;
        self
    }

    /// Cap the number of judged rounds.
    pub fn with_max_cycles(mut self, max_cycles: usize) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.target_precision) {
            return Err(RequeryError::invalid_argument(format!(
                "target precision must be within [0, 1], got {}",
                self.target_precision
            )));
        }
        self.weights.validate()?;
        if self.terms_per_cycle == 0 {
            return Err(RequeryError::invalid_argument(
                "terms_per_cycle must be at least 1",
            ));
        }
        if self.max_cycles == Some(0) {
            return Err(RequeryError::invalid_argument(
                "max_cycles must be at least 1 when set",
            ));
        }
        Ok(())
    }
}
