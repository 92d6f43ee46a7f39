//! Rocchio query update.
//!
//! Moves the query vector toward the centroid of relevant documents and away
//! from the centroid of irrelevant ones:
//!
//! ```text
//! new = α·Q + β·R − γ·I
//! ```
//!
//! An empty document list contributes a zero centroid. Weights are not clipped
//! or renormalized, so terms pulled down by `I` may go negative.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{RequeryError, Result};
use crate::feedback::vector::TermVector;
use crate::feedback::vectorizer::TfIdfVectorizer;

/// Rocchio coefficients for the query, relevant and irrelevant terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocchioWeights {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Default for RocchioWeights {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.35,
            gamma: 0.15,
        }
    }
}

impl RocchioWeights {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Weights used when expanding a query between feedback rounds.
    pub fn expansion() -> Self {
        Self::new(1.0, 0.75, 0.15)
    }

    /// Build from exactly three values `[alpha, beta, gamma]`.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [alpha, beta, gamma] => {
                let weights = Self::new(*alpha, *beta, *gamma);
                weights.validate()?;
                Ok(weights)
            }
            _ => Err(RequeryError::invalid_argument(format!(
                "Rocchio weights need exactly 3 values, got {}",
                values.len()
            ))),
        }
    }

    /// Reject NaN and infinite coefficients.
    pub fn validate(&self) -> Result<()> {
        if [self.alpha, self.beta, self.gamma]
            .iter()
            .all(|w| w.is_finite())
        {
            Ok(())
        } else {
            Err(RequeryError::invalid_argument(format!(
                "Rocchio weights must be finite: {self:?}"
            )))
        }
    }
}

/// Computes updated query vectors from relevance judgments.
#[derive(Debug, Default)]
pub struct RocchioUpdater {
    vectorizer: TfIdfVectorizer,
}

impl RocchioUpdater {
    pub fn new(vectorizer: TfIdfVectorizer) -> Self {
        Self { vectorizer }
    }

    /// Compute `α·Q + β·R − γ·I` over a space fitted on the query and all
    /// judged texts.
    ///
    /// The result has an entry for every vocabulary term.
    pub fn update<S: AsRef<str>>(
        &self,
        query: &str,
        relevant: &[S],
        irrelevant: &[S],
        weights: RocchioWeights,
    ) -> Result<TermVector> {
        if query.trim().is_empty() {
            return Err(RequeryError::invalid_argument(
                "Rocchio update needs a non-empty query",
            ));
        }
        weights.validate()?;

        let mut corpus: Vec<&str> = Vec::with_capacity(1 + relevant.len() + irrelevant.len());
        corpus.extend(relevant.iter().map(AsRef::as_ref));
        corpus.extend(irrelevant.iter().map(AsRef::as_ref));
        corpus.push(query);

        let space = self.vectorizer.fit(&corpus)?;

        let query_vector = space.project(query)?;
        let relevant_centroid = centroid_or_zero(&space.project_batch(relevant)?);
        let irrelevant_centroid = centroid_or_zero(&space.project_batch(irrelevant)?);

        let mut updated = space.zero_vector();
        updated.add_scaled(&query_vector, weights.alpha);
        updated.add_scaled(&relevant_centroid, weights.beta);
        updated.add_scaled(&irrelevant_centroid, -weights.gamma);

        debug!(
            "rocchio update: {} relevant, {} irrelevant, {} terms",
            relevant.len(),
            irrelevant.len(),
            updated.len()
        );

        Ok(updated)
    }
}

fn centroid_or_zero(vectors: &[TermVector]) -> TermVector {
    TermVector::centroid(vectors).unwrap_or_default()
}
