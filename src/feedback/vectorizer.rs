//! TF-IDF vectorizer for relevance feedback.
//!
//! [`TfIdfVectorizer::fit`] builds a [`VectorSpace`] from one corpus; the space
//! then projects texts onto its vocabulary. Weights are raw term counts times a
//! smoothed inverse document frequency,
//!
//! ```text
//! idf(t) = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! and each projected vector is L2-normalized.

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::analyzer::{Analyzer, FeedbackAnalyzer};
use crate::error::Result;
use crate::feedback::vector::TermVector;

/// Builds vector spaces over a corpus of texts.
pub struct TfIdfVectorizer {
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(Arc::new(FeedbackAnalyzer::default()))
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }

    /// Fit a vector space on `documents`.
    ///
    /// An empty or fully stopped corpus yields an empty vocabulary; that is
    /// not an error.
    pub fn fit<S: AsRef<str>>(&self, documents: &[S]) -> Result<VectorSpace> {
        let n_documents = documents.len();
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let unique_tokens: AHashSet<String> = tokenize(&self.analyzer, doc.as_ref())?
                .into_iter()
                .collect();
            for token in unique_tokens {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let idf: BTreeMap<String, f64> = document_frequency
            .into_iter()
            .map(|(term, df)| {
                let weight = ((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
                (term, weight)
            })
            .collect();

        debug!(
            "fitted vector space: {} documents, {} terms",
            n_documents,
            idf.len()
        );

        Ok(VectorSpace {
            idf,
            n_documents,
            analyzer: Arc::clone(&self.analyzer),
        })
    }
}

/// Immutable vocabulary and IDF snapshot of one corpus.
///
/// A space belongs to the corpus it was fitted on; fit a new one whenever the
/// corpus changes.
pub struct VectorSpace {
    idf: BTreeMap<String, f64>,
    n_documents: usize,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for VectorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorSpace")
            .field("vocabulary_size", &self.idf.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl VectorSpace {
    /// Vocabulary terms in enumeration (lexical) order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.idf.keys().map(String::as_str)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Number of documents the space was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Inverse document frequency of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// The all-zero vector over this vocabulary.
    pub fn zero_vector(&self) -> TermVector {
        TermVector::zeros(self.idf.keys().cloned())
    }

    /// Project one text onto this space.
    ///
    /// The result has an entry for every vocabulary term. Terms outside the
    /// vocabulary are ignored, and a text with no vocabulary terms projects to
    /// the zero vector.
    pub fn project(&self, text: &str) -> Result<TermVector> {
        let mut counts: AHashMap<String, f64> = AHashMap::new();
        for token in tokenize(&self.analyzer, text)? {
            if self.idf.contains_key(&token) {
                *counts.entry(token).or_insert(0.0) += 1.0;
            }
        }

        let norm = counts
            .iter()
            .map(|(term, tf)| (tf * self.idf[term]).powi(2))
            .sum::<f64>()
            .sqrt();

        let mut vector = self.zero_vector();
        if norm > 0.0 {
            for (term, tf) in counts {
                let weight = tf * self.idf[&term] / norm;
                vector.insert(term, weight);
            }
        }

        Ok(vector)
    }

    /// Project each text onto this space.
    pub fn project_batch<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<TermVector>> {
        texts.iter().map(|text| self.project(text.as_ref())).collect()
    }
}

fn tokenize(analyzer: &Arc<dyn Analyzer>, text: &str) -> Result<Vec<String>> {
    Ok(analyzer.analyze(text)?.map(|token| token.text).collect())
}
