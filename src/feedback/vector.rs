//! Term-weight vectors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A mapping from term to weight.
///
/// Keys are kept in lexical order, which is also the enumeration order of a
/// [`VectorSpace`](super::VectorSpace) vocabulary. Two vectors are equal when
/// their mappings are equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermVector {
    weights: BTreeMap<String, f64>,
}

impl TermVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vector holding `0.0` for every given term.
    pub fn zeros<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            weights: terms.into_iter().map(|t| (t.into(), 0.0)).collect(),
        }
    }

    /// Set the weight of a term.
    pub fn insert<S: Into<String>>(&mut self, term: S, weight: f64) {
        self.weights.insert(term.into(), weight);
    }

    /// Weight of `term`, or `0.0` if absent.
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Check whether `term` has an entry.
    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check whether the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// True when every weight is zero (or there are none).
    pub fn is_zero(&self) -> bool {
        self.weights.values().all(|w| *w == 0.0)
    }

    /// Iterate over `(term, weight)` pairs in lexical term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(t, w)| (t.as_str(), *w))
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Return a copy with every weight multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            weights: self
                .weights
                .iter()
                .map(|(t, w)| (t.clone(), w * factor))
                .collect(),
        }
    }

    /// Add `factor * other` into `self`, inserting terms missing from `self`.
    pub fn add_scaled(&mut self, other: &TermVector, factor: f64) {
        for (term, weight) in &other.weights {
            *self.weights.entry(term.clone()).or_insert(0.0) += factor * weight;
        }
    }

    /// Element-wise mean of `vectors`, or `None` when the slice is empty.
    pub fn centroid(vectors: &[TermVector]) -> Option<TermVector> {
        let (first, rest) = vectors.split_first()?;
        let mut sum = first.clone();
        for vector in rest {
            sum.add_scaled(vector, 1.0);
        }
        Some(sum.scaled(1.0 / vectors.len() as f64))
    }

    /// Terms ordered by weight descending.
    ///
    /// The sort is stable over lexical order, so equal weights rank
    /// alphabetically.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl FromIterator<(String, f64)> for TermVector {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
