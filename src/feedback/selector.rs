//! Expansion term selection.

use log::warn;

use crate::feedback::query::Query;
use crate::feedback::vector::TermVector;

/// Default number of terms added per feedback round.
pub const DEFAULT_TERMS_PER_CYCLE: usize = 2;

/// Picks the highest-weighted terms that are not already in the query.
///
/// Terms are ranked by weight descending with lexical tie-breaking. Negative
/// weights are not filtered out: when every remaining term is negative the
/// least negative ones are still picked.
#[derive(Debug, Clone)]
pub struct TermSelector {
    max_terms: usize,
}

impl Default for TermSelector {
    fn default() -> Self {
        Self::new(DEFAULT_TERMS_PER_CYCLE)
    }
}

impl TermSelector {
    pub fn new(max_terms: usize) -> Self {
        Self { max_terms }
    }

    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    /// Select up to `max_terms` new terms.
    ///
    /// Returns fewer when the vocabulary runs out of terms absent from the
    /// query.
    pub fn select(&self, updated: &TermVector, query: &Query) -> Vec<String> {
        let present = query.term_set();

        let selected: Vec<String> = updated
            .ranked()
            .into_iter()
            .filter(|(term, _)| !present.contains(*term))
            .take(self.max_terms)
            .map(|(term, _)| term.to_string())
            .collect();

        if selected.len() < self.max_terms {
            warn!(
                "only {} of {} expansion terms available",
                selected.len(),
                self.max_terms
            );
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> TermVector {
        pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
    }

    #[test]
    fn test_skips_query_terms() {
        let updated = vector(&[("cats", 1.2), ("kitten", 0.4), ("feline", 0.3), ("zoo", -0.1)]);
        let query = Query::parse("Cats").unwrap();

        let terms = TermSelector::default().select(&updated, &query);

        assert_eq!(terms, vec!["kitten", "feline"]);
    }

    #[test]
    fn test_tie_break_is_lexical() {
        let updated = vector(&[("whiskers", 0.2), ("paws", 0.2), ("claws", 0.2)]);
        let query = Query::parse("cats").unwrap();

        let terms = TermSelector::default().select(&updated, &query);

        assert_eq!(terms, vec!["claws", "paws"]);
    }

    #[test]
    fn test_negative_weights_are_eligible() {
        let updated = vector(&[("cats", 1.0), ("lions", -0.05), ("zoo", -0.2), ("tigers", -0.1)]);
        let query = Query::parse("cats").unwrap();

        let terms = TermSelector::default().select(&updated, &query);

        assert_eq!(terms, vec!["lions", "tigers"]);
    }

    #[test]
    fn test_fewer_terms_when_vocabulary_exhausted() {
        let updated = vector(&[("cats", 1.0), ("kitten", 0.5)]);
        let query = Query::parse("cats").unwrap();
        assert_eq!(TermSelector::default().select(&updated, &query), vec!["kitten"]);

        let query = Query::parse("cats kitten").unwrap();
        assert!(TermSelector::default().select(&updated, &query).is_empty());

        assert!(TermSelector::default()
            .select(&TermVector::new(), &query)
            .is_empty());
    }

    #[test]
    fn test_never_more_than_max_terms() {
        let updated = vector(&[("a1", 0.9), ("b2", 0.8), ("c3", 0.7), ("d4", 0.6)]);
        let query = Query::parse("query").unwrap();

        assert_eq!(TermSelector::new(3).select(&updated, &query).len(), 3);
        assert_eq!(TermSelector::default().select(&updated, &query).len(), 2);
    }
}
