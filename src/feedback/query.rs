//! The query being refined.

use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{RequeryError, Result};

/// An ordered, append-only sequence of whitespace-separated terms.
///
/// Duplicates are allowed and order is kept, since the text form is what gets
/// sent to the search provider.
///
/// # Examples
///
/// ```
/// use requery::feedback::Query;
///
/// let mut query = Query::parse("  cats ").unwrap();
/// query.extend(vec!["kitten".to_string(), "feline".to_string()]);
///
/// assert_eq!(query.text(), "cats kitten feline");
/// assert!(query.contains_term("Kitten"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    /// Parse user input into a query.
    ///
    /// Fails with `InvalidArgument` when the text has no terms.
    pub fn parse(text: &str) -> Result<Self> {
        let terms: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if terms.is_empty() {
            return Err(RequeryError::invalid_argument(
                "Query text must contain at least one term",
            ));
        }
        Ok(Self { terms })
    }

    /// Terms in order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms, counting duplicates.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false for a parsed query.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Space-joined text form.
    pub fn text(&self) -> String {
        self.terms.join(" ")
    }

    /// Lowercased set of the current terms.
    pub fn term_set(&self) -> AHashSet<String> {
        self.terms.iter().map(|t| t.to_lowercase()).collect()
    }

    /// Case-insensitive membership test on whole terms.
    pub fn contains_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.terms.iter().any(|t| t.to_lowercase() == term)
    }

    /// Append terms at the end. Blank entries are ignored.
    pub fn extend<I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.terms.extend(
            terms
                .into_iter()
                .flat_map(|t| t.split_whitespace().map(str::to_string).collect::<Vec<_>>()),
        );
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
