//! Core analyzer trait definition.
//!
//! Analyzers combine a tokenizer and filters into a complete text pipeline:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Vectorizer
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. Filter N
//! ```
//!
//! # Examples
//!
//! ```
//! use requery::analysis::analyzer::Analyzer;
//! use requery::analysis::analyzer::FeedbackAnalyzer;
//!
//! let analyzer = FeedbackAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("The Kitten and a cat").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "kitten");
//! assert_eq!(tokens[1].text, "cat");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Requires `Send + Sync` so an analyzer can be shared behind an `Arc`.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
