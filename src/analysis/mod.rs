//! Text analysis module for Requery.
//!
//! Tokenization, filtering and analysis pipelines that turn raw snippets and
//! query strings into the normalized terms the vectorizer counts.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
