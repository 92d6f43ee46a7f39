//! Tokens produced by the analysis pipeline.

use std::fmt;
use std::ops::Range;

/// One term occurrence in an analyzed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Term text after any normalization applied so far.
    pub text: String,

    /// Ordinal of the match among all matches in the source text (0-based).
    /// Filters that drop tokens leave gaps.
    pub position: usize,

    /// Byte range of the match in the source text.
    pub span: Range<usize>,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize, span: Range<usize>) -> Self {
        Token {
            text: text.into(),
            position,
            span,
        }
    }

    /// Replace the text, keeping position and span.
    pub fn relabel<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Boxed iterator threaded through tokenizer and filters.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Wrap already materialized tokens as a stream.
pub fn token_stream(tokens: Vec<Token>) -> TokenStream {
    Box::new(tokens.into_iter())
}
