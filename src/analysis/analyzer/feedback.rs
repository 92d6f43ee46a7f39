//! Analyzer for relevance feedback.
//!
//! Pipeline: `[a-zA-Z]{3,}` regex tokenizer, lowercase filter, English stop filter.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Analyzer used to build relevance-feedback vector spaces.
///
/// Extracts alphabetic runs of at least three letters, lowercases them and
/// drops English stop words.
pub struct FeedbackAnalyzer {
    inner: PipelineAnalyzer,
}

impl FeedbackAnalyzer {
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::alphabetic()?);
        let analyzer = PipelineAnalyzer::new("feedback", tokenizer)
            .with_filter(Arc::new(LowercaseFilter::new()))
            .with_filter(Arc::new(StopFilter::default()));

        Ok(Self { inner: analyzer })
    }
}

impl Default for FeedbackAnalyzer {
    fn default() -> Self {
        Self::new().expect("Feedback analyzer should be creatable with default settings")
    }
}

impl Analyzer for FeedbackAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

impl Debug for FeedbackAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(text: &str) -> Vec<String> {
        FeedbackAnalyzer::new()
            .unwrap()
            .analyze(text)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_feedback_analyzer() {
        assert_eq!(
            terms("The KITTEN sat on a mat, with 2 other cats!"),
            vec!["kitten", "sat", "mat", "cats"]
        );
    }

    #[test]
    fn test_only_stop_words_and_short_tokens() {
        assert!(terms("it is of the to 42 an").is_empty());
    }

    #[test]
    fn test_feedback_analyzer_name() {
        assert_eq!(FeedbackAnalyzer::new().unwrap().name(), "feedback");
    }
}
