//! Analyzer implementations that combine tokenizers and filters.

#[allow(clippy::module_inception)]
mod analyzer;
mod feedback;
mod pipeline;

pub use analyzer::Analyzer;
pub use feedback::FeedbackAnalyzer;
pub use pipeline::PipelineAnalyzer;
