//! # Requery
//!
//! Query refinement from explicit relevance feedback.
//!
//! ## Features
//!
//! - TF-IDF vector space built over judged snippets
//! - Rocchio query update with configurable coefficients
//! - Expansion term selection (at most two new terms per round)
//! - Precision@10 driven feedback loop with pluggable judgment providers
//! - Google Custom Search client and console judge for interactive sessions

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
