//! Search-side collaborators of the feedback loop.
//!
//! - [`SearchClient`]: async ranked retrieval, with [`GoogleSearchClient`]
//! - [`Judge`]: per-hit relevance decisions, with [`ConsoleJudge`] and [`KeywordJudge`]
//! - [`SearchJudgmentProvider`]: glues a client and a judge into a
//!   [`JudgmentProvider`](crate::feedback::JudgmentProvider)

pub mod client;
pub mod google;
pub mod judge;
pub mod provider;

pub use client::{SearchClient, SearchHit};
pub use google::{GOOGLE_CUSTOM_SEARCH_ENDPOINT, GoogleSearchClient, GoogleSearchConfig};
pub use judge::{ConsoleJudge, Judge, KeywordJudge};
pub use provider::SearchJudgmentProvider;
