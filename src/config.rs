//! Application configuration loaded from a JSON file.
//!
//! ```json
//! {
//!   "feedback": { "target_precision": 0.8, "max_cycles": 5 },
//!   "search": { "api_key": "...", "engine_id": "..." }
//! }
//! ```
//!
//! Every section and field is optional; missing values fall back to defaults.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{RequeryError, Result};
use crate::feedback::FeedbackConfig;
use crate::search::GoogleSearchConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequeryConfig {
    pub feedback: FeedbackConfig,
    pub search: GoogleSearchConfig,
}

impl RequeryConfig {
    /// Read and parse a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
            .map_err(|e| RequeryError::config(format!("{}: {e}", path.display())))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: RequeryConfig = serde_json::from_str(text)?;
        config.feedback.validate()?;
        Ok(config)
    }
}
