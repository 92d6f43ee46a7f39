//! Command line argument parsing for the requery CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Requery - refine a web search query from relevance feedback
#[derive(Parser, Debug, Clone)]
#[command(name = "requery")]
#[command(about = "Refine a web search query through rounds of relevance feedback")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RequeryArgs {
    /// Initial query
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Google Custom Search API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Programmable search engine id
    #[arg(long, env = "GOOGLE_ENGINE_ID")]
    pub engine_id: Option<String>,

    /// Target precision@10, between 0 and 1
    #[arg(short, long)]
    pub precision: Option<f64>,

    /// Stop after this many rounds
    #[arg(long)]
    pub max_cycles: Option<usize>,

    /// Judge automatically: a result is relevant when it mentions one of
    /// these keywords (repeatable)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl RequeryArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    /// The query words joined into one string.
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable transcript
    Human,
    /// JSON session report
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_args() {
        let args = RequeryArgs::try_parse_from([
            "requery",
            "--engine-id",
            "cx",
            "-p",
            "0.8",
            "--max-cycles",
            "3",
            "per",
            "se",
        ])
        .unwrap();

        assert_eq!(args.query_text(), "per se");
        assert_eq!(args.engine_id.as_deref(), Some("cx"));
        assert_eq!(args.precision, Some(0.8));
        assert_eq!(args.max_cycles, Some(3));
        assert!(args.keywords.is_empty());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_query_required() {
        assert!(RequeryArgs::try_parse_from(["requery"]).is_err());
    }

    #[test]
    fn test_keywords_and_config() {
        let args = RequeryArgs::try_parse_from([
            "requery",
            "-k",
            "kitten",
            "--keyword",
            "feline",
            "-c",
            "/etc/requery.json",
            "cats",
        ])
        .unwrap();

        assert_eq!(args.keywords, vec!["kitten", "feline"]);
        assert_eq!(args.config, Some(PathBuf::from("/etc/requery.json")));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = RequeryArgs::try_parse_from(["requery", "cats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = RequeryArgs::try_parse_from(["requery", "-vv", "cats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = RequeryArgs::try_parse_from(["requery", "--quiet", "-vvv", "cats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = RequeryArgs::try_parse_from(["requery", "--format", "json", "cats"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);

        assert!(RequeryArgs::try_parse_from(["requery", "--format", "yaml", "cats"]).is_err());
    }
}
