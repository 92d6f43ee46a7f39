//! Command implementation for the requery CLI.

use std::io::{self, Write};

use log::{debug, info};

use crate::cli::args::{OutputFormat, RequeryArgs};
use crate::cli::output::*;
use crate::config::RequeryConfig;
use crate::error::Result;
use crate::feedback::{FeedbackController, Query, SessionReport};
use crate::search::{ConsoleJudge, GoogleSearchClient, Judge, KeywordJudge, SearchJudgmentProvider};

/// Run a feedback session as described by the command line.
pub fn execute(args: RequeryArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let query = Query::parse(&args.query_text())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_parameters(
        &mut out,
        &SessionParameters {
            engine_id: &config.search.engine_id,
            target_precision: config.feedback.target_precision,
            query: &query.text(),
            max_cycles: config.feedback.max_cycles,
        },
        &args,
    )?;
    drop(out);

    let client = GoogleSearchClient::new(config.search.clone())?;

    let report = if !args.keywords.is_empty() {
        info!("judging automatically with keywords {:?}", args.keywords);
        run_session(&args, &config, query, client, KeywordJudge::new(&args.keywords))?
    } else if args.output_format == OutputFormat::Json {
        // Keep prompts off stdout so the report stays valid JSON.
        let judge = ConsoleJudge::new(io::stdin().lock(), io::stderr());
        run_session(&args, &config, query, client, judge)?
    } else {
        run_session(&args, &config, query, client, ConsoleJudge::stdio())?
    };

    let mut out = io::stdout().lock();
    output_report(&mut out, &report, &args)?;
    out.flush()?;
    Ok(())
}

/// Merge the config file (if any) with command-line overrides.
pub fn resolve_config(args: &RequeryArgs) -> Result<RequeryConfig> {
    let mut config = match &args.config {
        Some(path) => RequeryConfig::from_file(path)?,
        None => RequeryConfig::default(),
    };

    if let Some(precision) = args.precision {
        config.feedback.target_precision = precision;
    }
    if let Some(max_cycles) = args.max_cycles {
        config.feedback.max_cycles = Some(max_cycles);
    }
    if let Some(api_key) = &args.api_key {
        config.search.api_key = api_key.clone();
    }
    if let Some(engine_id) = &args.engine_id {
        config.search.engine_id = engine_id.clone();
    }

    config.feedback.validate()?;
    debug!("resolved feedback config: {:?}", config.feedback);
    Ok(config)
}

fn run_session<J: Judge>(
    args: &RequeryArgs,
    config: &RequeryConfig,
    query: Query,
    client: GoogleSearchClient,
    judge: J,
) -> Result<SessionReport> {
    let mut provider = SearchJudgmentProvider::new(client, judge)?;
    let mut controller = FeedbackController::new(query, config.feedback.clone())?;
    let target = config.feedback.target_precision;

    controller.run_with(&mut provider, |cycle| {
        let mut out = io::stdout().lock();
        output_cycle(&mut out, cycle, target, args)?;
        out.flush()?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequeryError;
    use clap::Parser;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_defaults() {
        let args = RequeryArgs::try_parse_from(["requery", "cats"]).unwrap();
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.feedback.target_precision, 0.9);
        assert_eq!(config.feedback.max_cycles, None);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"feedback": {{"target_precision": 0.5, "max_cycles": 8}},
                "search": {{"api_key": "file-key", "engine_id": "file-cx"}}}}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let args = RequeryArgs::try_parse_from([
            "requery",
            "-c",
            &path,
            "-p",
            "0.7",
            "--engine-id",
            "cli-cx",
            "cats",
        ])
        .unwrap();
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.feedback.target_precision, 0.7);
        assert_eq!(config.feedback.max_cycles, Some(8));
        assert_eq!(config.search.engine_id, "cli-cx");
    }

    #[test]
    fn test_invalid_precision() {
        let args = RequeryArgs::try_parse_from(["requery", "-p", "1.2", "cats"]).unwrap();
        assert!(matches!(
            resolve_config(&args),
            Err(RequeryError::InvalidArgument(_))
        ));
    }
}
