//! Output formatting for the CLI.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, RequeryArgs};
use crate::error::Result;
use crate::feedback::{CycleReport, FeedbackState, SessionReport};

/// Session parameters echoed before the first round.
#[derive(Debug)]
pub struct SessionParameters<'a> {
    pub engine_id: &'a str,
    pub target_precision: f64,
    pub query: &'a str,
    pub max_cycles: Option<usize>,
}

/// Print the parameters in human mode.
pub fn output_parameters<W: Write>(
    out: &mut W,
    params: &SessionParameters<'_>,
    args: &RequeryArgs,
) -> Result<()> {
    if args.output_format != OutputFormat::Human || args.verbosity() == 0 {
        return Ok(());
    }

    writeln!(out, "Parameters:")?;
    writeln!(out, "════════════")?;
    writeln!(out, "Engine ID        : {}", params.engine_id)?;
    writeln!(out, "Target precision : {}", params.target_precision)?;
    writeln!(out, "Query            : {}", params.query)?;
    if let Some(max) = params.max_cycles {
        writeln!(out, "Max rounds       : {max}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Print one finished round in human mode.
pub fn output_cycle<W: Write>(
    out: &mut W,
    cycle: &CycleReport,
    target_precision: f64,
    args: &RequeryArgs,
) -> Result<()> {
    if args.output_format != OutputFormat::Human {
        return Ok(());
    }

    writeln!(out, "Feedback Summary (round {}):", cycle.cycle)?;
    writeln!(out, "─────────────")?;
    writeln!(out, "Query     : {}", cycle.query)?;
    writeln!(
        out,
        "Precision : {:.1} ({}/10 relevant)",
        cycle.precision, cycle.relevant
    )?;

    match cycle.outcome {
        FeedbackState::Converged => {
            writeln!(out, "Desired precision {target_precision} reached, done")?;
        }
        FeedbackState::Exhausted => {
            writeln!(out, "No relevant results, stopping")?;
        }
        FeedbackState::CycleLimit => {
            writeln!(
                out,
                "Still below the desired precision of {target_precision}, round limit reached"
            )?;
        }
        _ => {
            writeln!(
                out,
                "Still below the desired precision of {target_precision}"
            )?;
            if cycle.new_terms.is_empty() {
                writeln!(out, "No new terms found, query unchanged")?;
            } else {
                writeln!(out, "Augmenting by  {}", cycle.new_terms.join(" "))?;
            }
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Print the final result in the selected format.
pub fn output_report<W: Write>(
    out: &mut W,
    report: &SessionReport,
    args: &RequeryArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_report_human(out, report, args),
        OutputFormat::Json => output_json(out, report, args),
    }
}

fn output_report_human<W: Write>(
    out: &mut W,
    report: &SessionReport,
    args: &RequeryArgs,
) -> Result<()> {
    if args.verbosity() == 0 {
        writeln!(out, "{}", report.final_query)?;
        return Ok(());
    }

    writeln!(out, "Session {}", report.session_id)?;
    writeln!(out, "════════════")?;
    writeln!(out, "Initial query   : {}", report.initial_query)?;
    writeln!(out, "Final query     : {}", report.final_query)?;
    writeln!(out, "Rounds          : {}", report.cycles.len())?;
    writeln!(out, "Final precision : {:.1}", report.final_precision)?;
    writeln!(out, "Outcome         : {}", outcome_label(report.outcome))?;
    Ok(())
}

fn output_json<W: Write, T: Serialize>(out: &mut W, value: &T, args: &RequeryArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn outcome_label(state: FeedbackState) -> &'static str {
    match state {
        FeedbackState::Converged => "target precision reached",
        FeedbackState::Exhausted => "no relevant results",
        FeedbackState::CycleLimit => "round limit reached",
        FeedbackState::AwaitingJudgment
        | FeedbackState::PrecisionComputed
        | FeedbackState::Expanding => "unfinished",
    }
}
