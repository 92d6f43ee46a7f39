//! Relevance judges.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::Result;
use crate::search::client::SearchHit;

/// Decides whether a single search hit is relevant.
pub trait Judge {
    /// Judge the hit shown at 1-based `rank`.
    fn judge(&mut self, rank: usize, hit: &SearchHit) -> Result<bool>;
}

/// Asks a person on a console, one hit at a time.
///
/// An answer of `Y` or `y` marks the hit relevant; anything else does not.
/// End of input is an error.
#[derive(Debug)]
pub struct ConsoleJudge<R, W> {
    input: R,
    output: W,
}

impl ConsoleJudge<StdinLock<'static>, Stdout> {
    /// Judge using the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleJudge<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Judge for ConsoleJudge<R, W> {
    fn judge(&mut self, rank: usize, hit: &SearchHit) -> Result<bool> {
        writeln!(self.output, "Result {rank}")?;
        writeln!(self.output, " Title: {}", hit.title)?;
        writeln!(self.output, " URL: {}", hit.url)?;
        writeln!(self.output, " Description: {}", hit.snippet)?;
        write!(self.output, "Is This Document Relevant? (Y/N) ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a relevance judgment",
            )
            .into());
        }
        writeln!(self.output)?;

        Ok(matches!(answer.trim(), "Y" | "y"))
    }
}

/// Automatic judge: a hit is relevant when its title or snippet mentions any
/// of the keywords (case-insensitive).
#[derive(Debug, Clone)]
pub struct KeywordJudge {
    keywords: Vec<String>,
}

impl KeywordJudge {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }
}

impl Judge for KeywordJudge {
    fn judge(&mut self, _rank: usize, hit: &SearchHit) -> Result<bool> {
        let text = format!("{} {}", hit.title, hit.snippet).to_lowercase();
        Ok(self.keywords.iter().any(|k| text.contains(k.as_str())))
    }
}
