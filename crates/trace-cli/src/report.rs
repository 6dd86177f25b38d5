//! JSON report document written by `tracecode`

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use trace_core::AnalysisResult;

use crate::cli::Cli;
use crate::error::{CliError, Result};

const NOTICE: &str = include_str!("../NOTICE");

/// Acknowledgment that must accompany published TraceCode data.
pub fn notice() -> String {
    extract_acknowledgment(NOTICE)
}

/// The acknowledgment is the indented paragraph that follows the header of a
/// NOTICE text and ends at the first double blank line.
fn extract_acknowledgment(text: &str) -> String {
    // NOTICE layout: header lines, a blank line, the acknowledgment indented by
    // two spaces, then a double blank line before the license text.
    let head = text.split_once("\n\n\n").map_or(text, |(head, _)| head);
    let acknowledgment = head.split_once("\n\n  ").map_or(head, |(_, rest)| rest);
    acknowledgment.trim().replace("  ", "")
}

/// Command-line options echoed back in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportOptions {
    #[serde(rename = "--develop")]
    pub develop: String,
    #[serde(rename = "--deploy")]
    pub deploy: String,
    #[serde(rename = "--config", skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
}

impl From<&Cli> for ReportOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            develop: cli.develop.display().to_string(),
            deploy: cli.deploy.display().to_string(),
            config: cli.config.as_ref().map(|path| path.display().to_string()),
        }
    }
}

/// Top-level output document.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    tracecode_notice: String,
    tracecode_options: ReportOptions,
    tracecode_version: &'static str,
    tracecode_errors: Vec<String>,
    tracecode_results: &'a AnalysisResult,
}

impl<'a> Report<'a> {
    pub fn new(options: ReportOptions, results: &'a AnalysisResult) -> Self {
        Self {
            tracecode_notice: notice(),
            tracecode_options: options,
            tracecode_version: env!("CARGO_PKG_VERSION"),
            tracecode_errors: Vec::new(),
            tracecode_results: results,
        }
    }

    /// Serialize as 2-space indented JSON followed by a newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write to `path`, or to stdout when `path` is `None`.
    pub fn write(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                let file = File::create(path).map_err(|source| CliError::Output {
                    path: PathBuf::from(path),
                    source,
                })?;
                self.write_to(BufWriter::new(file))
            }
            None => self.write_to(io::stdout().lock()),
        }
    }
}
