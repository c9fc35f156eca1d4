// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line parsing and execution.

use crate::errors::Result;
use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser};
use std::{ffi::OsString, io::Write};
use testlog_metadata::{Outcome, TestReport, TestlogExitCode};
use testlog_parser::{capture::CapturedOutput, export::write_report};
use tracing::debug;

/// Extract per-test outcomes from the console output of a test run.
///
/// Reads the captured standard output and standard error of a jest- or pytest-style test run,
/// and writes a JSON report with one entry per test.
///
/// The command line is exactly three paths. There are no flags: every argument, including ones
/// that start with `-`, is a path.
#[derive(Debug, Parser)]
#[command(
    name = "testlog",
    bin_name = "testlog",
    disable_help_flag = true,
    disable_version_flag = true,
    styles = crate::output::clap_styles::style(),
    max_term_width = 100,
)]
pub struct TestlogApp {
    /// File holding the captured standard output of the test run
    #[arg(value_name = "STDOUT_FILE", allow_hyphen_values = true)]
    stdout_file: Utf8PathBuf,

    /// File holding the captured standard error of the test run
    #[arg(value_name = "STDERR_FILE", allow_hyphen_values = true)]
    stderr_file: Utf8PathBuf,

    /// Where to write the JSON report
    #[arg(value_name = "OUTPUT_JSON", allow_hyphen_values = true)]
    output_json: Utf8PathBuf,
}

impl TestlogApp {
    /// Parses a full command line, program name first.
    ///
    /// Every argument after the program name is a path, including `--` and anything else that
    /// looks like a flag.
    pub fn try_parse_paths<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let bin_name = args.next().unwrap_or_else(|| OsString::from("testlog"));
        // A leading `--` puts clap in trailing mode, where a later `--` is an ordinary value.
        Self::try_parse_from([bin_name, OsString::from("--")].into_iter().chain(args))
    }

    /// Executes the app.
    ///
    /// Returns the exit code.
    pub fn exec(self) -> Result<i32> {
        let capture = CapturedOutput::read(&self.stdout_file, &self.stderr_file)?;
        let records = capture.scan();
        let record_count = records.len();

        let report = TestReport::from_records(records);
        debug!(
            "found {record_count} test results for {} unique tests \
             ({} passed, {} failed, {} skipped, {} errored)",
            report.len(),
            report.count(Outcome::Passed),
            report.count(Outcome::Failed),
            report.count(Outcome::Skipped),
            report.count(Outcome::Error),
        );

        write_report(&report, &self.output_json)?;
        Ok(TestlogExitCode::OK)
    }
}

/// Handles a clap error.
///
/// Every clap error is a usage error, since there are no help or version flags: the usage line is
/// printed to stdout and a short description of the problem to stderr.
///
/// Returns the exit code to use.
#[doc(hidden)]
pub fn handle_clap_error(err: clap::Error) -> i32 {
    tracing::error!("{}", err.kind());
    let _ = writeln!(std::io::stdout(), "{}", usage());
    TestlogExitCode::USAGE_ERROR
}

/// Returns the plain-text usage line.
pub(crate) fn usage() -> String {
    TestlogApp::command().render_usage().to_string()
}
