// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scanning captured output for test outcomes.

use crate::{
    classify::{RuleMatch, classify_line, is_log_whitespace},
    lines::split_lines,
};
use testlog_metadata::TestRecord;
use tracing::trace;

/// State carried from one line to the next during a scan.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScanContext {
    /// The file or suite announced by the most recent banner line.
    ///
    /// Only replaced by the next banner: blank lines and the switch from stdout to stderr leave it
    /// alone.
    pub current_file: Option<String>,
}

/// Accumulates test records from a stream of lines.
///
/// Lines are fed in one at a time with [`Self::scan_line`]. Scanning never fails: lines that
/// aren't recognized are dropped.
#[derive(Debug, Default)]
pub struct LogScanner {
    context: ScanContext,
    records: Vec<TestRecord>,
}

impl LogScanner {
    /// Creates a new scanner with no current file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scan context.
    pub fn context(&self) -> &ScanContext {
        &self.context
    }

    /// Returns the records found so far, in discovery order.
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Scans every line in `text`.
    pub fn scan_text(&mut self, text: &str) {
        for line in split_lines(text) {
            self.scan_line(line);
        }
    }

    /// Scans a single line. Trailing whitespace is ignored, and blank lines are skipped.
    pub fn scan_line(&mut self, line: &str) {
        let line = line.trim_end_matches(is_log_whitespace);
        if line.is_empty() {
            return;
        }

        match classify_line(line, self.context.current_file.as_deref()) {
            Some((_, RuleMatch::SuiteBanner { suite })) => {
                trace!(suite, "entering suite");
                self.context.current_file = Some(suite.to_owned());
            }
            Some((rule, RuleMatch::Record(record))) => {
                trace!(
                    ?rule,
                    name = record.name(),
                    status = %record.status(),
                    "found test"
                );
                self.records.push(record);
            }
            None => {}
        }
    }

    /// Consumes the scanner, returning the records found in discovery order.
    pub fn finish(self) -> Vec<TestRecord> {
        self.records
    }
}

/// Extracts test records from captured standard output and standard error.
///
/// The two captures are scanned as one stream, stdout lines first, so a banner printed to stdout
/// still applies to marker lines printed to stderr. Records are returned in the order they were
/// found and may repeat names.
pub fn scan_output(stdout: &str, stderr: &str) -> Vec<TestRecord> {
    let mut scanner = LogScanner::new();
    scanner.scan_text(stdout);
    scanner.scan_text(stderr);
    scanner.finish()
}
