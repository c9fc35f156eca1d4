// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::output::{NO_HEADING_TARGET, StderrStyles};
use owo_colors::OwoColorize;
use std::error::Error;
use testlog_metadata::TestlogExitCode;
use testlog_parser::errors::{ReadCaptureError, WriteReportError};
use thiserror::Error;

pub(crate) type Result<T, E = ExpectedError> = std::result::Result<T, E>;

// The #[error()] strings are short summaries. display_to_stderr prints the full, colorized form.

/// An expected failure: one caused by the environment rather than by a bug in testlog.
#[derive(Debug, Error)]
#[doc(hidden)]
pub enum ExpectedError {
    #[error("failed to read captured output")]
    ReadCaptureError {
        #[from]
        err: ReadCaptureError,
    },
    #[error("failed to write report")]
    WriteReportError {
        #[from]
        err: WriteReportError,
    },
}

impl ExpectedError {
    /// Returns the exit code for the process.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Self::ReadCaptureError { .. } => TestlogExitCode::READ_INPUT_FAILED,
            Self::WriteReportError { .. } => TestlogExitCode::WRITE_OUTPUT_FAILED,
        }
    }

    /// Displays this error to stderr.
    pub fn display_to_stderr(&self, styles: &StderrStyles) {
        let mut next_error = match self {
            Self::ReadCaptureError { err } => {
                tracing::error!(
                    "failed to read captured {} from `{}`",
                    err.stream(),
                    err.path().style(styles.bold)
                );
                err.source()
            }
            Self::WriteReportError { err } => {
                match err {
                    WriteReportError::Serialize { path, .. } => {
                        tracing::error!(
                            "failed to serialize report for `{}`",
                            path.style(styles.bold)
                        );
                    }
                    _ => {
                        tracing::error!(
                            "failed to write report to `{}`",
                            err.path().style(styles.bold)
                        );
                    }
                }
                err.source()
            }
        };

        while let Some(err) = next_error {
            tracing::error!(target: NO_HEADING_TARGET, "\nCaused by:\n  {}", err);
            next_error = err.source();
        }
    }
}
