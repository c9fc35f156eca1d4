// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by testlog.
//!
//! Scanning itself never fails; errors only come from reading captures and writing reports.

use crate::capture::CaptureStream;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// An error that occurred while reading a captured output file.
#[derive(Debug, Error)]
#[error("failed to read captured {stream} from `{path}`")]
pub struct ReadCaptureError {
    stream: CaptureStream,
    path: Utf8PathBuf,
    #[source]
    err: std::io::Error,
}

impl ReadCaptureError {
    pub(crate) fn new(
        stream: CaptureStream,
        path: impl Into<Utf8PathBuf>,
        err: std::io::Error,
    ) -> Self {
        Self {
            stream,
            path: path.into(),
            err,
        }
    }

    /// Returns the stream the file was supposed to hold.
    pub fn stream(&self) -> CaptureStream {
        self.stream
    }

    /// Returns the path that couldn't be read.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// An error that occurred while writing a report.
///
/// If this is returned, the destination is left untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteReportError {
    /// The report could not be serialized.
    #[error("failed to serialize report for `{path}`")]
    Serialize {
        /// The destination path.
        path: Utf8PathBuf,

        /// The underlying error.
        #[source]
        err: serde_json::Error,
    },

    /// The report could not be written to disk.
    #[error("failed to write report to `{path}`")]
    Io {
        /// The destination path.
        path: Utf8PathBuf,

        /// The underlying error.
        #[source]
        err: std::io::Error,
    },
}

impl WriteReportError {
    /// Returns the destination path of the report.
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::Serialize { path, .. } | Self::Io { path, .. } => path,
        }
    }
}
