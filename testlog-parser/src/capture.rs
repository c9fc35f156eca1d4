// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Captured output from a test run.

use crate::{errors::ReadCaptureError, scan::scan_output};
use camino::Utf8Path;
use std::fmt;
use testlog_metadata::TestRecord;
use tracing::{debug, warn};

/// One of the two output streams of a test run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CaptureStream {
    /// Standard output.
    Stdout,

    /// Standard error.
    Stderr,
}

impl fmt::Display for CaptureStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
        }
    }
}

/// The complete standard output and standard error of a test run, held in memory.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CapturedOutput {
    /// The captured standard output.
    pub stdout: String,

    /// The captured standard error.
    pub stderr: String,
}

impl CapturedOutput {
    /// Creates a new capture from in-memory text.
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Reads both captures fully from disk.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than treated as an error.
    pub fn read(
        stdout_path: &Utf8Path,
        stderr_path: &Utf8Path,
    ) -> Result<Self, ReadCaptureError> {
        let stdout = read_capture(CaptureStream::Stdout, stdout_path)?;
        let stderr = read_capture(CaptureStream::Stderr, stderr_path)?;
        Ok(Self { stdout, stderr })
    }

    /// Returns the text for the given stream.
    pub fn get(&self, stream: CaptureStream) -> &str {
        match stream {
            CaptureStream::Stdout => &self.stdout,
            CaptureStream::Stderr => &self.stderr,
        }
    }

    /// Extracts test records from this capture. See [`scan_output`].
    pub fn scan(&self) -> Vec<TestRecord> {
        scan_output(&self.stdout, &self.stderr)
    }
}

fn read_capture(stream: CaptureStream, path: &Utf8Path) -> Result<String, ReadCaptureError> {
    let bytes = std::fs::read(path).map_err(|err| ReadCaptureError::new(stream, path, err))?;
    debug!("read {} bytes of captured {stream} from `{path}`", bytes.len());

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(
                "captured {stream} at `{path}` is not valid UTF-8 \
                 (first invalid byte at offset {}), replacing invalid sequences",
                err.utf8_error().valid_up_to(),
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}
