// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Writing reports to disk.

use crate::errors::WriteReportError;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use camino::Utf8Path;
use std::io::Write;
use testlog_metadata::TestReport;
use tracing::debug;

/// Writes `report` as JSON to `path`.
///
/// The report is serialized up front and written atomically using a temporary file and rename, so
/// a failure never leaves a partially written report behind. An existing file at `path` is
/// replaced.
pub fn write_report(report: &TestReport, path: &Utf8Path) -> Result<(), WriteReportError> {
    let json = report
        .to_json_string()
        .map_err(|err| WriteReportError::Serialize {
            path: path.to_owned(),
            err,
        })?;

    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|file| file.write_all(json.as_bytes()))
        .map_err(|err| WriteReportError::Io {
            path: path.to_owned(),
            err: match err {
                atomicwrites::Error::Internal(err) | atomicwrites::Error::User(err) => err,
            },
        })?;

    debug!(
        "wrote {} tests ({} bytes) to `{path}`",
        report.len(),
        json.len()
    );
    Ok(())
}
