// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Documented exit codes for `testlog` failures.
///
/// Unexpected failures (panics, errors reported through `color-eyre`) also result in exit code 1.
pub enum TestlogExitCode {}

impl TestlogExitCode {
    /// The logs were read and the report was written.
    pub const OK: i32 = 0;

    /// The command line did not consist of exactly three paths.
    ///
    /// A usage message is printed to standard output in this case.
    pub const USAGE_ERROR: i32 = 1;

    /// Reading one of the captured output files produced an error.
    pub const READ_INPUT_FAILED: i32 = 104;

    /// Writing the JSON report produced an error.
    pub const WRITE_OUTPUT_FAILED: i32 = 110;
}
