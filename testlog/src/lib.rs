// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns the console output of a test run into a JSON report of per-test outcomes.
//!
//! `testlog` reads the captured standard output and standard error of a jest- or pytest-style
//! test run, picks out the lines that report a test result, and writes one JSON entry per test.
//!
//! ```text
//! testlog <STDOUT_FILE> <STDERR_FILE> <OUTPUT_JSON>
//! ```
//!
//! The parsing itself lives in the `testlog-parser` crate; this crate is the command-line front
//! end.

#![warn(missing_docs)]

mod dispatch;
mod errors;
mod output;

#[doc(hidden)]
pub use dispatch::*;
#[doc(hidden)]
pub use errors::*;
#[doc(hidden)]
pub use output::{COLOR_ENV, Color, LOG_ENV, OutputContext, StderrStyles};
