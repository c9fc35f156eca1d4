// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Core functionality for `testlog`: extracting per-test outcomes from the console output of test
//! runners.
//!
//! The basic flow is:
//!
//! 1. Read the captured stdout and stderr of a test run with [`capture::CapturedOutput::read`].
//! 2. Scan them with [`scan::scan_output`], which classifies each line with the rules in
//!    [`classify`] and returns [`TestRecord`](testlog_metadata::TestRecord)s in discovery order.
//! 3. Deduplicate with [`TestReport::from_records`](testlog_metadata::TestReport::from_records)
//!    and write the result with [`export::write_report`].
//!
//! Two log dialects are recognized: jest-style output (a `PASS <file>` banner followed by
//! `✓ test name` lines) and pytest-style output (`path.py::test STATUS` lines).

pub mod capture;
pub mod classify;
pub mod errors;
pub mod export;
pub mod lines;
pub mod scan;
