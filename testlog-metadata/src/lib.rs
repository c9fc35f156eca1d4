// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Structured access to test outcomes extracted by `testlog`.
//!
//! This crate contains the data model shared by the log classifier and by consumers of the JSON
//! document it exports:
//!
//! * [`Outcome`] and [`TestRecord`] describe a single test result as discovered in a log.
//! * [`TestReport`] is the deduplicated document written to disk.
//! * [`TestlogExitCode`] documents the exit codes of the `testlog` binary.

mod errors;
mod exit_codes;
mod outcome;
mod report;
mod serialize;

pub use errors::*;
pub use exit_codes::*;
pub use outcome::*;
pub use report::*;
pub use serialize::*;
