// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{AsciiPrettyFormatter, Outcome, TestRecord};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io;

/// The JSON document exported by `testlog`.
///
/// Serialized as:
///
/// ```json
/// {
///   "tests": [
///     {
///       "name": "tests/test_math.py::test_add",
///       "status": "PASSED"
///     }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TestReport {
    /// One entry per unique test name.
    pub tests: Vec<TestReportEntry>,
}

/// A single entry in a [`TestReport`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TestReportEntry {
    /// The name of the test.
    pub name: String,

    /// The outcome of the test.
    pub status: Outcome,
}

impl TestReport {
    /// Builds a report out of records in discovery order, deduplicating by name.
    ///
    /// If a name is seen more than once, the last status wins, but the entry keeps the position
    /// at which the name was first seen.
    pub fn from_records(records: impl IntoIterator<Item = TestRecord>) -> Self {
        let mut unique: IndexMap<String, Outcome> = IndexMap::new();
        for record in records {
            let (name, status) = record.into_parts();
            // IndexMap::insert replaces the value in place for existing keys.
            unique.insert(name, status);
        }

        let tests = unique
            .into_iter()
            .map(|(name, status)| TestReportEntry { name, status })
            .collect();
        Self { tests }
    }

    /// Returns the number of unique tests in the report.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Returns true if no tests were found.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Returns the number of tests with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.tests
            .iter()
            .filter(|entry| entry.status == outcome)
            .count()
    }

    /// Writes the report as pretty-printed JSON.
    ///
    /// The output uses two-space indentation, escapes every non-ASCII character, and has no
    /// trailing newline.
    pub fn write_json(&self, writer: impl io::Write) -> serde_json::Result<()> {
        let mut serializer =
            serde_json::Serializer::with_formatter(writer, AsciiPrettyFormatter::new());
        self.serialize(&mut serializer)
    }

    /// Serializes the report to a string, in the same format as [`Self::write_json`].
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let mut buf = Vec::with_capacity(128);
        self.write_json(&mut buf)?;
        // The formatter only ever emits ASCII.
        Ok(String::from_utf8(buf).expect("JSON output is valid ASCII"))
    }
}
