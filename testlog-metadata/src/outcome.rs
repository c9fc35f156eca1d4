// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::OutcomeParseError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The outcome of a single test, as reported by a test runner's console output.
///
/// Serialized as the upper-case wire names `PASSED`, `FAILED`, `SKIPPED` and `ERROR`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(
    any(test, feature = "proptest1"),
    derive(test_strategy::Arbitrary)
)]
pub enum Outcome {
    /// The test passed.
    Passed,

    /// The test failed.
    Failed,

    /// The test was skipped, or was expected to fail and did.
    Skipped,

    /// The test errored out, typically during setup or teardown.
    Error,
}

impl Outcome {
    /// Returns the wire name for this outcome.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Skipped => "SKIPPED",
            Self::Error => "ERROR",
        }
    }

    /// Returns the wire names of all outcomes.
    pub fn variants() -> &'static [&'static str] {
        &["PASSED", "FAILED", "SKIPPED", "ERROR"]
    }

    /// Maps a pytest-style status word to an outcome.
    ///
    /// `XPASS` counts as a pass and `XFAIL` as a skip. Returns `None` for any other word.
    pub fn from_status_word(word: &str) -> Option<Self> {
        match word {
            "PASSED" | "XPASS" => Some(Self::Passed),
            "FAILED" => Some(Self::Failed),
            "SKIPPED" | "XFAIL" => Some(Self::Skipped),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = OutcomeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASSED" => Ok(Self::Passed),
            "FAILED" => Ok(Self::Failed),
            "SKIPPED" => Ok(Self::Skipped),
            "ERROR" => Ok(Self::Error),
            other => Err(OutcomeParseError::new(other)),
        }
    }
}

/// A single test result discovered in a log: a test name paired with its outcome.
///
/// Names are conventionally of the form `<file-or-suite>::<test-name>`. Two records with the same
/// name describe the same test; see [`TestReport::from_records`](crate::TestReport::from_records)
/// for how repeats are resolved.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TestRecord {
    name: String,
    status: Outcome,
}

impl TestRecord {
    /// Creates a new record.
    pub fn new(name: impl Into<String>, status: Outcome) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Returns the name of the test.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the outcome of the test.
    pub fn status(&self) -> Outcome {
        self.status
    }

    /// Splits this record into its name and outcome.
    pub fn into_parts(self) -> (String, Outcome) {
        (self.name, self.status)
    }
}

impl fmt::Display for TestRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.status)
    }
}
