// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line classification rules.
//!
//! Each line of captured output is tested against an ordered list of [`LineRule`]s. The first rule
//! that matches consumes the line; a line that matches no rule is ignored.

use regex::Regex;
use std::sync::LazyLock;
use testlog_metadata::{Outcome, TestRecord};

/// Glyphs that mark a passed test in jest-style output.
pub const PASSED_GLYPHS: [char; 2] = ['\u{2713}', '\u{2714}'];

/// Glyphs that mark a failed test in jest-style output.
pub const FAILED_GLYPHS: [char; 4] = ['x', '\u{d7}', '\u{2715}', '\u{2716}'];

/// Glyphs that mark a skipped test in jest-style output.
pub const SKIPPED_GLYPHS: [char; 4] = ['\u{25cb}', '\u{25cc}', '-', '*'];

/// Builds a regex character class matching exactly the given code points.
fn glyph_class(glyphs: &[char]) -> String {
    let mut class = String::from("[");
    for glyph in glyphs {
        class.push_str(&regex::escape(glyph.encode_utf8(&mut [0; 4])));
    }
    class.push(']');
    class
}

/// Returns true if `c` counts as whitespace in a log line.
///
/// This is Unicode whitespace plus the ASCII unit separator `\x1f`. The other ASCII separators
/// never appear inside a line, since [`split_lines`](crate::lines::split_lines) breaks on them.
pub fn is_log_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\x1f'
}

/// Regex class matching one [`is_log_whitespace`] character.
const SPACE: &str = r"[\s\x1f]";

/// Regex class matching one character that isn't [`is_log_whitespace`].
const NON_SPACE: &str = r"[^\s\x1f]";

/// An optional trailing duration like `(12 ms)` or `(1.2 s)`, which is not part of the test name.
fn duration_suffix() -> String {
    format!(r"(?:{SPACE}+\([0-9.]+{SPACE}*(?:ms|s)\))?{SPACE}*$")
}

static SUITE_BANNER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:PASS|FAIL|SKIP|SKIPPED?){SPACE}+({NON_SPACE}+)")).unwrap()
});
static PASSED_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| marker_regex(&PASSED_GLYPHS, &format!("(.*?){}", duration_suffix())));
static FAILED_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| marker_regex(&FAILED_GLYPHS, &format!("(.*?){}", duration_suffix())));
static SKIPPED_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| marker_regex(&SKIPPED_GLYPHS, "(.*)"));
static STATUS_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({NON_SPACE}+\.py)::({NON_SPACE}+){SPACE}+(PASSED|FAILED|SKIPPED|ERROR|XPASS|XFAIL)"
    ))
    .unwrap()
});

/// Builds a regex for a glyph-prefixed marker line: optional indentation, one glyph, whitespace,
/// then `rest`.
fn marker_regex(glyphs: &[char], rest: &str) -> Regex {
    Regex::new(&format!(r"^{SPACE}*{}{SPACE}+{rest}", glyph_class(glyphs))).unwrap()
}

/// The family of log conventions a rule belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Dialect {
    /// JavaScript test runner output (jest and friends): a `PASS path/to/file.test.ts` banner
    /// followed by glyph-prefixed lines for individual tests.
    Jest,

    /// Python test runner output (pytest `-v` and friends): one `path.py::test STATUS` line per
    /// test.
    Pytest,
}

/// A rule that recognizes one kind of line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineRule {
    /// `PASS <file>`, `FAIL <file>`, `SKIP <file>` or `SKIPPED <file>`: announces the file that
    /// subsequent marker lines belong to.
    SuiteBanner,

    /// `✓ <name> (12 ms)`: a passed test in the current file.
    PassedMarker,

    /// `✕ <name>`: a failed test in the current file.
    FailedMarker,

    /// `○ <name>`: a skipped test in the current file.
    SkippedMarker,

    /// `<path>.py::<test> <STATUS>`: a self-contained result line.
    StatusLine,
}

impl LineRule {
    /// All rules, in the order they're tried.
    pub const ALL: [LineRule; 5] = [
        LineRule::SuiteBanner,
        LineRule::PassedMarker,
        LineRule::FailedMarker,
        LineRule::SkippedMarker,
        LineRule::StatusLine,
    ];

    /// Returns the dialect this rule recognizes.
    pub fn dialect(self) -> Dialect {
        match self {
            Self::SuiteBanner | Self::PassedMarker | Self::FailedMarker | Self::SkippedMarker => {
                Dialect::Jest
            }
            Self::StatusLine => Dialect::Pytest,
        }
    }

    /// Applies this rule to a single line.
    ///
    /// `current_file` is the file announced by the most recent banner, if any. Marker rules never
    /// match without one.
    pub fn apply<'a>(self, line: &'a str, current_file: Option<&str>) -> Option<RuleMatch<'a>> {
        match self {
            Self::SuiteBanner => {
                let captures = SUITE_BANNER_REGEX.captures(line)?;
                Some(RuleMatch::SuiteBanner {
                    suite: captures.get(1)?.as_str(),
                })
            }
            Self::PassedMarker => {
                marker_record(&PASSED_MARKER_REGEX, line, current_file, Outcome::Passed)
            }
            Self::FailedMarker => {
                marker_record(&FAILED_MARKER_REGEX, line, current_file, Outcome::Failed)
            }
            Self::SkippedMarker => {
                marker_record(&SKIPPED_MARKER_REGEX, line, current_file, Outcome::Skipped)
            }
            Self::StatusLine => {
                let captures = STATUS_LINE_REGEX.captures(line)?;
                let status = Outcome::from_status_word(captures.get(3)?.as_str())?;
                let name = format!("{}::{}", captures.get(1)?.as_str(), captures.get(2)?.as_str());
                Some(RuleMatch::Record(TestRecord::new(name, status)))
            }
        }
    }
}

fn marker_record<'a>(
    regex: &Regex,
    line: &str,
    current_file: Option<&str>,
    outcome: Outcome,
) -> Option<RuleMatch<'a>> {
    let captures = regex.captures(line)?;
    let suite = current_file?;
    let test_name = captures.get(1)?.as_str().trim_matches(is_log_whitespace);
    Some(RuleMatch::Record(TestRecord::new(
        format!("{suite}::{test_name}"),
        outcome,
    )))
}

/// The result of a rule matching a line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RuleMatch<'a> {
    /// A new file or suite was announced.
    SuiteBanner {
        /// The announced file or suite.
        suite: &'a str,
    },

    /// A test result was found.
    Record(TestRecord),
}

/// Classifies a line by trying each rule in [`LineRule::ALL`] order.
///
/// Returns the first rule that matched along with its result, or `None` if the line isn't
/// recognized.
pub fn classify_line<'a>(
    line: &'a str,
    current_file: Option<&str>,
) -> Option<(LineRule, RuleMatch<'a>)> {
    LineRule::ALL
        .into_iter()
        .find_map(|rule| rule.apply(line, current_file).map(|m| (rule, m)))
}
