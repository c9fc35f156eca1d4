// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splitting captured output into lines.

/// Returns true if `c` ends a line on its own.
///
/// `\r` is handled separately by [`split_lines`], since `\r\n` counts as a single terminator.
fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits `text` into lines, accepting any common line-ending convention.
///
/// Recognized terminators are `\n`, `\r\n`, `\r`, vertical tab, form feed, the ASCII file, group
/// and record separators, NEL, and the Unicode line and paragraph separators. Terminators are not
/// included in the returned lines, and a terminator at the very end of `text` does not produce a
/// trailing empty line.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { remaining: text }
}

/// An iterator over lines, returned by [`split_lines`].
#[derive(Clone, Debug)]
pub struct SplitLines<'a> {
    remaining: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let text = self.remaining;
        for (idx, c) in text.char_indices() {
            if c == '\r' {
                let rest = &text[idx + 1..];
                self.remaining = rest.strip_prefix('\n').unwrap_or(rest);
                return Some(&text[..idx]);
            }
            if is_line_terminator(c) {
                self.remaining = &text[idx + c.len_utf8()..];
                return Some(&text[..idx]);
            }
        }

        self.remaining = "";
        Some(text)
    }
}
