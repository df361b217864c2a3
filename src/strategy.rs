//! Prefix comparison strategies under test.
//!
//! Every strategy answers the same question, "does `subject` start with
//! `prefix`?", through a different string primitive. The set is fixed and
//! registered in [`Strategy::ALL`], the order the suite driver runs them in.
//!
//! Characters are Unicode scalar values throughout, so every strategy agrees
//! with [`reference`] on non-ASCII input as well.
//!
//! # Examples
//!
//! ```
//! use prefix_bench::strategy::Strategy;
//!
//! for strategy in Strategy::ALL {
//!     assert!(strategy.matches("héllo", "hé"));
//!     assert!(!strategy.matches("abc", "abcd"));
//! }
//! ```

use std::fmt;

/// Function shape shared by every strategy: `(subject, prefix) -> matched`.
pub type PrefixFn = fn(&str, &str) -> bool;

/// A prefix comparison algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Truncate the subject to the prefix's character count and compare.
    Substring,
    /// Search for the prefix and check the match starts at offset 0.
    IndexOf,
    /// `str::starts_with`, the reference predicate itself.
    StartsWith,
    /// Truncate the subject with a half-open byte range and compare.
    Slice,
    /// Truncate the subject with a `(start, length)` primitive and compare.
    Substr,
    /// Scan both strings comparing numeric code points.
    CharCodeAt,
    /// Scan both strings comparing one-character substrings per index.
    BracketIndex,
}

impl Strategy {
    /// All strategies, in run order.
    pub const ALL: [Strategy; 7] = [
        Self::Substring,
        Self::IndexOf,
        Self::StartsWith,
        Self::Slice,
        Self::Substr,
        Self::CharCodeAt,
        Self::BracketIndex,
    ];

    /// Name printed in the report.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::IndexOf => "indexOf",
            Self::StartsWith => "startsWith",
            Self::Slice => "slice",
            Self::Substr => "substr",
            Self::CharCodeAt => "charCodeAt",
            Self::BracketIndex => "[index]",
        }
    }

    /// Looks a strategy up by its report name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|strategy| strategy.name() == name)
    }

    /// The comparison routine as a plain function pointer.
    #[must_use]
    pub const fn as_fn(self) -> PrefixFn {
        match self {
            Self::Substring => starts_with_using_substring,
            Self::IndexOf => starts_with_using_index_of,
            Self::StartsWith => reference,
            Self::Slice => starts_with_using_slice,
            Self::Substr => starts_with_using_substr,
            Self::CharCodeAt => starts_with_using_char_code_at,
            Self::BracketIndex => starts_with_using_bracket_index,
        }
    }

    /// Runs the strategy on one pair.
    #[inline]
    #[must_use]
    pub fn matches(self, subject: &str, prefix: &str) -> bool {
        (self.as_fn())(subject, prefix)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The trusted predicate every strategy is validated against.
#[inline]
#[must_use]
pub fn reference(subject: &str, prefix: &str) -> bool {
    subject.starts_with(prefix)
}

/// Byte offset of the character at `index`, or `s.len()` past the end.
fn char_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(offset, _)| offset)
}

/// Characters `start..end`, with the bounds swapped when reversed and clamped
/// to the string.
fn substring(s: &str, start: usize, end: usize) -> &str {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    let from = char_offset(s, start);
    let to = char_offset(s, end);
    &s[from..to]
}

/// Up to `length` characters from `start`. A negative `start` counts from
/// the end of the string and is clamped at 0.
fn substr(s: &str, start: isize, length: usize) -> &str {
    let count = s.chars().count();
    let start = if start < 0 {
        count.saturating_sub(start.unsigned_abs())
    } else {
        start.unsigned_abs().min(count)
    };
    let end = start.saturating_add(length).min(count);
    substring(s, start, end)
}

/// Bytes `start..end` clamped to the string; empty when either bound splits a
/// character.
fn slice(s: &str, start: usize, end: usize) -> &str {
    let end = end.min(s.len());
    s.get(start.min(end)..end).unwrap_or("")
}

/// Each character of `s` as a one-character string, in order.
fn char_strs(s: &str) -> impl Iterator<Item = &str> {
    s.char_indices()
        .map(move |(offset, ch)| &s[offset..offset + ch.len_utf8()])
}

fn starts_with_using_substring(subject: &str, prefix: &str) -> bool {
    substring(subject, 0, prefix.chars().count()) == prefix
}

fn starts_with_using_substr(subject: &str, prefix: &str) -> bool {
    substr(subject, 0, prefix.chars().count()) == prefix
}

fn starts_with_using_slice(subject: &str, prefix: &str) -> bool {
    slice(subject, 0, prefix.len()) == prefix
}

fn starts_with_using_index_of(subject: &str, prefix: &str) -> bool {
    subject.find(prefix) == Some(0)
}

fn starts_with_using_char_code_at(subject: &str, prefix: &str) -> bool {
    if prefix.chars().count() > subject.chars().count() {
        return false;
    }

    prefix
        .chars()
        .map(u32::from)
        .zip(subject.chars().map(u32::from))
        .all(|(expected, actual)| expected == actual)
}

fn starts_with_using_bracket_index(subject: &str, prefix: &str) -> bool {
    let length = prefix.chars().count();

    if length > subject.chars().count() {
        return false;
    }

    char_strs(prefix)
        .zip(char_strs(subject))
        .all(|(expected, actual)| expected == actual)
}
