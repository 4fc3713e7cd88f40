//! @ai:module:intent Define the 4GL dialect's comment syntax and keyword matching
//! @ai:module:layer domain
//! @ai:module:public_api CommentStyle, COMMENT_STYLE, is_class_file, Keyword
//! @ai:module:stateless true
//!
//! Keyword matching is ASCII case-insensitive with ASCII word boundaries:
//! a word character is `[0-9A-Za-z_]`, anything else (including every
//! non-ASCII byte) is a boundary.

use std::path::Path;

/// @ai:intent Comment tokens of the dialect
#[derive(Debug, Clone, Copy)]
pub struct CommentStyle {
    pub single_line: &'static str,
    pub block_start: &'static str,
    pub block_end: &'static str,
}

pub const COMMENT_STYLE: CommentStyle = CommentStyle {
    single_line: "//",
    block_start: "/*",
    block_end: "*/",
};

/// File extension of class files, compared case-insensitively.
pub const CLASS_FILE_EXTENSION: &str = ".cls";

/// @ai:intent Check if a file should be scanned based on its name
/// @ai:example ("src/Customer.cls") -> true
/// @ai:example ("src/CUSTOMER.CLS") -> true
/// @ai:example ("src/customer.p") -> false
/// @ai:effects pure
pub fn is_class_file(path: &Path) -> bool {
    path.to_string_lossy()
        .to_ascii_lowercase()
        .ends_with(CLASS_FILE_EXTENSION)
}

/// @ai:intent Declaration keywords recognized by the classifier and extractors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Class,
    Method,
    Define,
    Property,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Class => "class",
            Keyword::Method => "method",
            Keyword::Define => "define",
            Keyword::Property => "property",
        }
    }

    /// @ai:intent Find occurrences of the keyword with a word boundary before them
    /// @ai:post yielded offsets are ascending byte offsets >= from
    /// @ai:effects pure
    pub fn occurrences<'a>(&self, text: &'a str, from: usize) -> impl Iterator<Item = usize> + 'a {
        let word = self.as_str().as_bytes();
        let bytes = text.as_bytes();
        let last = bytes.len().saturating_sub(word.len() - 1);
        (from..last).filter(move |&i| {
            bytes[i..i + word.len()].eq_ignore_ascii_case(word) && !is_word_at(bytes, i.wrapping_sub(1))
        })
    }

    /// @ai:intent Find the keyword followed by at least one whitespace character
    /// @ai:post result is the offset just past the keyword
    /// @ai:effects pure
    pub fn find_followed_by_space(&self, text: &str, from: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let len = self.as_str().len();
        self.occurrences(text, from)
            .map(|i| i + len)
            .find(|&end| bytes.get(end).is_some_and(|&b| is_space(b)))
    }

    /// @ai:intent Find the keyword as a whole word (boundaries on both sides)
    /// @ai:post result is the offset just past the keyword
    /// @ai:effects pure
    pub fn find_whole_word(&self, text: &str, from: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let len = self.as_str().len();
        self.occurrences(text, from)
            .map(|i| i + len)
            .find(|&end| !is_word_at(bytes, end))
    }
}

/// @ai:intent Check for an identifier character
pub fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Out-of-range offsets count as non-word, so the text edges are boundaries.
pub fn is_word_at(bytes: &[u8], i: usize) -> bool {
    bytes.get(i).is_some_and(|&b| is_word(b))
}

/// @ai:intent Whitespace as the keyword patterns understand it
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

/// @ai:intent Check for a word boundary between offsets i-1 and i
pub fn is_boundary(bytes: &[u8], i: usize) -> bool {
    is_word_at(bytes, i.wrapping_sub(1)) != is_word_at(bytes, i)
}

/// @ai:intent Length of the run of bytes matching a predicate starting at offset
pub fn run_length(bytes: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes
        .get(start..)
        .map(|rest| rest.iter().take_while(|&&b| pred(b)).count())
        .unwrap_or(0)
}
