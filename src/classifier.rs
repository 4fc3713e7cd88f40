//! @ai:module:intent Classify every line of a class file into a lexical category
//! @ai:module:layer domain
//! @ai:module:public_api LineCategory, ScanState, classify_lines, split_lines
//! @ai:module:depends_on language
//! @ai:module:stateless true

use crate::language::{Keyword, COMMENT_STYLE};

/// @ai:intent Lexical category of one source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCategory {
    Comment,
    Annotation,
    Blank,
    Class,
    Method,
    Property,
    Code,
}

impl LineCategory {
    /// @ai:intent Categories the attachment search looks past
    pub fn is_transparent(&self) -> bool {
        matches!(
            self,
            LineCategory::Blank | LineCategory::Comment | LineCategory::Annotation
        )
    }
}

/// @ai:intent Classifier state carried from one line to the next
///
/// A block comment may open in the middle of a multi-line annotation;
/// the annotation continues once the comment closes, so the block
/// comment state remembers whether it interrupted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Code,
    Annotation,
    BlockComment { in_annotation: bool },
}

impl ScanState {
    fn in_annotation(self) -> bool {
        match self {
            ScanState::Code => false,
            ScanState::Annotation => true,
            ScanState::BlockComment { in_annotation } => in_annotation,
        }
    }

    fn with_annotation(in_annotation: bool) -> Self {
        if in_annotation {
            ScanState::Annotation
        } else {
            ScanState::Code
        }
    }

    /// @ai:intent Classify one line and compute the state for the next one
    /// @ai:pre line has its terminator removed
    /// @ai:effects pure
    pub fn step(self, line: &str) -> (LineCategory, ScanState) {
        let style = COMMENT_STYLE;
        let continuing = self.in_annotation();

        if let ScanState::BlockComment { in_annotation } = self {
            let next = if line.contains(style.block_end) {
                ScanState::with_annotation(in_annotation)
            } else {
                self
            };
            return (LineCategory::Comment, next);
        }

        if let Some(open) = line.find(style.block_start) {
            let next = if line[open..].contains(style.block_end) {
                self
            } else {
                ScanState::BlockComment {
                    in_annotation: continuing,
                }
            };
            return (LineCategory::Comment, next);
        }

        let trimmed = line.trim();

        if trimmed.starts_with(style.single_line) {
            return (LineCategory::Comment, self);
        }

        // A terminated annotation line does not reset a pending continuation.
        if trimmed.starts_with('@') {
            let next = if trimmed.contains('.') {
                self
            } else {
                ScanState::Annotation
            };
            return (LineCategory::Annotation, next);
        }

        if continuing {
            let next = if trimmed.contains('.') {
                ScanState::Code
            } else {
                self
            };
            return (LineCategory::Annotation, next);
        }

        (classify_statement(trimmed), self)
    }
}

/// @ai:intent Categorize a non-comment, non-annotation line by its keywords
/// @ai:pre trimmed has no surrounding whitespace
/// @ai:effects pure
fn classify_statement(trimmed: &str) -> LineCategory {
    if trimmed.is_empty() {
        LineCategory::Blank
    } else if Keyword::Class.find_followed_by_space(trimmed, 0).is_some() {
        LineCategory::Class
    } else if Keyword::Method.find_followed_by_space(trimmed, 0).is_some() {
        LineCategory::Method
    } else if is_property_declaration(trimmed) {
        LineCategory::Property
    } else {
        LineCategory::Code
    }
}

/// @ai:intent Detect `DEFINE <ws> ... PROPERTY <ws>` on a line
/// @ai:effects pure
fn is_property_declaration(text: &str) -> bool {
    // The earliest DEFINE leaves the widest range for PROPERTY.
    Keyword::Define
        .find_followed_by_space(text, 0)
        .and_then(|after_define| Keyword::Property.find_followed_by_space(text, after_define + 1))
        .is_some()
}

/// @ai:intent Split file content into lines the way the scanner numbers them
/// @ai:post a trailing newline yields a final empty line
/// @ai:effects pure
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// @ai:intent Classify every line in one forward pass
/// @ai:post result.len() == lines.len()
/// @ai:effects pure
pub fn classify_lines<S: AsRef<str>>(lines: &[S]) -> Vec<LineCategory> {
    let mut state = ScanState::default();
    lines
        .iter()
        .map(|line| {
            let (category, next) = state.step(line.as_ref());
            state = next;
            category
        })
        .collect()
}
