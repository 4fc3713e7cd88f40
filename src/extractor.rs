//! @ai:module:intent Attach parsed annotations to the constructs that follow them
//! @ai:module:layer application
//! @ai:module:public_api parse_source, extract_annotations, extract_class_name, remove_comments, extract_file
//! @ai:module:depends_on annotation, classifier, parser, construct, error
//! @ai:module:stateless true
//!
//! `parse_source` is the pure per-file entry point: text in, annotations
//! out. `extract_file` adds the file read around it.

use crate::annotation::{Annotation, ConstructKind};
use crate::classifier::{classify_lines, split_lines, LineCategory};
use crate::construct::{extract_method_name, extract_property_name};
use crate::error::{Error, Result};
use crate::language::CLASS_FILE_EXTENSION;
use crate::parser::parse_annotation_text;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid block comment pattern"));

static CLASS_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\bCLASS\s+([\w.]+)").expect("valid class declaration pattern")
});

/// @ai:intent Extract all annotations from one file's text
/// @ai:pre relative_path uses forward slashes
/// @ai:post every record has a non-empty name
/// @ai:effects pure
pub fn parse_source(content: &str, relative_path: &str) -> Vec<Annotation> {
    let class_name = extract_class_name(content, relative_path);
    extract_annotations(content, relative_path, &class_name)
}

/// @ai:intent Read a class file and extract its annotations
/// @ai:pre path is inside base_dir
/// @ai:effects fs:read
pub fn extract_file(path: &Path, base_dir: &Path) -> Result<Vec<Annotation>> {
    let bytes = std::fs::read(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(parse_source(&content, &relative_path(path, base_dir)))
}

/// @ai:intent Path of a file relative to the scan root, with forward slashes
/// @ai:effects pure
pub fn relative_path(path: &Path, base_dir: &Path) -> String {
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// @ai:intent Find the declared class name, falling back to the file path
/// @ai:example ("CLASS app.Customer:", "x/Other.cls") -> "app.Customer"
/// @ai:example ("", "app/util/Strings.cls") -> "app.util.Strings"
/// @ai:effects pure
pub fn extract_class_name(content: &str, relative_path: &str) -> String {
    let normalized = remove_comments(content);
    if let Some(captures) = CLASS_DECLARATION.captures(&normalized) {
        return captures[1].to_string();
    }

    class_name_from_path(relative_path)
}

fn class_name_from_path(relative_path: &str) -> String {
    let stem = relative_path
        .strip_suffix(CLASS_FILE_EXTENSION)
        .unwrap_or(relative_path);

    stem.replace(['\\', '/'], ".")
}

/// @ai:intent Strip block comments and line comments from source text
/// @ai:post line comments are cut at the first `//` of each line
/// @ai:effects pure
pub fn remove_comments(content: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(content, "");
    without_blocks
        .split('\n')
        .map(|line| line.find("//").map_or(line, |idx| &line[..idx]))
        .collect::<Vec<_>>()
        .join("\n")
}

/// @ai:intent Find every annotation span and resolve what it decorates
/// @ai:post records are ordered by the first line of their span
/// @ai:effects pure
pub fn extract_annotations(content: &str, file: &str, class_name: &str) -> Vec<Annotation> {
    let lines = split_lines(content);
    let categories = classify_lines(&lines);
    let mut processed = vec![false; lines.len()];
    let mut annotations = Vec::new();

    for start in 0..lines.len() {
        if processed[start] || categories[start] != LineCategory::Annotation {
            continue;
        }

        let (text, end) = collect_span(&lines, start);
        processed[start..=end].fill(true);

        let parsed = parse_annotation_text(&text);
        if parsed.name.is_empty() {
            continue;
        }

        let (construct_kind, construct_name, construct_line) =
            find_construct(&lines, &categories, end + 1);

        annotations.push(Annotation {
            name: parsed.name,
            attributes: parsed.attributes,
            file: file.to_string(),
            class_name: class_name.to_string(),
            construct_kind,
            construct_name,
            annotation_line: start + 1,
            construct_line,
        });
    }

    annotations
}

/// @ai:intent Join span lines up to the first line containing a period
/// @ai:post end is the inclusive last line; the last line of the file when unterminated
/// @ai:effects pure
fn collect_span(lines: &[&str], start: usize) -> (String, usize) {
    let mut text = String::new();
    // Any period ends the span, including one inside a quoted value.
    for (idx, line) in lines.iter().enumerate().skip(start) {
        text.push_str(line);
        if line.contains('.') {
            return (text, idx);
        }
    }
    (text, lines.len() - 1)
}

/// @ai:intent Resolve the construct following an annotation span
/// @ai:post Free constructs carry neither name nor line
/// @ai:effects pure
fn find_construct(
    lines: &[&str],
    categories: &[LineCategory],
    from: usize,
) -> (ConstructKind, Option<String>, Option<usize>) {
    let found = categories
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, category)| !category.is_transparent());

    match found {
        Some((idx, LineCategory::Class)) => (ConstructKind::Class, None, Some(idx + 1)),
        Some((idx, LineCategory::Method)) => (
            ConstructKind::Method,
            extract_method_name(lines[idx]),
            Some(idx + 1),
        ),
        Some((idx, LineCategory::Property)) => (
            ConstructKind::Property,
            extract_property_name(lines[idx]),
            Some(idx + 1),
        ),
        _ => (ConstructKind::Free, None, None),
    }
}
