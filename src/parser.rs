//! @ai:module:intent Parse annotation text into a name and attribute list
//! @ai:module:layer domain
//! @ai:module:public_api ParsedAnnotation, parse_annotation_text, parse_attributes
//! @ai:module:depends_on annotation
//! @ai:module:stateless true

use crate::annotation::Attribute;

/// @ai:intent Name and attributes of one annotation span
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedAnnotation {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

/// @ai:intent Parse the concatenated text of an annotation span
/// @ai:example ("@Foo(bar=\"baz\", n=1).") -> Foo [bar=baz, n=1]
/// @ai:example ("@Deprecated.") -> Deprecated []
/// @ai:example ("@().") -> "" []
/// @ai:effects pure
pub fn parse_annotation_text(text: &str) -> ParsedAnnotation {
    let text = text.trim();
    let text = text.strip_prefix('@').unwrap_or(text);
    let text = text.strip_suffix('.').unwrap_or(text);

    let Some(paren) = text.find('(') else {
        return ParsedAnnotation {
            name: text.trim().to_string(),
            attributes: Vec::new(),
        };
    };

    let name = text[..paren].trim().to_string();
    let mut attr_text = &text[paren + 1..];
    if let Some(close) = attr_text.rfind(')') {
        attr_text = &attr_text[..close];
    }

    ParsedAnnotation {
        name,
        attributes: parse_attributes(attr_text),
    }
}

/// @ai:intent Parse a comma-separated `name=value` list
/// @ai:pre text is the content between the annotation's parentheses
/// @ai:post segments without `=` are dropped
/// @ai:effects pure
pub fn parse_attributes(text: &str) -> Vec<Attribute> {
    split_outside_quotes(text, ',')
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (name, value) = part.split_once('=')?;
            Some(Attribute::new(
                name.trim(),
                value.trim().trim_matches('"'),
            ))
        })
        .collect()
}

/// @ai:intent Split on a separator that is not inside double quotes
/// @ai:post quote characters are kept in the segments
/// @ai:effects pure
fn split_outside_quotes(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == sep && !in_quotes {
            parts.push(&text[start..idx]);
            start = idx + ch.len_utf8();
        }
    }

    if start < text.len() {
        parts.push(&text[start..]);
    }

    parts
}
