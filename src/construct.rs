//! @ai:module:intent Extract declared names from method and property lines
//! @ai:module:layer domain
//! @ai:module:public_api extract_method_name, extract_property_name
//! @ai:module:depends_on language
//! @ai:module:stateless true

use crate::language::{is_boundary, is_space, is_word, run_length, Keyword};

/// @ai:intent Extract the method name from a METHOD declaration line
/// @ai:example ("METHOD PUBLIC VOID doThing():") -> Some("doThing")
/// @ai:example ("METHOD PUBLIC Progress.Lang.Object Find (id AS INT):") -> Some("Find")
/// @ai:example ("METHOD PUBLIC VOID") -> None
/// @ai:effects pure
pub fn extract_method_name(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    let mut from = 0;

    while let Some(after_method) = Keyword::Method.find_whole_word(line, from) {
        if let Some(name) = (after_method..bytes.len()).find_map(|pos| method_name_at(bytes, pos)) {
            return Some(line[name.0..name.1].to_string());
        }
        from = after_method;
    }

    None
}

/// @ai:intent Match `<return-type> <ws> <name> <ws>* (` starting at pos
/// @ai:post result is the byte range of the name
/// @ai:effects pure
fn method_name_at(bytes: &[u8], pos: usize) -> Option<(usize, usize)> {
    if !is_boundary(bytes, pos) {
        return None;
    }

    // Return type: VOID or a dotted type name.
    let type_len = run_length(bytes, pos, |b| is_word(b) || b == b'.');
    if type_len == 0 {
        return None;
    }

    let gap = run_length(bytes, pos + type_len, is_space);
    if gap == 0 {
        return None;
    }

    let name_start = pos + type_len + gap;
    let name_len = run_length(bytes, name_start, is_word);
    if name_len == 0 {
        return None;
    }

    let name_end = name_start + name_len;
    let paren = name_end + run_length(bytes, name_end, is_space);
    (bytes.get(paren) == Some(&b'(')).then_some((name_start, name_end))
}

/// @ai:intent Extract the property name from a DEFINE ... PROPERTY line
/// @ai:example ("DEFINE PUBLIC PROPERTY CustNum AS INTEGER NO-UNDO") -> Some("CustNum")
/// @ai:example ("DEFINE VARIABLE x AS INTEGER.") -> None
/// @ai:effects pure
pub fn extract_property_name(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    let after_define = Keyword::Define.find_whole_word(line, 0)?;

    Keyword::Property
        .occurrences(line, after_define)
        .find_map(|start| {
            let after_keyword = start + Keyword::Property.as_str().len();
            let gap = run_length(bytes, after_keyword, is_space);
            if gap == 0 {
                return None;
            }
            let name_start = after_keyword + gap;
            let name_len = run_length(bytes, name_start, is_word);
            (name_len > 0).then(|| line[name_start..name_start + name_len].to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_void() {
        assert_eq!(
            extract_method_name("METHOD VOID doThing():"),
            Some("doThing".to_string())
        );
    }

    #[test]
    fn test_method_with_modifiers() {
        assert_eq!(
            extract_method_name("  method public static override logical IsValid(input AS CHARACTER):"),
            Some("IsValid".to_string())
        );
    }

    #[test]
    fn test_method_dotted_return_type() {
        assert_eq!(
            extract_method_name("METHOD PUBLIC Progress.Lang.Object Find (id AS INTEGER):"),
            Some("Find".to_string())
        );
    }

    #[test]
    fn test_method_without_parenthesis() {
        assert_eq!(extract_method_name("METHOD PUBLIC VOID Run"), None);
        assert_eq!(extract_method_name("METHOD PUBLIC VOID"), None);
    }

    #[test]
    fn test_method_keyword_must_be_whole_word() {
        assert_eq!(extract_method_name("METHODS VOID a()"), None);
        assert_eq!(
            extract_method_name("x = METHODS VOID a(). METHOD VOID b()"),
            Some("b".to_string())
        );
    }

    #[test]
    fn test_method_generic_return_type_is_not_recognized() {
        assert_eq!(extract_method_name("METHOD PUBLIC List<Customer> Load():"), None);
    }

    #[test]
    fn test_property_name() {
        assert_eq!(
            extract_property_name("DEFINE PUBLIC PROPERTY CustNum AS INTEGER NO-UNDO"),
            Some("CustNum".to_string())
        );
        assert_eq!(
            extract_property_name("define private static property  Total as decimal get."),
            Some("Total".to_string())
        );
    }

    #[test]
    fn test_property_without_name() {
        assert_eq!(extract_property_name("DEFINE PUBLIC PROPERTY"), None);
        assert_eq!(extract_property_name("DEFINE PUBLIC PROPERTY (x)"), None);
        assert_eq!(extract_property_name("PROPERTY X DEFINE"), None);
    }

    #[test]
    fn test_property_skips_unusable_keyword() {
        assert_eq!(
            extract_property_name("DEFINE PROPERTY: PROPERTY Second AS INT"),
            Some("Second".to_string())
        );
    }
}
