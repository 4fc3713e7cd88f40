//! @ai:module:intent Render the annotation index as JSON and write it out
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, OutputTarget, render, write_output, format_elapsed
//! @ai:module:depends_on annotation, error
//! @ai:module:stateless true

use crate::annotation::AnnotationIndex;
use crate::error::Result;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// @ai:intent JSON layout options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    JsonPretty,
}

impl OutputFormat {
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            OutputFormat::Json
        } else {
            OutputFormat::JsonPretty
        }
    }
}

/// @ai:intent Where the rendered JSON goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// @ai:intent Render the index as JSON
/// @ai:effects pure
pub fn render(index: &AnnotationIndex, format: OutputFormat) -> Result<String> {
    let json = match format {
        OutputFormat::Json => serde_json::to_string(index)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(index)?,
    };
    Ok(json)
}

/// @ai:intent Write rendered JSON to its target
/// @ai:post stdout output ends with a newline, file output is written verbatim
/// @ai:effects fs:write, io
pub fn write_output(data: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", data)?;
            stdout.flush()?;
        }
        OutputTarget::File(path) => std::fs::write(path, data)?,
    }
    Ok(())
}

/// @ai:intent Human-friendly elapsed time for the final log line
/// @ai:example (1234ms) -> "1234ms"
/// @ai:example (7.3s) -> "7.3s"
/// @ai:effects pure
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed.as_secs_f64() < 5.0 {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.1}s", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Annotation, Attribute, ConstructKind};
    use tempfile::TempDir;

    fn index() -> AnnotationIndex {
        let mut index = AnnotationIndex::new();
        index.add(Annotation {
            name: "Route".to_string(),
            attributes: vec![Attribute::new("verb", "GET")],
            file: "api/Orders.cls".to_string(),
            class_name: "api.Orders".to_string(),
            construct_kind: ConstructKind::Method,
            construct_name: Some("List".to_string()),
            annotation_line: 3,
            construct_line: Some(4),
        });
        index
    }

    #[test]
    fn test_compact_json_shape() {
        let json = render(&index(), OutputFormat::Json).unwrap();
        assert_eq!(
            json,
            r#"{"annotations":{"Route":[{"name":"Route","attributes":[{"name":"verb","value":"GET"}],"file":"api/Orders.cls","className":"api.Orders","constructKind":"method","constructName":"List","annotationLine":3,"constructLine":4}]}}"#
        );
    }

    #[test]
    fn test_pretty_json_uses_two_spaces() {
        let json = render(&index(), OutputFormat::JsonPretty).unwrap();
        assert!(json.starts_with("{\n  \"annotations\": {\n    \"Route\": ["));
    }

    #[test]
    fn test_empty_index() {
        assert!(AnnotationIndex::new().is_empty());
        let json = render(&AnnotationIndex::new(), OutputFormat::Json).unwrap();
        assert_eq!(json, r#"{"annotations":{}}"#);
    }

    #[test]
    fn test_write_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("annotations.json");
        write_output("{}", &OutputTarget::File(path.clone())).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "1234ms");
        assert_eq!(format_elapsed(Duration::from_millis(4999)), "4999ms");
        assert_eq!(format_elapsed(Duration::from_millis(7300)), "7.3s");
    }
}
