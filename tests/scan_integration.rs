//! Integration tests for scanning the testdata tree end to end.
//!
//! These tests run the directory scanner against the fixtures under
//! `testdata/` and check the grouped annotations and their JSON form.

use std::path::PathBuf;

use annotator_parser::output::{render, write_output, OutputFormat, OutputTarget};
use annotator_parser::{scan_directory, Annotation, AnnotationIndex, Attribute, ConstructKind};
use pretty_assertions::assert_eq;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn scan() -> AnnotationIndex {
    scan_directory(&testdata_path()).expect("testdata should scan")
}

fn single<'a>(index: &'a AnnotationIndex, name: &str) -> &'a Annotation {
    let group = index.get(name);
    assert_eq!(group.len(), 1, "expected exactly one @{}", name);
    &group[0]
}

#[test]
fn test_scan_collects_all_groups() {
    let index = scan();

    let names: Vec<&str> = index.annotations.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "Column",
            "Deprecated",
            "Entity",
            "Generated",
            "Route",
            "Serializable",
            "Service",
            "Validate",
        ]
    );
    assert_eq!(index.total(), 10);
}

#[test]
fn test_non_class_files_are_ignored() {
    let index = scan();
    assert!(index.get("NotScanned").is_empty());
}

#[test]
fn test_class_annotations() {
    let index = scan();

    let entity = single(&index, "Entity");
    assert_eq!(entity.file, "app/model/Customer.cls");
    assert_eq!(entity.class_name, "app.model.Customer");
    assert_eq!(entity.construct_kind, ConstructKind::Class);
    assert_eq!(entity.annotation_line, 7);
    assert_eq!(entity.construct_line, Some(9));
    assert_eq!(
        entity.attributes,
        vec![
            Attribute::new("table", "customer"),
            Attribute::new("schema", "sports2000"),
        ]
    );

    // Back-to-back annotations share the construct.
    let serializable = single(&index, "Serializable");
    assert_eq!(serializable.construct_line, entity.construct_line);
}

#[test]
fn test_property_annotations_keep_file_order() {
    let index = scan();

    let columns: Vec<(Option<&str>, usize, Option<usize>)> = index
        .get("Column")
        .iter()
        .map(|a| (a.construct_name.as_deref(), a.annotation_line, a.construct_line))
        .collect();

    assert_eq!(
        columns,
        vec![(Some("CustNum"), 11, Some(12)), (Some("Name"), 16, Some(17))]
    );
    assert!(index
        .get("Column")
        .iter()
        .all(|a| a.construct_kind == ConstructKind::Property));
}

#[test]
fn test_multiline_method_annotation() {
    let index = scan();

    let validate = single(&index, "Validate");
    assert_eq!(validate.annotation_line, 21);
    assert_eq!(validate.construct_kind, ConstructKind::Method);
    assert_eq!(validate.construct_name.as_deref(), Some("Validate"));
    assert_eq!(validate.construct_line, Some(25));
    assert_eq!(validate.attribute("fields"), Some("Name,CustNum"));
}

#[test]
fn test_routes_skip_commented_annotation() {
    let index = scan();

    let routes: Vec<(&str, Option<&str>, Option<usize>)> = index
        .get("Route")
        .iter()
        .map(|a| {
            (
                a.attribute("path").unwrap_or_default(),
                a.construct_name.as_deref(),
                a.construct_line,
            )
        })
        .collect();

    assert_eq!(
        routes,
        vec![
            ("/orders", Some("ListOrders"), Some(8)),
            ("/orders/{id}", Some("DeleteOrder"), Some(14)),
        ]
    );
}

#[test]
fn test_free_annotations() {
    let index = scan();

    let deprecated = single(&index, "Deprecated");
    assert_eq!(deprecated.construct_kind, ConstructKind::Free);
    assert_eq!(deprecated.construct_line, None);
    assert_eq!(deprecated.class_name, "app.svc.OrderService");

    let generated = single(&index, "Generated");
    assert!(generated.is_free());
    assert_eq!(generated.file, "app/legacy/helpers.CLS");
    assert_eq!(generated.class_name, "app.legacy.helpers.CLS");
}

#[test]
fn test_json_output_file() {
    let index = scan();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("annotations.json");

    let rendered = render(&index, OutputFormat::Json).unwrap();
    write_output(&rendered, &OutputTarget::File(path.clone())).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let deprecated = &json["annotations"]["Deprecated"][0];
    assert_eq!(deprecated["constructKind"], "free");
    assert!(deprecated.get("constructLine").is_none());
    assert!(deprecated.get("constructName").is_none());
    assert_eq!(deprecated["attributes"], serde_json::json!([]));

    let service = &json["annotations"]["Service"][0];
    assert_eq!(service["constructKind"], "class");
    assert_eq!(service["constructLine"], 4);
    assert!(service.get("constructName").is_none());
}
