//! @ai:module:intent Define data structures for extracted 4GL annotations
//! @ai:module:layer domain
//! @ai:module:public_api Attribute, Annotation, ConstructKind, AnnotationIndex
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// @ai:intent A single name/value pair from an annotation's attribute list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// @ai:intent The kind of declaration an annotation decorates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConstructKind {
    Class,
    Method,
    Property,
    Free,
}

/// @ai:intent Represents a single parsed annotation and what it is attached to
/// @ai:invariant name is non-empty
/// @ai:invariant construct_line is Some iff construct_kind != Free
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub file: String,
    pub class_name: String,
    pub construct_kind: ConstructKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construct_name: Option<String>,
    pub annotation_line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construct_line: Option<usize>,
}

impl Annotation {
    /// @ai:intent Look up an attribute value by name (first match)
    /// @ai:effects pure
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// @ai:intent Check whether the annotation stands alone
    pub fn is_free(&self) -> bool {
        self.construct_kind == ConstructKind::Free
    }
}

/// @ai:intent Scan result: annotations grouped by name, keys sorted
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AnnotationIndex {
    pub annotations: BTreeMap<String, Vec<Annotation>>,
}

impl AnnotationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Append an annotation to the group for its name
    /// @ai:post insertion order within the group is preserved
    pub fn add(&mut self, annotation: Annotation) {
        self.annotations
            .entry(annotation.name.clone())
            .or_default()
            .push(annotation);
    }

    /// @ai:intent Total number of annotations across all groups
    /// @ai:effects pure
    pub fn total(&self) -> usize {
        self.annotations.values().map(Vec::len).sum()
    }

    /// @ai:intent All annotations recorded under one name
    pub fn get(&self, name: &str) -> &[Annotation] {
        self.annotations
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

impl Extend<Annotation> for AnnotationIndex {
    fn extend<I: IntoIterator<Item = Annotation>>(&mut self, iter: I) {
        for annotation in iter {
            self.add(annotation);
        }
    }
}
