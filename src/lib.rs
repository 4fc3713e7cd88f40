//! @ai:module:intent Annotation extractor library for OpenEdge 4GL class files
//! @ai:module:layer infrastructure
//! @ai:module:public_api annotation, classifier, config, construct, extractor, language, logging, output, parser, scanner, error
//! @ai:module:stateless true
//!
//! # Annotator
//!
//! Finds `@Name(attr=value, ...).` annotations in `.cls` files and works out
//! which class, method or property declaration each one decorates.
//!
//! ## Example
//!
//! ```rust,no_run
//! use annotator_parser::{extractor, output, scanner};
//! use std::path::Path;
//!
//! // A single file's text
//! let annotations = extractor::parse_source("@Entity.\nCLASS app.Customer:", "app/Customer.cls");
//! assert_eq!(annotations[0].name, "Entity");
//!
//! // A whole source tree
//! let index = scanner::scan_directory(Path::new("src")).unwrap();
//! println!("{}", output::render(&index, output::OutputFormat::JsonPretty).unwrap());
//! ```

pub mod annotation;
pub mod classifier;
pub mod config;
pub mod construct;
pub mod error;
pub mod extractor;
pub mod language;
pub mod logging;
pub mod output;
pub mod parser;
pub mod scanner;

pub use annotation::{Annotation, AnnotationIndex, Attribute, ConstructKind};
pub use classifier::{classify_lines, split_lines, LineCategory};
pub use config::ParseConfig;
pub use error::{Error, Result};
pub use extractor::{extract_file, parse_source};
pub use logging::{init_logging, LogDestination, LogLevel};
pub use output::{format_elapsed, render, write_output, OutputFormat, OutputTarget};
pub use scanner::{find_class_files, scan_directory};
