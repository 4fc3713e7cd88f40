//! @ai:module:intent Discover class files under a directory and collect their annotations
//! @ai:module:layer application
//! @ai:module:public_api find_class_files, scan_directory
//! @ai:module:depends_on extractor, annotation, language, error
//! @ai:module:stateless true

use crate::annotation::AnnotationIndex;
use crate::error::{Error, Result};
use crate::extractor::{extract_file, relative_path};
use crate::language::is_class_file;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// @ai:intent Recursively list class files below root
/// @ai:post unreadable entries are logged and skipped; symlinked files are kept
/// @ai:effects fs:read
pub fn find_class_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                warn!(error = %e, path = %path, "Error accessing path");
                continue;
            }
        };

        if !entry.file_type().is_dir() && is_class_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files
}

/// @ai:intent Check that the scan root exists and is a directory
/// @ai:effects fs:read
fn validate_root(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root).map_err(|e| Error::DirectoryAccess {
        path: root.to_path_buf(),
        source: e,
    })?;

    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    Ok(())
}

/// @ai:intent Scan a directory tree and group every annotation by name
/// @ai:pre root is a readable directory
/// @ai:post a file that fails to read is logged and left out
/// @ai:effects fs:read
pub fn scan_directory(root: &Path) -> Result<AnnotationIndex> {
    info!(directory = %root.display(), "Starting parse");

    if let Err(e) = validate_root(root) {
        error!(error = %e, directory = %root.display(), "Cannot access directory");
        return Err(e);
    }

    let files = find_class_files(root);
    info!(count = files.len(), "Found .cls files");

    let mut index = AnnotationIndex::new();
    for path in &files {
        let rel = relative_path(path, root);
        debug!(file = %rel, "Parsing file");

        match extract_file(path, root) {
            Ok(annotations) => index.extend(annotations),
            Err(e) => error!(error = %e, file = %rel, "Error parsing file"),
        }
    }

    info!(total = index.total(), "Parsing complete");
    Ok(index)
}
