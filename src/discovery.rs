use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::constants::MANIFEST_FILENAME;
use crate::error::{Error, Result};
use crate::manifest::Template;

/// Walks `root` and returns every template defined beneath it, sorted
/// ascending by name.
///
/// A template is any directory containing a file named exactly
/// [`MANIFEST_FILENAME`]; its `directory` is set to that manifest's parent.
/// Directory entries are visited in file-name order, and the name sort is
/// stable, so templates with equal names keep their walk order.
///
/// Discovery is all-or-nothing: a walk or read failure surfaces as
/// `DiscoveryError`, a malformed manifest as `ManifestParseError` (carrying
/// the manifest's path), and no partial collection escapes either way.
pub fn discover_templates<P: AsRef<Path>>(root: P) -> Result<Vec<Template>> {
    let root = root.as_ref();
    let root = root.canonicalize().map_err(|source| Error::DiscoveryError {
        path: root.to_path_buf(),
        source,
    })?;

    let mut templates = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
            Error::DiscoveryError { path, source: e.into() }
        })?;

        if !entry.file_type().is_file() || entry.file_name() != MANIFEST_FILENAME {
            continue;
        }

        let manifest_path = entry.path();
        let content =
            fs::read_to_string(manifest_path).map_err(|source| Error::DiscoveryError {
                path: manifest_path.to_path_buf(),
                source,
            })?;
        let mut template =
            Template::from_yaml(&content).map_err(|source| Error::ManifestParseError {
                path: manifest_path.to_path_buf(),
                source,
            })?;
        template.directory =
            manifest_path.parent().unwrap_or(&root).to_path_buf();
        templates.push(template);
    }

    templates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(templates)
}
