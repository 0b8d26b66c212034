use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::placeholder_token;
use crate::error::{Error, Result};

/// Everything needed to materialize one project from a chosen template.
#[derive(Debug)]
pub struct ProjectRequest {
    /// Root of the chosen template (a `Template`'s `directory`)
    pub template_dir: PathBuf,
    /// Where the project is written. Must have been ruled safe by the caller;
    /// generation merges silently into whatever already exists here.
    pub output_dir: PathBuf,
    /// Placeholder name to replacement value, applied in insertion order.
    /// Contains at least `ProjectName` and `ModuleName`.
    pub substitutions: IndexMap<String, String>,
}

/// Reproduces a template's directory tree at the output path, substituting
/// placeholder tokens in file contents.
///
/// Every entry under the template root is processed; there is no inclusion or
/// exclusion, so the manifest file and any binary files are copied and
/// substituted like everything else. Substitution operates on raw bytes, so
/// non-UTF-8 content passes through unchanged unless a token's byte pattern
/// occurs in it.
///
/// The first read, write, directory-creation, or walk failure aborts
/// generation with the offending path. Partial output is left on disk;
/// cleaning it up is the caller's responsibility.
pub struct ProjectGenerator<'a> {
    request: &'a ProjectRequest,
}

impl<'a> ProjectGenerator<'a> {
    pub fn new(request: &'a ProjectRequest) -> Self {
        Self { request }
    }

    pub fn generate(&self) -> Result<()> {
        for entry in WalkDir::new(&self.request.template_dir) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.request.template_dir.clone());
                Error::MaterializeError { path, source: e.into() }
            })?;
            self.process_entry(entry.path(), entry.file_type().is_dir())?;
        }
        Ok(())
    }

    /// Maps a path under the template root to its counterpart under the
    /// output root.
    fn target_path(&self, source_path: &Path) -> Result<PathBuf> {
        let relative = source_path
            .strip_prefix(&self.request.template_dir)
            .map_err(|e| Error::MaterializeError {
                path: source_path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;
        Ok(self.request.output_dir.join(relative))
    }

    fn process_entry(&self, source_path: &Path, is_dir: bool) -> Result<()> {
        let target = self.target_path(source_path)?;

        if is_dir {
            return fs::create_dir_all(&target).map_err(|source| {
                Error::MaterializeError { path: target.clone(), source }
            });
        }

        let content = fs::read(source_path).map_err(|source| {
            Error::MaterializeError { path: source_path.to_path_buf(), source }
        })?;
        let content = self.substitute(content);
        fs::write(&target, content).map_err(|source| Error::MaterializeError {
            path: target.clone(),
            source,
        })?;

        // The target keeps the source file's permission bits.
        let permissions = fs::metadata(source_path)
            .map_err(|source| Error::MaterializeError {
                path: source_path.to_path_buf(),
                source,
            })?
            .permissions();
        fs::set_permissions(&target, permissions).map_err(|source| {
            Error::MaterializeError { path: target.clone(), source }
        })
    }

    /// Applies every substitution to `content`, one literal global replace
    /// per placeholder, in the mapping's insertion order.
    fn substitute(&self, mut content: Vec<u8>) -> Vec<u8> {
        for (name, value) in &self.request.substitutions {
            let token = placeholder_token(name);
            content = replace_all(content, token.as_bytes(), value.as_bytes());
        }
        content
    }
}

/// Literal, left-to-right, non-overlapping replacement of every occurrence of
/// `needle` in `haystack`.
fn replace_all(haystack: Vec<u8>, needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if needle.is_empty() {
        return haystack;
    }
    let mut out = Vec::with_capacity(haystack.len());
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i..].starts_with(needle) {
            out.extend_from_slice(replacement);
            i += needle.len();
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }
    out
}
