use serde::Deserialize;
use std::path::PathBuf;

/// A declared substitution point in a template.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Variable {
    /// Placeholder name, unique within its template
    #[serde(default)]
    pub name: String,
    /// Help text shown when prompting for a value
    #[serde(default)]
    pub description: String,
}

/// A template definition decoded from a `template.yaml` manifest.
///
/// Unknown manifest fields are ignored; missing fields default to empty.
/// `directory` is not part of the manifest document: discovery assigns it to
/// the manifest's parent directory right after a successful decode, and it is
/// read-only from then on.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    /// Display and sort key. Not required to be unique across a collection;
    /// duplicates make selection by name ambiguous.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Substitution points declared by the template author, in order
    #[serde(default)]
    pub variables: Vec<Variable>,
    /// Files the author asserts belong to the template. Informational only:
    /// generation walks the real directory tree and never consults this list,
    /// so it can drift from the files actually present.
    #[serde(default)]
    pub files: Vec<String>,
    /// Directory containing the manifest; the template root for generation
    #[serde(skip)]
    pub directory: PathBuf,
}

impl Template {
    /// Decodes a single manifest document.
    ///
    /// The caller is responsible for assigning `directory` and for attaching
    /// the manifest's path to any decode failure.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
