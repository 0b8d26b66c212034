use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to fetch template repository '{repo}'. Original error: {source}")]
    FetchError { repo: String, source: git2::Error },

    #[error("Failed to read template collection at '{path}'. Original error: {source}")]
    DiscoveryError { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse manifest '{path}'. Original error: {source}")]
    ManifestParseError { path: PathBuf, source: serde_yaml::Error },

    #[error("Template selection failed. Original error: {0}")]
    SelectionError(dialoguer::Error),

    #[error("Failed to read project details. Original error: {0}")]
    InputError(dialoguer::Error),

    #[error("Failed to parse answers as JSON. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// When `--non-interactive` is set and a required value has no answer.
    #[error("No answer provided for '{name}' in non-interactive mode.")]
    MissingAnswerError { name: String },

    #[error("Failed to materialize '{path}'. Original error: {source}")]
    MaterializeError { path: PathBuf, source: std::io::Error },

    #[error("Cannot proceed: output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },
    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },
    #[error("No templates found in '{template_dir}'.")]
    NoTemplatesFoundError { template_dir: String },
    #[error("No template named '{name}' in the collection.")]
    UnknownTemplateError { name: String },
}

/// Convenience type alias for Results with this crate's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
