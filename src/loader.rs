use log::debug;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use url::Url;

use crate::error::{Error, Result};

/// Represents the source location of a template collection.
#[derive(Debug)]
pub enum TemplateSource {
    /// Local filesystem path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS, SSH, or scp-like)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{}'", repo),
        }
    }
}

impl TemplateSource {
    /// Classifies a source string as a git URL or a filesystem path.
    pub fn from_string(s: &str) -> Self {
        if Self::is_git_url(s) {
            TemplateSource::Git(s.to_string())
        } else {
            TemplateSource::FileSystem(PathBuf::from(s))
        }
    }

    /// Returns true for HTTPS/git/ssh URLs and scp-like `user@host:path`
    /// remotes.
    pub fn is_git_url(s: &str) -> bool {
        if let Ok(url) = Url::parse(s) {
            return matches!(url.scheme(), "https" | "git" | "ssh");
        }
        match s.split_once('@') {
            Some((user, rest)) => {
                !user.is_empty() && rest.contains(':') && !rest.contains('\\')
            }
            None => false,
        }
    }
}

/// A locally available template collection.
///
/// Cloned repositories live in a temporary directory that is removed when
/// this value is dropped; local sources are left untouched.
#[derive(Debug)]
pub enum FetchedTemplate {
    Local(PathBuf),
    Cloned(TempDir),
}

impl FetchedTemplate {
    pub fn path(&self) -> &Path {
        match self {
            FetchedTemplate::Local(path) => path,
            FetchedTemplate::Cloned(dir) => dir.path(),
        }
    }
}

/// Trait for loading template collections from different sources.
pub trait TemplateLoader {
    /// Makes the collection available on the local filesystem.
    fn load(&self) -> Result<FetchedTemplate>;
}

/// Loader for collections on the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

/// Loader for collections in git repositories.
pub struct GitLoader<S: AsRef<str>> {
    repo: S,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    fn load(&self) -> Result<FetchedTemplate> {
        let path = self.path.as_ref();
        if !path.exists() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }
        Ok(FetchedTemplate::Local(path.to_path_buf()))
    }
}

impl<S: AsRef<str>> GitLoader<S> {
    pub fn new(repo: S) -> Self {
        Self { repo }
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<S> {
    fn load(&self) -> Result<FetchedTemplate> {
        let repo_url = self.repo.as_ref();
        let clone_dir = TempDir::new().map_err(Error::IoError)?;

        debug!("Cloning repository '{}' to '{}'.", repo_url, clone_dir.path().display());

        // Set up authentication callbacks for ssh remotes
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            let home = std::env::var("HOME").unwrap_or_default();
            git2::Cred::ssh_key(
                username_from_url.unwrap_or("git"),
                None,
                Path::new(&format!("{home}/.ssh/id_rsa")),
                None,
            )
        });

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);

        match builder.clone(repo_url, clone_dir.path()) {
            Ok(_) => Ok(FetchedTemplate::Cloned(clone_dir)),
            Err(source) => {
                Err(Error::FetchError { repo: repo_url.to_string(), source })
            }
        }
    }
}

/// Resolves a source string to a local template collection, cloning it first
/// if it names a git repository.
pub fn fetch_template(source: &str) -> Result<FetchedTemplate> {
    let source = TemplateSource::from_string(source);
    debug!("Loading template collection from {source}.");
    let loader: Box<dyn TemplateLoader> = match source {
        TemplateSource::Git(repo) => Box::new(GitLoader::new(repo)),
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)),
    };
    loader.load()
}
