/// Handles argument parsing and workflow orchestration.
pub mod cli;

/// Constants shared across the application.
pub mod constants;

/// Template discovery: locating and parsing manifests under a collection root.
pub mod discovery;

/// Defines custom error types.
pub mod error;

/// Project generation: copy-with-substitution of a template tree.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// An abstraction that allows fetching template collections from a source.
pub mod loader;

/// Template manifest records and decoding.
pub mod manifest;

/// User input and interaction handling.
pub mod prompt;
