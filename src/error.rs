//! Error types for a parse run
//!
//! Configuration and build failures are fatal and surface as `ParserError`.
//! Compiler diagnostics are not errors; see [`crate::diagnostics`].

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned by [`crate::Parser::parse`].
#[derive(Error, Debug)]
pub enum ParserError {
    /// The options did not select any valid path-resolution strategy.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The compilation unit could not be constructed.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// The path resolver failed while normalizing or enumerating inputs.
    #[error("path resolution failed: {0}")]
    Resolve(#[source] anyhow::Error),

    /// The schema extractor failed.
    #[error("schema extraction failed: {0}")]
    Extract(#[source] anyhow::Error),
}

/// Invalid or incomplete [`crate::ParserOptions`].
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Parserr cannot use relative input paths without a *callerBaseDir* config")]
    MissingCallerBaseDir,

    #[error("Parserr requires either *files* or a *targetDir* config to function")]
    NoInput,

    #[error("target directory '{}' does not exist or is not a directory", .0.display())]
    TargetDirNotFound(PathBuf),

    #[error("invalid parser options: {0}")]
    InvalidOptions(String),
}

/// Failure while turning a resolved path set into a compilation unit.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported source file '{}': expected a .ts or .tsx extension", .0.display())]
    UnsupportedFile(PathBuf),

    #[error("failed to parse '{}'", .0.display())]
    Parse(PathBuf),

    #[error("failed to initialise parser: {0}")]
    Language(String),
}

pub type Result<T> = std::result::Result<T, ParserError>;
