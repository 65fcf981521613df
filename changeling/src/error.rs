//! Error kinds for the emission layer.
//!
//! All unit-scoped failures are terminal for their unit: the caller must
//! abort generation for that file rather than fall back to emitting the
//! primary-language artifact.

use std::{io, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::convert::ConversionError;

/// Result type for emission operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to convert '{path}' to {language}")]
    #[diagnostic(
        code(changeling::conversion_error),
        help("the structural model could not be rendered for this unit; no file was written")
    )]
    Conversion {
        path: PathBuf,
        language: String,
        #[source]
        source: ConversionError,
    },

    #[error("cannot resolve output path for '{file_name}': {reason}")]
    #[diagnostic(code(changeling::path_resolution))]
    PathResolution {
        file_name: String,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(changeling::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse emission config")]
    #[diagnostic(code(changeling::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a conversion error for one unit
    pub fn conversion(
        path: impl Into<PathBuf>,
        language: impl Into<String>,
        source: ConversionError,
    ) -> Box<Self> {
        Box::new(Error::Conversion {
            path: path.into(),
            language: language.into(),
            source,
        })
    }

    /// Create a path resolution error
    pub fn path_resolution(
        file_name: impl Into<String>,
        reason: impl Into<String>,
        source: Option<io::Error>,
    ) -> Box<Self> {
        Box::new(Error::PathResolution {
            file_name: file_name.into(),
            reason: reason.into(),
            source,
        })
    }

    /// Create an I/O error for one path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
