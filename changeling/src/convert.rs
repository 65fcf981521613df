//! The pluggable converter capability.

use std::{error, path::Path};

use changeling_model::Package;
use thiserror::Error;

/// Trait for language-specific source converters.
///
/// A converter renders one package's declared unit into complete source
/// text for its target language, reading only the structural model. It is
/// handed the destination path the text will be persisted under so that
/// path-derived details (file-level declarations, headers) can be included,
/// but it must not touch the filesystem itself.
///
/// Implementations are injected where a writer is constructed, never
/// reached through ambient global state, so tests can substitute a
/// deterministic fake.
pub trait Converter {
    /// Target language identifier (e.g. "kotlin")
    fn language(&self) -> &'static str;

    /// File extension for converted source files, without the dot (e.g. "kt")
    fn file_extension(&self) -> &'static str;

    /// Render the unit's source text from the structural model.
    ///
    /// Must be deterministic: repeated calls for the same unit within one
    /// generation run return identical text. A conversion that cannot be
    /// completed must fail with [`ConversionError`], never return empty
    /// output.
    fn convert(&self, package: &Package, destination: &Path) -> Result<String, ConversionError>;
}

/// Failure to render a unit into target-language source text.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConversionError {
    message: String,
    #[source]
    source: Option<Box<dyn error::Error + Send + Sync>>,
}

impl ConversionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
