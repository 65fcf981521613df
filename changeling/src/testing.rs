//! Converter test doubles.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use changeling_model::Package;

use crate::convert::{ConversionError, Converter};

/// Converter that returns the same fixed text for every unit.
pub struct StaticConverter {
    language: &'static str,
    extension: &'static str,
    text: String,
}

impl StaticConverter {
    pub fn new(
        language: &'static str,
        extension: &'static str,
        text: impl Into<String>,
    ) -> Self {
        Self {
            language,
            extension,
            text: text.into(),
        }
    }

    /// A Kotlin-flavored static converter.
    pub fn kotlin(text: impl Into<String>) -> Self {
        Self::new("kotlin", "kt", text)
    }
}

impl Converter for StaticConverter {
    fn language(&self) -> &'static str {
        self.language
    }

    fn file_extension(&self) -> &'static str {
        self.extension
    }

    fn convert(&self, _package: &Package, _destination: &Path) -> Result<String, ConversionError> {
        Ok(self.text.clone())
    }
}

/// Converter that derives distinct, deterministic text from the unit's
/// identity, so tests can tell one unit's artifact from another's.
pub struct StubConverter {
    language: &'static str,
    extension: &'static str,
}

impl StubConverter {
    pub fn new(language: &'static str, extension: &'static str) -> Self {
        Self {
            language,
            extension,
        }
    }

    pub fn kotlin() -> Self {
        Self::new("kotlin", "kt")
    }
}

impl Converter for StubConverter {
    fn language(&self) -> &'static str {
        self.language
    }

    fn file_extension(&self) -> &'static str {
        self.extension
    }

    fn convert(&self, package: &Package, destination: &Path) -> Result<String, ConversionError> {
        let type_name = destination
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConversionError::new("destination has no file stem"))?;

        let mut text = String::new();
        if !package.is_default() {
            text.push_str(&format!("package {}\n\n", package.name()));
        }
        text.push_str(&format!("class {type_name}\n"));
        Ok(text)
    }
}

/// Converter that fails for every unit.
pub struct FailingConverter {
    message: String,
}

impl FailingConverter {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Converter for FailingConverter {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn convert(&self, _package: &Package, _destination: &Path) -> Result<String, ConversionError> {
        Err(ConversionError::new(self.message.clone()))
    }
}

/// Wraps another converter and records every `(package, destination)` it
/// is asked to convert, so tests can assert when conversion happened.
pub struct RecordingConverter<C> {
    inner: C,
    calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl<C> RecordingConverter<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded calls, usable after the converter has been
    /// moved into a writer.
    pub fn calls(&self) -> Arc<Mutex<Vec<(String, PathBuf)>>> {
        Arc::clone(&self.calls)
    }
}

impl<C: Converter> Converter for RecordingConverter<C> {
    fn language(&self) -> &'static str {
        self.inner.language()
    }

    fn file_extension(&self) -> &'static str {
        self.inner.file_extension()
    }

    fn convert(&self, package: &Package, destination: &Path) -> Result<String, ConversionError> {
        self.calls
            .lock()
            .unwrap()
            .push((package.name().to_string(), destination.to_path_buf()));
        self.inner.convert(package, destination)
    }
}
