//! Deferred cross-language source emission for code generation engines.
//!
//! A generation engine walks a structural model of packages and declared
//! types and opens one writable output per type, expecting to persist
//! source text in its primary language. This crate sits between the engine
//! and the filesystem: each open eagerly renders the whole unit in a
//! different target language from the same structural model, the engine is
//! handed an in-memory sink whose contents are discarded, and on close the
//! precomputed text lands on disk under the extension-rewritten path.
//!
//! # Module Organization
//!
//! - [`writer`] - Output adapters (`CodeWriter`, `FileWriter`, `ConvertingWriter`)
//! - [`convert`] - The pluggable converter capability contract
//! - [`sink`] - Filesystem persistence and the throwaway sink
//! - [`config`] - Emission settings parsed from TOML
//! - [`error`] - Typed error kinds with miette diagnostics
//! - [`testing`] - Converter test doubles (feature-gated)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use changeling::{
//!     CodeWriter, ConversionError, Converter, ConvertingWriter, Encoding, Language,
//! };
//! use changeling_model::Package;
//!
//! struct KotlinBackend;
//!
//! impl Converter for KotlinBackend {
//!     fn language(&self) -> &'static str {
//!         "kotlin"
//!     }
//!
//!     fn file_extension(&self) -> &'static str {
//!         "kt"
//!     }
//!
//!     fn convert(&self, package: &Package, _: &Path) -> Result<String, ConversionError> {
//!         Ok(format!("package {}\n", package.name()))
//!     }
//! }
//!
//! let package = Package::new("com.example");
//! let mut writer =
//!     ConvertingWriter::new("out", Language::Java, Encoding::default(), KotlinBackend);
//!
//! // The engine writes Java; Kotlin is what reaches the disk.
//! writer.write_unit(&package, "Greeting.java", b"class Greeting {}")?;
//! # Ok::<(), Box<changeling::Error>>(())
//! ```

pub mod config;
pub mod convert;
mod encoding;
pub mod error;
mod language;
pub mod sink;
pub mod writer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::EmitConfig;
pub use convert::{ConversionError, Converter};
pub use encoding::Encoding;
pub use error::{Error, Result};
pub use language::Language;
pub use sink::{ThrowawaySink, persist};
pub use writer::{CodeWriter, ConvertingWriter, FileWriter, OutputStream};
