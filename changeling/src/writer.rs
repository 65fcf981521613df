//! Output adapters between a generation engine and the filesystem.
//!
//! A [`CodeWriter`] is the factory the engine calls once per declared type:
//! `open` yields a stream the engine writes source bytes into and must
//! close on every exit path. [`FileWriter`] lands those bytes verbatim
//! under the resolved path. [`ConvertingWriter`] accepts them into a
//! throwaway buffer instead and persists independently converted text
//! under an extension-rewritten path when the stream is closed.

use std::{
    fmt,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use changeling_model::Package;

use crate::{
    Encoding, Language, Result,
    convert::Converter,
    error::Error,
    sink::{ThrowawaySink, persist},
};

/// Factory for per-type writable outputs.
///
/// One stream is opened per `(package, logical file name)` request. The
/// engine owns the returned stream and must invoke [`OutputStream::close`]
/// on every exit path, including error paths; a stream that is never
/// closed persists nothing.
pub trait CodeWriter {
    /// Open a writable output for one declared type.
    fn open(&mut self, package: &Package, file_name: &str) -> Result<Box<dyn OutputStream>>;

    /// Open a unit, write the engine's bytes, and close it.
    ///
    /// Convenience wrapper for one complete engine step.
    fn write_unit(&mut self, package: &Package, file_name: &str, contents: &[u8]) -> Result<()> {
        let mut out = self.open(package, file_name)?;
        out.write_all(contents)
            .map_err(|source| Error::io(file_name, source))?;
        out.close()
    }
}

/// The stream contract a generation engine expects from an open output.
///
/// Bytes are accepted through [`io::Write`]; `close` finalizes the unit.
/// Closing more than once is safe: only the first close performs the
/// physical write.
pub trait OutputStream: io::Write + fmt::Debug {
    fn close(&mut self) -> Result<()>;
}

/// Resolve the physical file path for a `(package, file name)` request.
///
/// Shared by both writers so the package-to-directory mapping stays
/// consistent between the primary and converted paths.
fn resolve_file(base: &Path, package: &Package, file_name: &str) -> PathBuf {
    base.join(package.relative_dir()).join(file_name)
}

/// Create the parent directories of a resolved path.
fn ensure_parent(path: &Path, file_name: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| {
            Error::path_resolution(
                file_name,
                format!("cannot create directory '{}'", parent.display()),
                Some(source),
            )
        })?;
    }
    Ok(())
}

/// Replace a trailing `.{from}` extension with `.{to}`.
///
/// Exact suffix replacement only; returns `None` when the file name does
/// not end with the expected extension.
fn rewrite_extension(path: &Path, from: &str, to: &str) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(&format!(".{from}"))?;
    Some(path.with_file_name(format!("{stem}.{to}")))
}

/// Writer that persists exactly what the engine writes, under the
/// resolved primary-language path.
///
/// Bytes are buffered in memory and land on disk when the stream is
/// closed, so an abandoned unit leaves no partial artifact.
pub struct FileWriter {
    base: PathBuf,
}

impl FileWriter {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl CodeWriter for FileWriter {
    fn open(&mut self, package: &Package, file_name: &str) -> Result<Box<dyn OutputStream>> {
        let path = resolve_file(&self.base, package, file_name);
        ensure_parent(&path, file_name)?;
        Ok(Box::new(DirectStream {
            path,
            buf: Vec::new(),
            closed: false,
        }))
    }
}

#[derive(Debug)]
struct DirectStream {
    path: PathBuf,
    buf: Vec<u8>,
    closed: bool,
}

impl io::Write for DirectStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputStream for DirectStream {
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        fs::write(&self.path, &self.buf).map_err(|source| Error::io(&self.path, source))?;
        self.closed = true;
        Ok(())
    }
}

/// Per-unit bookkeeping: the resolved destination and the text fixed for
/// it at open time.
#[derive(Debug)]
struct OutputUnit {
    path: PathBuf,
    text: String,
    encoding: Encoding,
}

/// Writer that persists converted source text in place of what the engine
/// writes.
///
/// Each `open` resolves the primary-language path the same way
/// [`FileWriter`] would, rewrites the trailing extension to the
/// converter's, and renders the unit's text from the structural model
/// before the engine has written a single byte. The engine's own bytes go
/// into a [`ThrowawaySink`] and are discarded; closing the stream flushes
/// the precomputed text. The primary-language path never materializes.
pub struct ConvertingWriter<C> {
    base: PathBuf,
    primary: Language,
    encoding: Encoding,
    converter: C,
}

impl<C: Converter> ConvertingWriter<C> {
    pub fn new(
        base: impl Into<PathBuf>,
        primary: Language,
        encoding: Encoding,
        converter: C,
    ) -> Self {
        Self {
            base: base.into(),
            primary,
            encoding,
            converter,
        }
    }

    /// The target language this writer persists.
    pub fn language(&self) -> &'static str {
        self.converter.language()
    }
}

impl<C: Converter> CodeWriter for ConvertingWriter<C> {
    fn open(&mut self, package: &Package, file_name: &str) -> Result<Box<dyn OutputStream>> {
        let primary_path = resolve_file(&self.base, package, file_name);
        let path = rewrite_extension(
            &primary_path,
            self.primary.extension(),
            self.converter.file_extension(),
        )
        .ok_or_else(|| {
            Error::path_resolution(
                file_name,
                format!("expected a '.{}' file name", self.primary.extension()),
                None,
            )
        })?;
        ensure_parent(&path, file_name)?;

        // The unit's text is fixed here, before the engine writes anything.
        let text = self
            .converter
            .convert(package, &path)
            .map_err(|source| Error::conversion(&path, self.converter.language(), source))?;

        Ok(Box::new(RedirectStream {
            unit: OutputUnit {
                path,
                text,
                encoding: self.encoding,
            },
            sink: ThrowawaySink::new(),
            closed: false,
        }))
    }
}

#[derive(Debug)]
struct RedirectStream {
    unit: OutputUnit,
    sink: ThrowawaySink,
    closed: bool,
}

impl io::Write for RedirectStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl OutputStream for RedirectStream {
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        persist(&self.unit.path, &self.unit.text, self.unit.encoding)?;
        self.closed = true;
        Ok(())
    }
}
