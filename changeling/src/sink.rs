//! Filesystem persistence and the throwaway sink.

use std::{fs, io, path::Path};

use crate::{Encoding, Result, error::Error};

/// Persist one unit's text to one path with the given encoding.
///
/// Parent directories are created as needed and an existing file at the
/// path is overwritten. Any filesystem failure is terminal for the unit;
/// no partial-write recovery is attempted.
pub fn persist(path: &Path, text: &str, encoding: Encoding) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::io(path, source))?;
    }
    fs::write(path, encoding.encode(text)).map_err(|source| Error::io(path, source))
}

/// A write target that accepts bytes with no effect on the persisted
/// result.
///
/// Satisfies the engine's expectation that opening an output yields a
/// writable stream. The buffer lives and dies with one output unit and is
/// never read back.
#[derive(Debug, Default)]
pub struct ThrowawaySink {
    buf: Vec<u8>,
}

impl ThrowawaySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes the engine has written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl io::Write for ThrowawaySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
