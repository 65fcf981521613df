//! Emission settings consumed from the surrounding tool.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{Encoding, Language, Result, error::Error};

/// Settings for one generation run.
///
/// Owned by the surrounding tool and passed through unchanged: the target
/// language selects which converter the tool wires up, and the encoding is
/// applied when units are persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct EmitConfig {
    /// Language the engine natively serializes.
    #[serde(default = "default_primary")]
    pub primary: Language,
    /// Language actually persisted to disk.
    pub target: Language,
    /// Output encoding, by WHATWG label.
    #[serde(default)]
    pub encoding: Encoding,
}

fn default_primary() -> Language {
    Language::Java
}

impl EmitConfig {
    /// Parse a config from TOML content.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::config(source, content, filename))
    }

    /// Read and parse a config file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        Self::from_toml_str(&content, &path.display().to_string())
    }
}
