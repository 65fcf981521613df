//! Output encoding for persisted source text.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Deserializer};

/// The character encoding applied when a unit's text is persisted.
///
/// Wraps an [`encoding_rs`] encoding resolved from a WHATWG label
/// (`utf-8`, `iso-8859-1`, `windows-1252`, ...). Defaults to UTF-8.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Encoding(&'static encoding_rs::Encoding);

impl Encoding {
    /// UTF-8, the default output encoding.
    pub const UTF_8: Encoding = Encoding(encoding_rs::UTF_8);

    /// Resolve an encoding from a label, case-insensitively.
    pub fn for_label(label: &str) -> Option<Self> {
        encoding_rs::Encoding::for_label(label.as_bytes()).map(Encoding)
    }

    /// The canonical name of this encoding (e.g. `UTF-8`).
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Encode text for persistence.
    ///
    /// Characters unmappable in the chosen encoding are replaced with
    /// numeric character references, per the WHATWG encode algorithm.
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        let (bytes, _, _) = self.0.encode(text);
        bytes
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::UTF_8
    }
}

impl fmt::Debug for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Encoding").field(&self.name()).finish()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::for_label(s).ok_or_else(|| format!("unknown encoding label '{}'", s))
    }
}

impl<'de> Deserialize<'de> for Encoding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(Encoding::default().name(), "UTF-8");
    }

    #[test]
    fn test_for_label_is_case_insensitive() {
        assert_eq!(Encoding::for_label("UTF-8"), Some(Encoding::UTF_8));
        assert_eq!(Encoding::for_label("utf8"), Some(Encoding::UTF_8));
        assert!(Encoding::for_label("ebcdic-37").is_none());
    }

    #[test]
    fn test_encode_latin1() {
        let enc = Encoding::for_label("iso-8859-1").unwrap();
        // encoding_rs maps the iso-8859-1 label to windows-1252; 'é' is 0xE9
        // in both.
        assert_eq!(enc.encode("café").as_ref(), b"caf\xe9");
    }

    #[test]
    fn test_encode_utf8_is_borrowing() {
        let bytes = Encoding::UTF_8.encode("plain ascii");
        assert_eq!(bytes.as_ref(), b"plain ascii");
    }
}
