//! Source languages known to the emission layer.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A source language a generation run can emit or redirect to.
///
/// `Java` is the language the upstream engine natively serializes;
/// `Kotlin` and `Scala` are the alternate targets a converter can persist
/// in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Java
    Java,
    /// Kotlin
    Kotlin,
    /// Scala
    Scala,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Scala => "scala",
        }
    }

    /// Source file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kt",
            Language::Scala => "scala",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "scala" => Ok(Language::Scala),
            _ => Err(format!(
                "unknown language '{}', expected 'java', 'kotlin' or 'scala'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Language::from_str("java").unwrap(), Language::Java);
        assert_eq!(Language::from_str("kotlin").unwrap(), Language::Kotlin);
        assert_eq!(Language::from_str("kt").unwrap(), Language::Kotlin);
        assert_eq!(Language::from_str("Scala").unwrap(), Language::Scala);
        assert!(Language::from_str("python").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::Java.to_string(), "java");
        assert_eq!(Language::Kotlin.to_string(), "kotlin");
    }

    #[test]
    fn test_extension() {
        assert_eq!(Language::Java.extension(), "java");
        assert_eq!(Language::Kotlin.extension(), "kt");
        assert_eq!(Language::Scala.extension(), "scala");
    }
}
