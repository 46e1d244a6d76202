use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid key path \"{path}\": {reason}")]
pub struct InvalidKeyPath {
    pub path: String,
    pub reason: &'static str,
}

/// A dotted key path such as `governance.framework.title`.
///
/// Segments run from the most general key to the leaf name. A path always
/// has at least one segment and no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub fn parse(path: &str) -> Result<Self, InvalidKeyPath> {
        if path.is_empty() {
            return Err(InvalidKeyPath {
                path: path.to_string(),
                reason: "path is empty",
            });
        }

        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(InvalidKeyPath {
                path: path.to_string(),
                reason: "path contains an empty segment",
            });
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments leading to the leaf, excluding the leaf itself.
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    pub fn leaf(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// Dotted form of the first `len` segments, e.g. `prefix(2)` of
    /// `a.b.c` is `a.b`.
    pub fn prefix(&self, len: usize) -> String {
        self.segments[..len.min(self.segments.len())].join(".")
    }
}

impl FromStr for KeyPath {
    type Err = InvalidKeyPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
