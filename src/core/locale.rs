use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;

pub const DEFAULT_LOCALES: &[&str] = &["en", "fr", "es", "de", "pt", "it"];

pub const DEFAULT_FILE_NAME: &str = "common.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid locale identifier \"{0}\"")]
pub struct InvalidLocale(pub String);

/// A locale identifier such as `en` or `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidLocale> {
        let id = id.into();
        let is_valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if is_valid {
            Ok(Self(id))
        } else {
            Err(InvalidLocale(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn defaults() -> Vec<Self> {
        DEFAULT_LOCALES
            .iter()
            .map(|id| Self(id.to_string()))
            .collect()
    }
}

impl FromStr for Locale {
    type Err = InvalidLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where locale documents live on disk: `<root>/<locale>/<file_name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleLayout {
    pub root: PathBuf,
    pub file_name: String,
}

impl LocaleLayout {
    /// `.` components inside `root` are dropped so reported paths stay tidy.
    pub fn new(root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            root: root.into().components().collect(),
            file_name: file_name.into(),
        }
    }

    pub fn document_path(&self, locale: &Locale) -> PathBuf {
        self.root.join(locale.as_str()).join(&self.file_name)
    }

    /// Short path used in status lines, e.g. `en/common.json`.
    pub fn display_path(&self, locale: &Locale) -> String {
        format!("{}/{}", locale, self.file_name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
