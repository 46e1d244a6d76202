//! Translation tables: per-locale lists of dotted keys and their texts.
//!
//! A table is either the compiled-in governance table or a JSON file of the
//! shape `{ "<locale>": { "<dotted.key>": "<text>" } }`. Declaration order is
//! kept in both cases, since entries are applied in that order.

mod governance;

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;

use super::{
    document::value_kind,
    key_path::{InvalidKeyPath, KeyPath},
    locale::{InvalidLocale, Locale},
};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read translation table {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("translation table is not valid JSON")]
    Parse(#[source] serde_json::Error),
    #[error("translation table root must be an object of locales, found {0}")]
    NotAnObject(&'static str),
    #[error("translations for \"{locale}\" must be an object, found {found}")]
    LocaleNotAnObject { locale: String, found: &'static str },
    #[error("translation \"{key}\" for \"{locale}\" must be a string, found {found}")]
    NonStringValue {
        locale: String,
        key: String,
        found: &'static str,
    },
    #[error(transparent)]
    InvalidLocale(#[from] InvalidLocale),
    #[error("in translations for \"{locale}\": {source}")]
    InvalidKeyPath {
        locale: String,
        #[source]
        source: InvalidKeyPath,
    },
    #[error("no translations defined for locale \"{0}\"")]
    MissingLocale(Locale),
}

/// A dotted key path and the text to store at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub path: KeyPath,
    pub value: String,
}

impl TranslationEntry {
    pub fn new(path: &str, value: impl Into<String>) -> Result<Self, InvalidKeyPath> {
        Ok(Self {
            path: KeyPath::parse(path)?,
            value: value.into(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    locales: Vec<(Locale, Vec<TranslationEntry>)>,
}

impl TranslationTable {
    /// The governance framework and independence keys for all six site locales.
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_static(governance::GOVERNANCE)
    }

    fn from_static(data: &[(&str, &[(&str, &str)])]) -> Result<Self, TableError> {
        let mut table = Self::default();
        for (locale, entries) in data {
            let locale = Locale::new(*locale)?;
            let entries = entries
                .iter()
                .map(|(path, value)| table_entry(&locale, path, *value))
                .collect::<Result<Vec<_>, _>>()?;
            table.insert(locale, entries);
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, TableError> {
        let value: Value = serde_json::from_str(content).map_err(TableError::Parse)?;
        let root = match value {
            Value::Object(root) => root,
            other => return Err(TableError::NotAnObject(value_kind(&other))),
        };

        let mut table = Self::default();
        for (locale_id, translations) in root {
            let translations = match translations {
                Value::Object(translations) => translations,
                other => {
                    return Err(TableError::LocaleNotAnObject {
                        locale: locale_id,
                        found: value_kind(&other),
                    });
                }
            };
            let locale = Locale::new(locale_id)?;

            let mut entries = Vec::with_capacity(translations.len());
            for (key, value) in translations {
                let text = match value {
                    Value::String(text) => text,
                    other => {
                        return Err(TableError::NonStringValue {
                            locale: locale.to_string(),
                            key,
                            found: value_kind(&other),
                        });
                    }
                };
                entries.push(table_entry(&locale, &key, text)?);
            }
            table.insert(locale, entries);
        }

        Ok(table)
    }

    /// Append entries for `locale`, extending any entries it already has.
    pub fn insert(&mut self, locale: Locale, entries: Vec<TranslationEntry>) {
        match self.locales.iter_mut().find(|(existing, _)| *existing == locale) {
            Some((_, existing)) => existing.extend(entries),
            None => self.locales.push((locale, entries)),
        }
    }

    pub fn entries_for(&self, locale: &Locale) -> Option<&[TranslationEntry]> {
        self.locales
            .iter()
            .find(|(existing, _)| existing == locale)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Fail on the first of `locales` that has no entries in this table.
    pub fn require_locales(&self, locales: &[Locale]) -> Result<(), TableError> {
        match locales.iter().find(|locale| self.entries_for(locale).is_none()) {
            Some(locale) => Err(TableError::MissingLocale(locale.clone())),
            None => Ok(()),
        }
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter().map(|(locale, _)| locale)
    }
}

fn table_entry(
    locale: &Locale,
    path: &str,
    value: impl Into<String>,
) -> Result<TranslationEntry, TableError> {
    TranslationEntry::new(path, value).map_err(|source| TableError::InvalidKeyPath {
        locale: locale.to_string(),
        source,
    })
}
