use std::path::PathBuf;

use super::{
    document::{DocumentError, ParseError, check_syntax},
    locale::{Locale, LocaleLayout},
};

/// Outcome of checking one locale document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleStatus {
    Valid,
    Invalid(ParseError),
    Missing,
    /// The file exists but could not be read.
    Unreadable(String),
}

impl LocaleStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, LocaleStatus::Valid)
    }
}

impl From<Result<(), DocumentError>> for LocaleStatus {
    fn from(result: Result<(), DocumentError>) -> Self {
        match result {
            Ok(()) => LocaleStatus::Valid,
            Err(DocumentError::MissingFile { .. }) => LocaleStatus::Missing,
            Err(DocumentError::Parse(err)) => LocaleStatus::Invalid(err),
            Err(err @ DocumentError::Io { .. }) => {
                let reason = std::error::Error::source(&err)
                    .map(ToString::to_string)
                    .unwrap_or_else(|| err.to_string());
                LocaleStatus::Unreadable(reason)
            }
            Err(err) => LocaleStatus::Unreadable(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleValidation {
    pub locale: Locale,
    pub path: PathBuf,
    /// Short form for status lines, e.g. `en/common.json`.
    pub display_path: String,
    pub status: LocaleStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub results: Vec<LocaleValidation>,
}

impl ValidationReport {
    pub fn failure_count(&self) -> usize {
        self.results
            .iter()
            .filter(|result| !result.status.is_valid())
            .count()
    }

    pub fn is_all_valid(&self) -> bool {
        self.failure_count() == 0
    }

    pub fn checked_count(&self) -> usize {
        self.results.len()
    }
}

/// Check every locale's document for JSON syntax errors.
///
/// All locales are attempted in order, whatever earlier ones report.
pub fn validate_locales(layout: &LocaleLayout, locales: &[Locale]) -> ValidationReport {
    let results = locales
        .iter()
        .map(|locale| {
            let path = layout.document_path(locale);
            let status = LocaleStatus::from(check_syntax(&path));
            tracing::debug!(%locale, path = %path.display(), ?status, "validated locale");
            LocaleValidation {
                locale: locale.clone(),
                display_path: layout.display_path(locale),
                path,
                status,
            }
        })
        .collect();

    ValidationReport { results }
}
