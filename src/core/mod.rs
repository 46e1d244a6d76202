//! Locale documents and the operations run on them.
//!
//! - `document`: load, syntax-check and store one locale's JSON file
//! - `key_path`: dotted key paths (`governance.framework.title`)
//! - `locale`: locale identifiers and where their files live
//! - `merge`: dotted-path merge of translation entries into a document
//! - `table`: translation tables, built-in or loaded from JSON
//! - `validate`: syntax validation across all configured locales

pub mod document;
pub mod key_path;
pub mod locale;
pub mod merge;
pub mod table;
pub mod validate;

pub use document::{DocumentError, LocaleDocument, ParseError, check_syntax};
pub use key_path::{InvalidKeyPath, KeyPath};
pub use locale::{InvalidLocale, Locale, LocaleLayout};
pub use merge::{
    FileMergeError, KeyAction, MergeError, MergePolicy, MergeStats, merge_entries, merge_file,
};
pub use table::{TableError, TranslationEntry, TranslationTable};
pub use validate::{LocaleStatus, LocaleValidation, ValidationReport, validate_locales};
