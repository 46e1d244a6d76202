use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use super::{
    document::{DocumentError, LocaleDocument, value_kind},
    key_path::KeyPath,
    table::TranslationEntry,
};

/// What a single entry did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
    Unchanged,
}

impl KeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
            KeyAction::Unchanged => "unchanged",
        }
    }
}

/// How to treat an intermediate segment that holds a non-object value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Stop with [`MergeError::TypeMismatch`].
    #[default]
    Strict,
    /// Replace the value with an empty object and keep going.
    Coerce,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("cannot set \"{path}\": \"{prefix}\" is a {found}, not an object")]
    TypeMismatch {
        path: String,
        prefix: String,
        found: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum FileMergeError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Merge(#[from] MergeError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Intermediate values replaced by objects under [`MergePolicy::Coerce`].
    pub coerced: usize,
}

impl MergeStats {
    pub fn record(&mut self, action: KeyAction) {
        match action {
            KeyAction::Added => self.added += 1,
            KeyAction::Updated => self.updated += 1,
            KeyAction::Unchanged => self.unchanged += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.added + self.updated + self.unchanged
    }

    pub fn is_modified(&self) -> bool {
        self.added > 0 || self.updated > 0 || self.coerced > 0
    }
}

/// Set `value` at `path` inside `root`, creating intermediate objects as needed.
///
/// Returns the action taken on the leaf and the number of intermediate
/// values that were replaced by objects.
pub fn insert_nested(
    root: &mut Map<String, Value>,
    path: &KeyPath,
    value: Value,
    policy: MergePolicy,
) -> Result<(KeyAction, usize), MergeError> {
    let mut current = root;
    let mut coerced = 0;

    for (depth, segment) in path.parents().iter().enumerate() {
        let next = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));

        if !next.is_object() {
            let prefix = path.prefix(depth + 1);
            match policy {
                MergePolicy::Strict => {
                    return Err(MergeError::TypeMismatch {
                        path: path.to_string(),
                        prefix,
                        found: value_kind(next),
                    });
                }
                MergePolicy::Coerce => {
                    tracing::warn!(
                        key = %path,
                        %prefix,
                        found = value_kind(next),
                        "replacing non-object value with an object"
                    );
                    *next = Value::Object(Map::new());
                    coerced += 1;
                }
            }
        }

        current = match next {
            Value::Object(map) => map,
            _ => unreachable!("intermediate value was just ensured to be an object"),
        };
    }

    let action = match current.get(path.leaf()) {
        None => KeyAction::Added,
        Some(old) if *old == value => KeyAction::Unchanged,
        Some(_) => KeyAction::Updated,
    };
    current.insert(path.leaf().to_string(), value);

    Ok((action, coerced))
}

/// Apply `entries` onto `root` in order.
///
/// Later entries overwrite earlier ones at the same path. On error the
/// entries before the failing one stay applied.
pub fn merge_entries(
    root: &mut Map<String, Value>,
    entries: &[TranslationEntry],
    policy: MergePolicy,
) -> Result<MergeStats, MergeError> {
    let mut stats = MergeStats::default();

    for entry in entries {
        let (action, coerced) = insert_nested(
            root,
            &entry.path,
            Value::String(entry.value.clone()),
            policy,
        )?;
        tracing::debug!(key = %entry.path, action = action.as_str(), "merged entry");
        stats.record(action);
        stats.coerced += coerced;
    }

    Ok(stats)
}

/// Load the document at `path`, merge `entries` into it and write it back.
///
/// Nothing is written when `dry_run` is set or when the merge fails.
pub fn merge_file(
    path: &Path,
    entries: &[TranslationEntry],
    policy: MergePolicy,
    dry_run: bool,
) -> Result<MergeStats, FileMergeError> {
    let mut document = LocaleDocument::load(path)?;
    let stats = merge_entries(document.root_mut(), entries, policy)?;

    if !dry_run {
        document.store()?;
    }

    Ok(stats)
}
