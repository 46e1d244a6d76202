use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use thiserror::Error;

/// A JSON syntax error with its 1-based location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line} column {column}")]
pub struct ParseError {
    pub path: PathBuf,
    pub message: String,
    pub line: usize,
    pub column: usize,
    /// The offending source line, when the location points inside the file.
    pub source_line: Option<String>,
}

impl ParseError {
    fn from_serde(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        let full = err.to_string();
        let suffix = format!(" at line {} column {}", line, column);
        let message = full.strip_suffix(&suffix).unwrap_or(&full).to_string();
        let source_line = line
            .checked_sub(1)
            .and_then(|index| content.lines().nth(index))
            .map(str::to_string);

        Self {
            path: path.to_path_buf(),
            message,
            line,
            column,
            source_line,
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("file not found: {}", .path.display())]
    MissingFile { path: PathBuf },
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {}: {}", .0.path.display(), .0)]
    Parse(ParseError),
    #[error("root of {} must be an object, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },
    #[error("failed to serialize {}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON type name used in diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn read_source(path: &Path) -> Result<String, DocumentError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DocumentError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => DocumentError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn parse_source(path: &Path, content: &str) -> Result<Value, DocumentError> {
    serde_json::from_str(content)
        .map_err(|err| DocumentError::Parse(ParseError::from_serde(path, content, &err)))
}

/// Check that the file at `path` exists and holds syntactically valid JSON.
///
/// Any JSON value is accepted at the root; only syntax is checked.
pub fn check_syntax(path: &Path) -> Result<(), DocumentError> {
    let content = read_source(path)?;
    parse_source(path, &content).map(|_| ())
}

/// One locale's translation catalog, held in memory between load and store.
///
/// Key order from the file is kept, so a load/store cycle without edits
/// only normalizes whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleDocument {
    path: PathBuf,
    root: Map<String, Value>,
}

impl LocaleDocument {
    pub fn new(path: impl Into<PathBuf>, root: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }

    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = read_source(path)?;
        match parse_source(path, &content)? {
            Value::Object(root) => Ok(Self::new(path, root)),
            other => Err(DocumentError::NotAnObject {
                path: path.to_path_buf(),
                found: value_kind(&other),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.root
    }

    /// Serialize with 2-space indentation and a trailing newline.
    ///
    /// Non-ASCII text is written as-is, never as `\u` escapes.
    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        let content =
            serde_json::to_string_pretty(&self.root).map_err(|source| DocumentError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        Ok(format!("{}\n", content))
    }

    /// Overwrite the backing file with the serialized document.
    pub fn store(&self) -> Result<(), DocumentError> {
        let content = self.to_json_string()?;
        fs::write(&self.path, content).map_err(|source| DocumentError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
