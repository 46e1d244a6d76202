use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{
    Locale, LocaleLayout,
    locale::{DEFAULT_FILE_NAME, DEFAULT_LOCALES},
};

pub const CONFIG_FILE_NAME: &str = ".localesrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_locales_root() -> String {
    "./public/locales".to_string()
}

fn default_locales() -> Vec<String> {
    DEFAULT_LOCALES.iter().map(|id| id.to_string()).collect()
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            locales: default_locales(),
            file_name: default_file_name(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an empty locale list, a malformed locale id, or a
    /// file name that is not a single path component.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale");
        }
        self.parsed_locales()?;

        if self.file_name.is_empty() || self.file_name.contains(['/', '\\']) {
            bail!(
                "Invalid 'fileName': \"{}\" (expected a plain file name such as common.json)",
                self.file_name
            );
        }

        Ok(())
    }

    pub fn parsed_locales(&self) -> Result<Vec<Locale>> {
        self.locales
            .iter()
            .map(|id| {
                Locale::new(id.as_str())
                    .with_context(|| format!("Invalid locale in 'locales': \"{}\"", id))
            })
            .collect()
    }

    /// Locale layout with `localesRoot` resolved against `base_dir`.
    pub fn layout(&self, base_dir: &Path) -> LocaleLayout {
        LocaleLayout::new(base_dir.join(&self.locales_root), self.file_name.clone())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against: the config
    /// file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
