//! Configuration handling for spendsort.
//!
//! The optional configuration file is stored at `$SPENDSORT_HOME/config.json`. It can name the
//! statement file and replace the built-in keyword table. The file is only ever read.

use crate::model::CategoryRules;
use crate::{utils, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "spendsort";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const DEFAULT_STATEMENT: &str = "bank_statement.csv";

/// The resolved settings for one run: which statement file to read and how to categorize it.
#[derive(Debug, Clone)]
pub struct Config {
    statement_path: PathBuf,
    rules: CategoryRules,
}

impl Config {
    /// Resolves the configuration rooted at `spendsort_home`.
    ///
    /// The statement path is taken from `statement`, if given, then from `config.json`, and
    /// finally defaults to `$SPENDSORT_HOME/bank_statement.csv`. A relative path in `config.json`
    /// is resolved against `spendsort_home`.
    ///
    /// # Errors
    /// - Returns an error if `config.json` exists but cannot be read or parsed.
    pub fn load(spendsort_home: impl Into<PathBuf>, statement: Option<&Path>) -> Result<Self> {
        let root = spendsort_home.into();
        let config_path = root.join(CONFIG_JSON);
        let config_file = if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            ConfigFile::load(&config_path)?
        } else {
            debug!(
                "No configuration file at {}, using defaults",
                config_path.display()
            );
            ConfigFile::default()
        };

        let statement_path = match (statement, &config_file.statement_path) {
            (Some(p), _) => p.to_path_buf(),
            (None, Some(p)) if p.is_absolute() => p.clone(),
            (None, Some(p)) => root.join(p),
            (None, None) => root.join(DEFAULT_STATEMENT),
        };

        let rules = config_file.categories.unwrap_or_default();
        debug!(
            "Statement file is {} with {} category keywords",
            statement_path.display(),
            rules.len()
        );

        Ok(Self {
            statement_path,
            rules,
        })
    }

    /// Creates a configuration directly, without a home directory or config file.
    pub fn new(statement_path: impl Into<PathBuf>, rules: CategoryRules) -> Self {
        Self {
            statement_path: statement_path.into(),
            rules,
        }
    }

    pub fn statement_path(&self) -> &Path {
        &self.statement_path
    }

    pub fn rules(&self) -> &CategoryRules {
        &self.rules
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "spendsort",
///   "config_version": 1,
///   "statement_path": "bank_statement.csv",
///   "categories": [
///     { "keyword": "costco", "category": "Groceries" },
///     { "keyword": "starbucks", "category": "Food & Beverages" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "spendsort"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Path to the statement CSV (relative to the home directory, or absolute)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    statement_path: Option<PathBuf>,

    /// Replaces the built-in keyword table when present. Order is significant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    categories: Option<CategoryRules>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            statement_path: None,
            categories: None,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or names another application.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path).context("Unable to load config file")?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }
}
