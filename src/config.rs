//! Configuration and data-directory handling.
//!
//! The data directory is `$EXPENSES_HOME` (default `~/.expenses`). It holds `config.json` and
//! the persisted expense collection. The `init` subcommand creates it; everything else loads it.

use crate::store::{ExpenseRepository, FileStorage, EXPENSES_KEY};
use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "expenses";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";

/// The `Config` object represents the data directory of the app. You instantiate it by providing
/// the path to `$EXPENSES_HOME`; from there it loads `$EXPENSES_HOME/config.json` and provides
/// paths to the items expected within the directory.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the data directory, if it does not exist, and writes an initial `config.json`.
    ///
    /// # Errors
    /// - Returns an error if the directory is already initialized.
    /// - Returns an error if any file operation fails.
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the expenses home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;

        let config_path = root.join(CONFIG_JSON);
        if config_path.is_file() {
            bail!(
                "The directory is already initialized, '{}' exists",
                config_path.display()
            );
        }

        let config_file = ConfigFile::default();
        config_file.save(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// This will
    /// - validate that the home directory and the config file exist
    /// - load and validate the config file
    /// - return the loaded configuration object
    pub async fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        let root = utils::canonicalize(&maybe_relative)
            .await
            .context("The expenses home directory is missing, run 'expenses init' first")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!(
                "The config file is missing '{}', run 'expenses init' first",
                config_path.display()
            );
        }
        let config_file = ConfigFile::load(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The file holding the persisted expense collection.
    pub fn data_path(&self) -> PathBuf {
        self.root.join(format!("{EXPENSES_KEY}.json"))
    }

    pub fn config_version(&self) -> u8 {
        self.config_file.config_version
    }

    /// Returns a repository backed by this data directory.
    pub fn repository(&self) -> ExpenseRepository {
        ExpenseRepository::new(FileStorage::new(self.root.clone()))
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "expenses",
///   "config_version": 1
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "expenses"
    app_name: String,

    /// Configuration file version
    config_version: u8,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile asynchronously from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if it belongs to some other
    /// application.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = utils::read(path).await?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_then_load() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("expenses");

        let created = Config::create(&root).await.unwrap();
        assert!(created.config_path().is_file());

        let loaded = Config::load(&root).await.unwrap();
        assert_eq!(loaded.root(), created.root());
        assert_eq!(loaded.config_version(), CONFIG_VERSION);
    }

    #[tokio::test]
    async fn test_create_twice_fails() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("expenses");
        Config::create(&root).await.unwrap();
        assert!(Config::create(&root).await.is_err());
    }

    #[tokio::test]
    async fn test_load_uninitialized_fails() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(dir.path().join("missing")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_rejects_foreign_config() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("expenses");
        Config::create(&root).await.unwrap();
        tokio::fs::write(
            root.join(CONFIG_JSON),
            r#"{"app_name":"tiller","config_version":1}"#,
        )
        .await
        .unwrap();
        assert!(Config::load(&root).await.is_err());
    }
}
