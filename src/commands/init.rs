//! Init command handler.

use crate::commands::Out;
use crate::{Config, Result};
use std::path::Path;

/// Creates the data directory and its configuration file.
pub async fn init(home: &Path) -> Result<Out<String>> {
    let config = Config::create(home).await?;
    let message = format!(
        "Initialized expense tracking in '{}'",
        config.root().display()
    );
    let root = config.root().display().to_string();
    Ok(Out::new(message, root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_config() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("expenses");

        let out = init(&home).await.unwrap();
        assert!(out.message().contains("Initialized expense tracking"));
        assert!(home.join("config.json").is_file());
    }

    #[tokio::test]
    async fn test_init_twice_fails() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("expenses");
        init(&home).await.unwrap();
        assert!(init(&home).await.is_err());
    }
}
