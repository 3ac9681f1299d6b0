use crate::store::Storage;
use crate::Result;
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory key-value storage. Used by tests in place of `FileStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .data
            .lock()
            .map_err(|_| anyhow!("The storage mutex is poisoned"))?;
        Ok(guard.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self
            .data
            .lock()
            .map_err(|_| anyhow!("The storage mutex is poisoned"))?;
        let _ = guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut guard = self
            .data
            .lock()
            .map_err(|_| anyhow!("The storage mutex is poisoned"))?;
        let _ = guard.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.read("k").await.unwrap().is_none());
        storage.write("k", "v").await.unwrap();
        assert_eq!(storage.read("k").await.unwrap().as_deref(), Some("v"));
        storage.remove("k").await.unwrap();
        assert!(storage.read("k").await.unwrap().is_none());
    }
}
