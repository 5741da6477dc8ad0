use std::collections::HashMap;
use std::sync::Mutex;

use hc_core::ports::{ConfigStoreError, ConfigStorePort};

use super::validate_key;

/// Volatile store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    values: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ConfigStorePort for InMemoryConfigStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigStoreError> {
        validate_key(key)?;
        Ok(self.values().get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), ConfigStoreError> {
        validate_key(key)?;
        self.values().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), ConfigStoreError> {
        validate_key(key)?;
        self.values().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_delete() {
        let store = InMemoryConfigStore::new();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", b"v").unwrap();
        assert_eq!(store.load("k").unwrap(), Some(b"v".to_vec()));
        store.delete("k").unwrap();
        store.delete("k").unwrap();
        assert_eq!(store.load("k").unwrap(), None);
    }
}
