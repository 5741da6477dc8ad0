use super::errors::ConfigStoreError;

/// Small key/value store for persisted preferences.
///
/// # Behavior
/// - `load` of a missing key returns `Ok(None)`.
/// - `delete` of a missing key succeeds.
pub trait ConfigStorePort: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigStoreError>;

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), ConfigStoreError>;

    fn delete(&self, key: &str) -> Result<(), ConfigStoreError>;
}
