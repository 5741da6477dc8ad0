//! Preference stores backing [`hc_core::ports::ConfigStorePort`].

mod file_store;
mod memory_store;

pub use file_store::FileConfigStore;
pub use memory_store::InMemoryConfigStore;

use hc_core::ports::ConfigStoreError;

/// Keys become file names, so only a conservative character set is allowed.
pub(crate) fn validate_key(key: &str) -> Result<(), ConfigStoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(ConfigStoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_key;

    #[test]
    fn key_validation() {
        assert!(validate_key("hotkey.chord").is_ok());
        assert!(validate_key("a_b-c.1").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("with space").is_err());
    }
}
