use std::sync::Arc;

use hc_core::hotkey::{ChordCodecError, ChordSpec, CHORD_CONFIG_KEY};
use hc_core::ports::{ConfigStoreError, ConfigStorePort};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ChordStoreError {
    #[error(transparent)]
    Store(#[from] ConfigStoreError),

    #[error(transparent)]
    Codec(#[from] ChordCodecError),
}

/// What the configuration store currently holds for the chord.
#[derive(Debug)]
pub enum StoredChord {
    Valid(ChordSpec),
    Absent,
    Invalid(ChordStoreError),
}

/// Persists the hotkey chord under [`CHORD_CONFIG_KEY`].
#[derive(Clone)]
pub struct ChordStore {
    store: Arc<dyn ConfigStorePort>,
}

impl ChordStore {
    pub fn new(store: Arc<dyn ConfigStorePort>) -> Self {
        Self { store }
    }

    pub fn read(&self) -> StoredChord {
        let bytes = match self.store.load(CHORD_CONFIG_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return StoredChord::Absent,
            Err(err) => return StoredChord::Invalid(err.into()),
        };
        match ChordSpec::decode(&bytes) {
            Ok(chord) => StoredChord::Valid(chord),
            Err(err) => StoredChord::Invalid(err.into()),
        }
    }

    /// Raw persisted bytes, for diagnostics.
    pub fn read_raw(&self) -> Result<Option<Vec<u8>>, ChordStoreError> {
        Ok(self.store.load(CHORD_CONFIG_KEY)?)
    }

    /// Loads the persisted chord, falling back to (and persisting) the
    /// default when nothing usable is stored.
    pub fn load_or_default(&self) -> ChordSpec {
        let reason = match self.read() {
            StoredChord::Valid(chord) => return chord,
            StoredChord::Absent => "no chord persisted".to_string(),
            StoredChord::Invalid(err) => err.to_string(),
        };

        let chord = ChordSpec::default();
        warn!(%reason, chord = %chord, "Discarding persisted hotkey, using default");
        if let Err(err) = self.save(&chord) {
            warn!(error = %err, "Failed to persist default hotkey");
        }
        chord
    }

    pub fn save(&self, chord: &ChordSpec) -> Result<(), ChordStoreError> {
        let bytes = chord.encode()?;
        self.store.save(CHORD_CONFIG_KEY, &bytes)?;
        info!(chord = %chord, "Persisted hotkey chord");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), ChordStoreError> {
        self.store.delete(CHORD_CONFIG_KEY)?;
        info!("Deleted persisted hotkey chord");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::hotkey::{KeyCode, Modifiers};
    use hc_infra::store::InMemoryConfigStore;

    fn store() -> (Arc<InMemoryConfigStore>, ChordStore) {
        let backing = Arc::new(InMemoryConfigStore::new());
        (backing.clone(), ChordStore::new(backing))
    }

    #[test]
    fn absent_chord_falls_back_to_default_and_persists_it() {
        let (backing, chords) = store();

        assert_eq!(chords.load_or_default(), ChordSpec::default());

        let bytes = backing.load(CHORD_CONFIG_KEY).unwrap().unwrap();
        assert_eq!(ChordSpec::decode(&bytes).unwrap(), ChordSpec::default());
    }

    #[test]
    fn invalid_chord_is_replaced() {
        let (backing, chords) = store();
        let command_only = ChordSpec::new(KeyCode::V, Modifiers::COMMAND)
            .encode()
            .unwrap();
        backing.save(CHORD_CONFIG_KEY, &command_only).unwrap();

        assert!(matches!(chords.read(), StoredChord::Invalid(_)));
        assert_eq!(chords.load_or_default(), ChordSpec::default());
        assert!(matches!(chords.read(), StoredChord::Valid(_)));
    }

    #[test]
    fn undecodable_bytes_are_replaced() {
        let (backing, chords) = store();
        backing.save(CHORD_CONFIG_KEY, b"{not json").unwrap();

        assert_eq!(chords.load_or_default(), ChordSpec::default());
    }

    #[test]
    fn saved_chord_is_loaded_back() {
        let (_backing, chords) = store();
        let chord = ChordSpec::new(KeyCode::K, Modifiers::CONTROL | Modifiers::OPTION);
        chords.save(&chord).unwrap();

        assert_eq!(chords.load_or_default(), chord);

        chords.clear().unwrap();
        assert!(matches!(chords.read(), StoredChord::Absent));
    }
}
