use super::{StorageBackend, SAVED_PAGES_KEY};
use crate::codec::{decode_collection, encode_collection};
use crate::error::Result;
use crate::model::SavedPage;
use tracing::debug;

/// Durable mirror of the saved-page collection.
///
/// The whole collection lives in one blob; every save overwrites it.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// `Ok(None)` when nothing was ever saved. A present blob that does not
    /// decode is a `Format` error.
    pub fn load(&self) -> Result<Option<Vec<SavedPage>>> {
        match self.backend.read(SAVED_PAGES_KEY)? {
            None => Ok(None),
            Some(raw) => decode_collection(&raw).map(Some),
        }
    }

    /// Overwrites the stored collection. An empty collection is stored as
    /// `[]` so the next load sees an empty list rather than nothing.
    pub fn save(&self, records: &[SavedPage]) -> Result<()> {
        let raw = encode_collection(records)?;
        self.backend.write(SAVED_PAGES_KEY, &raw)?;
        debug!(count = records.len(), "persisted saved pages");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove(SAVED_PAGES_KEY)
    }
}
