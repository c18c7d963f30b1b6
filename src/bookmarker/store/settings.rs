use super::{StorageBackend, SETTINGS_KEY};
use crate::error::{BookmarkerError, Result};
use crate::model::Settings;

/// Persists the preferences object. Never reports "not found": an absent
/// key loads as [`Settings::default`].
pub struct SettingsStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SettingsStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn load(&self) -> Result<Settings> {
        match self.backend.read(SETTINGS_KEY)? {
            None => Ok(Settings::default()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| BookmarkerError::Format(format!("settings: {}", e))),
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        let raw = serde_json::to_string_pretty(settings).map_err(BookmarkerError::Serialization)?;
        self.backend.write(SETTINGS_KEY, &raw)
    }
}
