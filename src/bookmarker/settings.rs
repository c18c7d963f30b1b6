use crate::error::{BookmarkerError, Result};
use crate::model::Settings;
use crate::store::settings::SettingsStore;
use crate::store::StorageBackend;
use tracing::{debug, warn};

/// Holds the current preferences and persists them on change.
///
/// Writes are skipped when the new value equals the last loaded or saved
/// one, so callers can apply settings freely without causing redundant
/// writes.
pub struct SettingsManager<B: StorageBackend> {
    store: SettingsStore<B>,
    current: Settings,
}

impl<B: StorageBackend> SettingsManager<B> {
    /// Loads the persisted settings. An unreadable blob falls back to
    /// defaults; the reason is returned alongside so it can be shown.
    pub fn load(store: SettingsStore<B>) -> Result<(Self, Option<String>)> {
        let (current, warning) = match store.load() {
            Ok(settings) => (settings, None),
            Err(BookmarkerError::Format(reason)) => {
                warn!(%reason, "settings are unreadable, using defaults");
                (Settings::default(), Some(reason))
            }
            Err(e) => return Err(e),
        };
        Ok((Self { store, current }, warning))
    }

    pub fn settings(&self) -> Settings {
        self.current
    }

    /// Persists `next` if it differs from the current value. Returns whether
    /// anything was written.
    pub fn apply(&mut self, next: Settings) -> Result<bool> {
        if next == self.current {
            return Ok(false);
        }
        self.store.save(&next)?;
        debug!(?next, "saved settings");
        self.current = next;
        Ok(true)
    }

    pub fn set_auto_delete(&mut self, enabled: bool) -> Result<bool> {
        let mut next = self.current;
        next.auto_delete = enabled;
        self.apply(next)
    }

    /// Sets a setting by its user-facing key (e.g. `auto-delete`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool> {
        let mut next = self.current;
        next.set(key, value).map_err(BookmarkerError::Validation)?;
        self.apply(next)
    }
}
