//! # Record Manager
//!
//! The in-memory owner of the saved-page collection. Nothing else mutates
//! the collection; the [`RecordStore`] only mirrors it.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized ──first use──▶ Loading ──▶ Ready
//! ```
//!
//! The store is read once, lazily, on the first operation. A missing blob
//! and an unreadable blob both start the session with an empty collection;
//! the latter also leaves a warning for the caller to surface via
//! [`RecordManager::take_load_warning`]. Environmental failures (I/O) do not
//! count as "unreadable": they are returned and the manager stays
//! uninitialized so the next call retries.
//!
//! ## Writes
//!
//! Every mutation builds the next collection on the side, persists it, and
//! only then swaps it in. A failed write leaves memory and disk as they were.
//!
//! ## Ordering
//!
//! The collection keeps insertion order. Display order is the reverse: the
//! most recently added page first. Updating a page keeps its position.

use crate::codec::{decode_collection, encode_collection};
use crate::error::{BookmarkerError, Result};
use crate::model::SavedPage;
use crate::store::records::RecordStore;
use crate::store::StorageBackend;
use regex::RegexBuilder;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Queries shorter than this (after trimming) do not filter.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerState {
    Uninitialized,
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Substring,
    Regex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new page was appended; `total` is the collection size afterwards.
    Added { total: usize },
    /// An existing page was replaced in place.
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderOutcome {
    Updated(SavedPage),
    Unchanged,
}

/// Proof that an import slot is reserved. Obtained from
/// [`RecordManager::begin_import`] and consumed by `complete_import` or
/// `abandon_import`.
#[derive(Debug)]
#[must_use = "an import ticket must be completed or abandoned"]
pub struct ImportTicket {
    serial: u64,
}

pub struct RecordManager<B: StorageBackend> {
    store: RecordStore<B>,
    state: ManagerState,
    records: Vec<SavedPage>,
    load_warning: Option<String>,
    pending_import: Option<u64>,
    import_serial: u64,
}

impl<B: StorageBackend> RecordManager<B> {
    pub fn new(store: RecordStore<B>) -> Self {
        Self {
            store,
            state: ManagerState::Uninitialized,
            records: Vec::new(),
            load_warning: None,
            pending_import: None,
            import_serial: 0,
        }
    }

    pub fn state(&self) -> ManagerState {
        self.state
    }

    /// Returns the warning left by a degraded load, once.
    pub fn take_load_warning(&mut self) -> Option<String> {
        self.load_warning.take()
    }

    fn ensure_ready(&mut self) -> Result<()> {
        if self.state == ManagerState::Ready {
            return Ok(());
        }

        self.state = ManagerState::Loading;
        match self.store.load() {
            Ok(Some(records)) => {
                debug!(count = records.len(), "loaded saved pages");
                self.records = records;
            }
            Ok(None) => {
                debug!("no saved pages yet");
                self.records = Vec::new();
            }
            Err(BookmarkerError::Format(reason)) => {
                warn!(%reason, "saved pages are unreadable, starting with an empty collection");
                self.records = Vec::new();
                self.load_warning = Some(reason);
            }
            Err(e) => {
                self.state = ManagerState::Uninitialized;
                return Err(e);
            }
        }
        self.state = ManagerState::Ready;
        Ok(())
    }

    fn commit(&mut self, next: Vec<SavedPage>) -> Result<()> {
        self.store.save(&next)?;
        self.records = next;
        Ok(())
    }

    /// The collection in insertion order.
    pub fn records(&mut self) -> Result<&[SavedPage]> {
        self.ensure_ready()?;
        Ok(&self.records)
    }

    /// The collection in display order: most recently added first.
    pub fn display_order(&mut self) -> Result<Vec<SavedPage>> {
        self.ensure_ready()?;
        Ok(self.records.iter().rev().cloned().collect())
    }

    pub fn len(&mut self) -> Result<usize> {
        self.ensure_ready()?;
        Ok(self.records.len())
    }

    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn get(&mut self, id: &Uuid) -> Result<Option<SavedPage>> {
        self.ensure_ready()?;
        Ok(self.records.iter().find(|r| &r.id == id).cloned())
    }

    pub fn add_or_update(&mut self, record: SavedPage) -> Result<UpsertOutcome> {
        self.ensure_ready()?;
        record.validate()?;

        let mut next = self.records.clone();
        let outcome = match next.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                existing.reminder_text = record.reminder_text;
                UpsertOutcome::Updated
            }
            None => {
                next.push(record);
                UpsertOutcome::Added { total: next.len() }
            }
        };

        self.commit(next)?;
        Ok(outcome)
    }

    pub fn update_reminder(&mut self, id: &Uuid, reminder_text: &str) -> Result<ReminderOutcome> {
        self.ensure_ready()?;
        if reminder_text.trim().is_empty() {
            return Err(BookmarkerError::Validation(
                "reminder text must not be empty".to_string(),
            ));
        }

        let mut record = self
            .records
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or(BookmarkerError::NotFound(*id))?;

        if record.reminder_text == reminder_text {
            return Ok(ReminderOutcome::Unchanged);
        }

        record.reminder_text = reminder_text.to_string();
        self.add_or_update(record.clone())?;
        Ok(ReminderOutcome::Updated(record))
    }

    /// Removes the page with `id`. Returns the removed page, or `None` when
    /// there was nothing to remove (which is not an error).
    pub fn delete(&mut self, id: &Uuid) -> Result<Option<SavedPage>> {
        self.ensure_ready()?;

        let mut next = self.records.clone();
        let position = next.iter().position(|r| &r.id == id);
        let removed = position.map(|pos| next.remove(pos));

        self.commit(next)?;
        Ok(removed)
    }

    /// Empties the collection and persists the empty marker. Returns how many
    /// pages were removed.
    pub fn delete_all(&mut self) -> Result<usize> {
        self.ensure_ready()?;
        let removed = self.records.len();
        self.commit(Vec::new())?;
        info!(removed, "deleted all saved pages");
        Ok(removed)
    }

    /// Case-insensitive match on reminder text, title and url, in display
    /// order. `None` or a query shorter than [`MIN_QUERY_LEN`] returns the
    /// whole collection.
    pub fn search(&mut self, query: Option<&str>, mode: SearchMode) -> Result<Vec<SavedPage>> {
        self.ensure_ready()?;

        let query = match query.map(str::trim) {
            Some(q) if q.chars().count() >= MIN_QUERY_LEN => q,
            _ => return self.display_order(),
        };

        let matched: Vec<SavedPage> = match mode {
            SearchMode::Substring => {
                let needle = query.to_lowercase();
                self.records
                    .iter()
                    .rev()
                    .filter(|r| r.contains_lowercase(&needle))
                    .cloned()
                    .collect()
            }
            SearchMode::Regex => {
                let re = RegexBuilder::new(query)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| BookmarkerError::Validation(format!("invalid pattern: {}", e)))?;
                self.records
                    .iter()
                    .rev()
                    .filter(|r| {
                        re.is_match(&r.reminder_text) || re.is_match(&r.title) || re.is_match(&r.url)
                    })
                    .cloned()
                    .collect()
            }
        };

        Ok(matched)
    }

    /// Serializes the full collection as pretty-printed JSON.
    pub fn export_all(&mut self) -> Result<Vec<u8>> {
        self.ensure_ready()?;
        Ok(encode_collection(&self.records)?.into_bytes())
    }

    /// Reserves the single import slot. Fails with `ImportInProgress` while
    /// another ticket is outstanding.
    pub fn begin_import(&mut self) -> Result<ImportTicket> {
        if self.pending_import.is_some() {
            return Err(BookmarkerError::ImportInProgress);
        }
        self.import_serial += 1;
        self.pending_import = Some(self.import_serial);
        Ok(ImportTicket {
            serial: self.import_serial,
        })
    }

    pub fn abandon_import(&mut self, ticket: ImportTicket) {
        if self.pending_import == Some(ticket.serial) {
            self.pending_import = None;
        }
    }

    /// Replaces the whole collection with the decoded `raw` bytes. Any
    /// malformed page rejects the import and leaves the collection untouched.
    pub fn complete_import(&mut self, ticket: ImportTicket, raw: &[u8]) -> Result<usize> {
        if self.pending_import != Some(ticket.serial) {
            return Err(BookmarkerError::Api("stale import ticket".to_string()));
        }
        self.pending_import = None;

        self.ensure_ready()?;
        let text = std::str::from_utf8(raw)
            .map_err(|_| BookmarkerError::Format("file is not UTF-8 text".to_string()))?;
        let records = decode_collection(text)?;
        let count = records.len();

        self.commit(records)?;
        info!(count, "imported saved pages");
        Ok(count)
    }

    pub fn import_from(&mut self, raw: &[u8]) -> Result<usize> {
        let ticket = self.begin_import()?;
        self.complete_import(ticket, raw)
    }
}
