use super::StorageBackend;
use crate::error::{BookmarkerError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory storage backend for testing.
///
/// Uses `Rc<RefCell<..>>` since bookmarker is single-threaded. Clones share
/// the same entries, so tests can hand one clone to a store and keep another
/// to look at what was written.
#[derive(Clone, Default)]
pub struct MemBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    simulate_write_error: Rc<Cell<bool>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Test helper to plant a raw blob, bypassing any encoding.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(BookmarkerError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::manager::RecordManager;
    use crate::model::SavedPage;
    use crate::store::records::RecordStore;

    /// A record manager over a fresh `MemBackend`, plus a handle on that
    /// backend for inspecting writes.
    pub struct ManagerFixture {
        pub backend: MemBackend,
        pub manager: RecordManager<MemBackend>,
    }

    impl Default for ManagerFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ManagerFixture {
        pub fn new() -> Self {
            let backend = MemBackend::new();
            let manager = RecordManager::new(RecordStore::new(backend.clone()));
            Self { backend, manager }
        }

        /// Adds one page per title, in order, so the last title ends up
        /// with display index 1.
        pub fn with_pages(mut self, titles: &[&str]) -> Self {
            for title in titles {
                let slug = title.to_lowercase().replace(' ', "-");
                let page = SavedPage::new(
                    format!("https://example.com/{}", slug),
                    title.to_string(),
                    format!("Reminder for {}", title),
                );
                self.manager.add_or_update(page).unwrap();
            }
            self
        }

        pub fn titles(&mut self) -> Vec<String> {
            self.manager
                .display_order()
                .unwrap()
                .into_iter()
                .map(|p| p.title)
                .collect()
        }
    }
}
