//! # API Facade
//!
//! The single entry point for every bookmarker operation, whatever the UI.
//! It owns the two managers, turns user-typed selectors into
//! [`RecordSelector`]s and dispatches to `commands/*.rs`.
//!
//! The facade holds no business logic and performs no output. It does one
//! thing besides dispatching: when loading the persisted pages or settings
//! degraded to an empty state, the next result carries a warning so the UI
//! can show it.
//!
//! `BookmarkerApi<B>` is generic over the storage backend: `FileBackend` in
//! the binary, `MemBackend` in tests.

use crate::capture::CaptureSource;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{BookmarkerError, Result};
use crate::index::{self, RecordSelector};
use crate::manager::{RecordManager, SearchMode};
use crate::model::Settings;
use crate::opener::LinkOpener;
use crate::settings::SettingsManager;
use crate::store::records::RecordStore;
use crate::store::settings::SettingsStore;
use crate::store::StorageBackend;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::RecordFilter;
pub use crate::commands::MessageLevel;

pub struct BookmarkerApi<B: StorageBackend> {
    records: RecordManager<B>,
    settings: SettingsManager<B>,
    settings_warning: Option<String>,
}

impl<B: StorageBackend + Clone> BookmarkerApi<B> {
    /// Builds both managers over `backend`. Settings are read now; saved
    /// pages are read on first use.
    pub fn new(backend: B) -> Result<Self> {
        let (settings, settings_warning) =
            SettingsManager::load(SettingsStore::new(backend.clone()))?;
        Ok(Self {
            records: RecordManager::new(RecordStore::new(backend)),
            settings,
            settings_warning,
        })
    }
}

impl<B: StorageBackend> BookmarkerApi<B> {
    pub fn settings(&self) -> Settings {
        self.settings.settings()
    }

    pub fn records(&mut self) -> &mut RecordManager<B> {
        &mut self.records
    }

    pub fn capture_page<C: CaptureSource + ?Sized>(
        &mut self,
        source: &C,
        reminder_text: &str,
    ) -> Result<CmdResult> {
        let result = commands::capture::run(&mut self.records, source, reminder_text);
        self.finish(result)
    }

    pub fn list_pages(&mut self, filter: RecordFilter) -> Result<CmdResult> {
        let result = commands::list::run(&mut self.records, filter);
        self.finish(result)
    }

    pub fn search_pages(&mut self, query: &str, mode: SearchMode) -> Result<CmdResult> {
        self.list_pages(RecordFilter::search(query, mode))
    }

    pub fn view_pages<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        let result = commands::view::run(&mut self.records, &selectors);
        self.finish(result)
    }

    pub fn edit_reminder(&mut self, selector: &str, reminder_text: &str) -> Result<CmdResult> {
        let selector = parse_single(selector)?;
        let result = commands::edit::run(&mut self.records, &selector, reminder_text);
        self.finish(result)
    }

    /// Opens the selected pages; auto-delete comes from the current
    /// settings, `delete_after` forces removal for this call only.
    pub fn open_pages<I: AsRef<str>, O: LinkOpener + ?Sized>(
        &mut self,
        opener: &O,
        selectors: &[I],
        delete_after: bool,
    ) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        let auto_delete = self.settings.settings().auto_delete;
        let result = commands::open::run(
            &mut self.records,
            opener,
            &selectors,
            auto_delete,
            delete_after,
        );
        self.finish(result)
    }

    pub fn delete_pages<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        let result = commands::delete::run(&mut self.records, &selectors);
        self.finish(result)
    }

    pub fn clear_pages(&mut self) -> Result<CmdResult> {
        let result = commands::clear::run(&mut self.records);
        self.finish(result)
    }

    pub fn export_pages(&mut self, output: Option<&Path>) -> Result<CmdResult> {
        let result = commands::export::run(&mut self.records, output);
        self.finish(result)
    }

    pub fn import_pages(&mut self, path: &Path) -> Result<CmdResult> {
        let result = commands::import::run(&mut self.records, path);
        self.finish(result)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&mut self.settings, action);
        self.finish(result)
    }

    /// Puts pending load warnings in front of the command's own messages.
    fn finish(&mut self, result: Result<CmdResult>) -> Result<CmdResult> {
        let mut result = result?;
        let mut warnings = Vec::new();
        if let Some(reason) = self.settings_warning.take() {
            warnings.push(CmdMessage::warning(format!(
                "Format error! Settings could not be retrieved ({}), using defaults",
                reason
            )));
        }
        if let Some(reason) = self.records.take_load_warning() {
            warnings.push(CmdMessage::warning(format!(
                "Format error! Pages could not be retrieved ({})",
                reason
            )));
        }
        if !warnings.is_empty() {
            warnings.append(&mut result.messages);
            result.messages = warnings;
        }
        Ok(result)
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>> {
    if inputs.is_empty() {
        return Err(BookmarkerError::Api("no page selected".to_string()));
    }
    index::parse_selectors(inputs).map_err(BookmarkerError::Api)
}

fn parse_single(input: &str) -> Result<RecordSelector> {
    let mut selectors = parse_selectors(&[input])?;
    if selectors.len() != 1 {
        return Err(BookmarkerError::Api(format!(
            "expected a single page, got {}",
            input
        )));
    }
    Ok(selectors.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::GivenTab;
    use crate::opener::NoopOpener;
    use crate::store::memory::MemBackend;
    use crate::store::{SAVED_PAGES_KEY, SETTINGS_KEY};

    fn api() -> (MemBackend, BookmarkerApi<MemBackend>) {
        let backend = MemBackend::new();
        let api = BookmarkerApi::new(backend.clone()).unwrap();
        (backend, api)
    }

    fn tab(url: &str, title: &str) -> GivenTab {
        GivenTab::new(Some(url.to_string()), Some(title.to_string()))
    }

    #[test]
    fn capture_then_list() {
        let (_, mut api) = api();
        api.capture_page(&tab("https://a.example", "First"), "read later")
            .unwrap();
        api.capture_page(&tab("https://b.example", "Second"), "and this")
            .unwrap();

        let result = api.list_pages(RecordFilter::default()).unwrap();
        let titles: Vec<_> = result
            .listed_records
            .iter()
            .map(|dr| dr.record.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn open_uses_auto_delete_setting() {
        let (_, mut api) = api();
        api.capture_page(&tab("https://a.example", "First"), "note")
            .unwrap();
        api.config(ConfigAction::Set("auto-delete".into(), "on".into()))
            .unwrap();

        let opener = NoopOpener::new();
        api.open_pages(&opener, &["1"], false).unwrap();

        assert_eq!(opener.opened(), vec!["https://a.example".to_string()]);
        assert!(api.records().is_empty().unwrap());
    }

    #[test]
    fn edit_by_index() {
        let (_, mut api) = api();
        api.capture_page(&tab("https://a.example", "First"), "old")
            .unwrap();
        let result = api.edit_reminder("1", "new").unwrap();
        assert_eq!(result.affected_records[0].reminder_text, "new");
    }

    #[test]
    fn edit_rejects_range() {
        let (_, mut api) = api();
        assert!(api.edit_reminder("1-2", "new").is_err());
    }

    #[test]
    fn bad_selector_is_an_error() {
        let (_, mut api) = api();
        assert!(matches!(
            api.delete_pages(&["first"]),
            Err(BookmarkerError::Api(_))
        ));
    }

    #[test]
    fn corrupt_pages_warn_once() {
        let (backend, mut api) = api();
        backend.put_raw(SAVED_PAGES_KEY, "{not json");

        let first = api.list_pages(RecordFilter::default()).unwrap();
        assert_eq!(first.messages[0].level, MessageLevel::Warning);
        assert!(first.messages[0]
            .content
            .starts_with("Format error! Pages could not be retrieved"));

        let second = api.list_pages(RecordFilter::default()).unwrap();
        assert!(second
            .messages
            .iter()
            .all(|m| m.level != MessageLevel::Warning));
    }

    #[test]
    fn corrupt_settings_fall_back_with_warning() {
        let backend = MemBackend::new();
        backend.put_raw(SETTINGS_KEY, "autoDelete: yes");
        let mut api = BookmarkerApi::new(backend).unwrap();

        assert!(!api.settings().auto_delete);
        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert!(result.messages[0].content.contains("Settings could not be retrieved"));
    }
}
